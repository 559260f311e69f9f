pub mod account_kind;
pub mod commands;
pub mod finding_severity;
pub mod framework;
pub mod http_method;
pub mod output_format;
pub mod pattern_type;
pub mod pda_command;
pub mod programs_command;
pub mod skills_command;
pub mod transport_error;
pub mod verification_tier;
