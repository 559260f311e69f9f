pub mod analysis_result;
pub mod analyze_options;
pub mod analyze_request;
pub mod api_error_body;
pub mod api_request;
pub mod api_response;
pub mod auditor_entry;
pub mod badge_entry;
pub mod cli;
pub mod config;
pub mod context_query;
pub mod context_result;
pub mod definition_cache;
pub mod finding;
pub mod findings_count;
pub mod health_status;
pub mod program_entry;
pub mod program_page;
pub mod registry_stats;
pub mod skill_chain;
pub mod skill_definition;
pub mod validation_result;
