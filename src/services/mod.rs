pub mod account_decoder;
pub mod address_deriver;
pub mod analysis_engine;
pub mod context_api;
pub mod parity_client;
pub mod report_formatter;
pub mod request_executor;
pub mod reqwest_transport;
pub mod skill_parser;
pub mod skills_api;
