pub mod config;
pub mod api_config;
pub mod solana_config;
