//! Client SDK for the Parity security analysis API and the on-chain
//! program registry it is anchored to.
//!
//! ```no_run
//! use parity_sdk::{AnalyzeOptions, ParityClient};
//!
//! let mut client = ParityClient::from_api_key("pk_live_...")?;
//! let result = client.analyze(&AnalyzeOptions::new("programs/vault/src/lib.rs").with_min_score(80))?;
//! println!("{}", result.summary);
//! # Ok::<(), parity_sdk::ParityError>(())
//! ```

pub mod config;
pub mod enums;
pub mod errors;
pub mod helpers;
pub mod services;
pub mod structs;
pub mod traits;
pub mod workers;

pub use errors::{ParityError, ParityResult};
pub use services::address_deriver::ProgramAddressDeriver;
pub use services::analysis_engine::AnalysisEngine;
pub use services::parity_client::ParityClient;
pub use services::report_formatter::ReportFormatter;
pub use services::skill_parser::SkillParser;
pub use structs::analysis_result::AnalysisResult;
pub use structs::analyze_options::AnalyzeOptions;
pub use structs::config::api_config::ApiConfig;
