use serde::{Deserialize, Serialize};
use crate::enums::framework::Framework;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramEntry {
    pub owner: String,
    /// Hex-encoded SHA-256 of the program.
    pub program_hash: String,
    pub framework: Framework,
    pub metadata_uri: String,
    /// Unix seconds on chain; the HTTP API may send an ISO string instead.
    #[serde(deserialize_with = "crate::helpers::serde_helper::timestamp")]
    pub registered_at: i64,
    pub analysis_count: u32,
    pub latest_score: u8,
    pub is_verified: bool,
}
