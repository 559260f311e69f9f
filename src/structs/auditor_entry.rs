use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditorEntry {
    pub authority: String,
    pub name: String,
    pub credentials_uri: String,
    pub total_analyses: u64,
    pub average_score: u64,
    pub is_active: bool,
}
