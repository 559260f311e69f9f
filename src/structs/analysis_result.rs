use serde::{Deserialize, Serialize};
use crate::structs::finding::Finding;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisMetadata {
    pub framework: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub program_id: Option<String>,
    pub analyzed_at: chrono::DateTime<chrono::Utc>,
    /// Server-side analysis time in milliseconds.
    pub duration: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub score: u8,
    #[serde(default)]
    pub findings: Vec<Finding>,
    pub summary: String,
    #[serde(default)]
    pub skills: Vec<String>,
    pub metadata: AnalysisMetadata,
}
