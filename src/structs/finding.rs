use serde::{Deserialize, Serialize};
use crate::enums::finding_severity::FindingSeverity;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FindingLocation {
    pub file: String,
    pub line: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instruction: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    pub severity: FindingSeverity,
    pub title: String,
    pub location: FindingLocation,
    pub description: String,
    pub recommendation: String,
    /// Pattern id of the check that produced this finding.
    pub pattern: String,
}
