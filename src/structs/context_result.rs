use serde::{Deserialize, Serialize};
use crate::enums::finding_severity::FindingSeverity;
use crate::enums::pattern_type::PatternType;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaticRule {
    pub id: String,
    pub severity: FindingSeverity,
    pub pattern_type: PatternType,
    pub description: String,
    pub detection_hint: String,
}

/// A vulnerability reported by a past public audit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditFindingEntry {
    pub source: String,
    pub vulnerability_class: String,
    pub severity: FindingSeverity,
    pub description: String,
    pub fix_pattern: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameworkPatternEntry {
    pub framework: String,
    pub pattern_name: String,
    pub description: String,
    pub example_code: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextResult {
    #[serde(default)]
    pub rules: Vec<StaticRule>,
    #[serde(default)]
    pub audit_findings: Vec<AuditFindingEntry>,
    #[serde(default)]
    pub framework_patterns: Vec<FrameworkPatternEntry>,
}
