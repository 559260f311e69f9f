use serde::{Deserialize, Serialize};
use crate::enums::finding_severity::FindingSeverity;
use crate::enums::framework::Framework;
use crate::enums::pattern_type::PatternType;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextQuery {
    pub pattern: Option<String>,
    pub framework: Option<Framework>,
    pub severity: Option<FindingSeverity>,
    pub pattern_type: Option<PatternType>,
}

impl ContextQuery {
    /// Query string pairs; unset filters are omitted.
    pub fn to_query_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        if let Some(pattern) = &self.pattern {
            params.push(("pattern".to_string(), pattern.clone()));
        }
        if let Some(framework) = self.framework {
            params.push(("framework".to_string(), framework.as_str().to_string()));
        }
        if let Some(severity) = self.severity {
            params.push(("severity".to_string(), severity.as_str().to_string()));
        }
        if let Some(pattern_type) = self.pattern_type {
            params.push(("pattern_type".to_string(), pattern_type.as_str().to_string()));
        }
        params
    }
}
