use serde::{Deserialize, Serialize};

/// Expansion of a composite skill into the skills it runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillChain {
    pub skill: String,
    pub chain: Vec<String>,
}
