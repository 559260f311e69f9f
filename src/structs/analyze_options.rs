use std::path::PathBuf;
use crate::enums::finding_severity::FindingSeverity;
use crate::enums::framework::Framework;

#[derive(Debug, Clone, Default)]
pub struct AnalyzeOptions {
    /// Path to the program source file.
    pub program: PathBuf,
    /// Detected from the source when unset.
    pub framework: Option<Framework>,
    /// Defaults to `security-audit` when unset.
    pub skills: Option<Vec<String>>,
    pub min_score: Option<u8>,
    pub fail_on: Vec<FindingSeverity>,
}

impl AnalyzeOptions {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            ..Self::default()
        }
    }

    pub fn with_framework(mut self, framework: Framework) -> Self {
        self.framework = Some(framework);
        self
    }

    pub fn with_skills(mut self, skills: Vec<String>) -> Self {
        self.skills = Some(skills);
        self
    }

    pub fn with_min_score(mut self, min_score: u8) -> Self {
        self.min_score = Some(min_score);
        self
    }

    pub fn with_fail_on(mut self, severities: Vec<FindingSeverity>) -> Self {
        self.fail_on = severities;
        self
    }
}
