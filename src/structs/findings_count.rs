use serde::Serialize;
use crate::enums::finding_severity::FindingSeverity;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FindingsCount {
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub info: usize,
    pub pass: usize,
    pub total: usize,
}

impl FindingsCount {
    pub fn add(&mut self, severity: FindingSeverity) {
        match severity {
            FindingSeverity::Critical => self.critical += 1,
            FindingSeverity::High => self.high += 1,
            FindingSeverity::Medium => self.medium += 1,
            FindingSeverity::Info => self.info += 1,
            FindingSeverity::Pass => self.pass += 1,
        }
        self.total += 1;
    }

    pub fn get(&self, severity: FindingSeverity) -> usize {
        match severity {
            FindingSeverity::Critical => self.critical,
            FindingSeverity::High => self.high,
            FindingSeverity::Medium => self.medium,
            FindingSeverity::Info => self.info,
            FindingSeverity::Pass => self.pass,
        }
    }
}
