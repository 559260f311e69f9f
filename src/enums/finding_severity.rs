use std::fmt;
use std::str::FromStr;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Severity of a finding, ordered from harmless to worst.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, Eq, Hash, PartialEq, PartialOrd, Ord, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FindingSeverity {
    Pass,
    Info,
    Medium,
    High,
    Critical,
}

impl FindingSeverity {
    /// Worst first, the order reports are grouped in.
    pub const REPORT_ORDER: [FindingSeverity; 5] = [
        FindingSeverity::Critical,
        FindingSeverity::High,
        FindingSeverity::Medium,
        FindingSeverity::Info,
        FindingSeverity::Pass,
    ];

    /// Points deducted from a perfect score of 100.
    pub fn weight(&self) -> u32 {
        match self {
            Self::Critical => 25,
            Self::High => 15,
            Self::Medium => 8,
            Self::Info => 3,
            Self::Pass => 0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Info => "info",
            Self::Pass => "pass",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Critical => "🔴",
            Self::High => "🟠",
            Self::Medium => "🟡",
            Self::Info => "🔵",
            Self::Pass => "🟢",
        }
    }

    /// SARIF result level.
    pub fn sarif_level(&self) -> &'static str {
        match self {
            Self::Critical | Self::High => "error",
            _ => "warning",
        }
    }
}

impl Default for FindingSeverity {
    fn default() -> Self {
        FindingSeverity::Info
    }
}

impl fmt::Display for FindingSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FindingSeverity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "critical" => Ok(Self::Critical),
            "high" => Ok(Self::High),
            "medium" => Ok(Self::Medium),
            "info" => Ok(Self::Info),
            "pass" => Ok(Self::Pass),
            other => Err(format!("unknown severity '{}'", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_grow_with_severity() {
        let mut ordered = FindingSeverity::REPORT_ORDER.to_vec();
        ordered.sort();
        let weights: Vec<u32> = ordered.iter().map(|s| s.weight()).collect();
        assert_eq!(weights, vec![0, 3, 8, 15, 25]);
    }

    #[test]
    fn wire_names_are_lowercase() {
        let json = serde_json::to_string(&FindingSeverity::Critical).unwrap();
        assert_eq!(json, "\"critical\"");
        assert_eq!("HIGH".parse::<FindingSeverity>().unwrap(), FindingSeverity::High);
        assert!("severe".parse::<FindingSeverity>().is_err());
    }
}
