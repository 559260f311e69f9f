use std::fmt;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, Copy, Eq, Hash, PartialEq, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Framework {
    Anchor,
    Native,
    Seahorse,
    Steel,
}

impl Framework {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Anchor => "anchor",
            Self::Native => "native",
            Self::Seahorse => "seahorse",
            Self::Steel => "steel",
        }
    }

    /// On-chain enum discriminant. Unknown bytes fall back to Anchor.
    pub fn from_byte(byte: u8) -> Self {
        match byte {
            1 => Self::Native,
            2 => Self::Seahorse,
            3 => Self::Steel,
            _ => Self::Anchor,
        }
    }

    /// Guess the framework from program source markers.
    pub fn detect(source: &str) -> Self {
        if source.contains("#[program]") || source.contains("declare_id!") {
            return Self::Anchor;
        }
        if source.contains("entrypoint!") {
            return Self::Native;
        }
        if source.contains("@instruction") || source.contains("seahorse") {
            return Self::Seahorse;
        }
        Self::Anchor
    }
}

impl Default for Framework {
    fn default() -> Self {
        Framework::Anchor
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_from_source_markers() {
        assert_eq!(Framework::detect("declare_id!(\"x\");"), Framework::Anchor);
        assert_eq!(Framework::detect("entrypoint!(process_instruction);"), Framework::Native);
        assert_eq!(Framework::detect("from seahorse.prelude import *"), Framework::Seahorse);
        assert_eq!(Framework::detect("fn main() {}"), Framework::Anchor);
    }

    #[test]
    fn anchor_markers_win_over_native() {
        let source = "#[program]\nmod x {}\nentrypoint!(y);";
        assert_eq!(Framework::detect(source), Framework::Anchor);
    }
}
