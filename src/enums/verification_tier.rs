use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, Copy, Eq, Hash, PartialEq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum VerificationTier {
    Bronze,
    Silver,
    Gold,
    Platinum,
}

impl VerificationTier {
    pub fn threshold(&self) -> u8 {
        match self {
            Self::Bronze => 50,
            Self::Silver => 70,
            Self::Gold => 85,
            Self::Platinum => 95,
        }
    }

    /// Highest tier whose threshold the score reaches.
    pub fn for_score(score: u8) -> Option<Self> {
        [Self::Platinum, Self::Gold, Self::Silver, Self::Bronze]
            .into_iter()
            .find(|tier| score >= tier.threshold())
    }

    /// On-chain enum discriminant. Unknown bytes fall back to Bronze.
    pub fn from_byte(byte: u8) -> Self {
        match byte {
            1 => Self::Silver,
            2 => Self::Gold,
            3 => Self::Platinum,
            _ => Self::Bronze,
        }
    }
}
