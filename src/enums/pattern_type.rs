use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Vulnerability classes known to the context engine.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, Eq, Hash, PartialEq, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum PatternType {
    MissingSignerCheck,
    UncheckedArithmetic,
    UnvalidatedPda,
    InsecureCpi,
    AccountDeserialization,
    RentExemption,
    CloseAccount,
    TypeCosplay,
    ReinitializationAttack,
    OwnerCheck,
    Custom,
}

impl PatternType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MissingSignerCheck => "missing-signer-check",
            Self::UncheckedArithmetic => "unchecked-arithmetic",
            Self::UnvalidatedPda => "unvalidated-pda",
            Self::InsecureCpi => "insecure-cpi",
            Self::AccountDeserialization => "account-deserialization",
            Self::RentExemption => "rent-exemption",
            Self::CloseAccount => "close-account",
            Self::TypeCosplay => "type-cosplay",
            Self::ReinitializationAttack => "reinitialization-attack",
            Self::OwnerCheck => "owner-check",
            Self::Custom => "custom",
        }
    }
}
