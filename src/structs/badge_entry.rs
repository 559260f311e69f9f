use serde::{Deserialize, Serialize};
use crate::enums::verification_tier::VerificationTier;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BadgeEntry {
    pub program_entry: String,
    pub issuer: String,
    pub tier: VerificationTier,
    pub score_at_issuance: u8,
    pub issued_at: i64,
    pub expires_at: i64,
    pub is_revoked: bool,
}

impl BadgeEntry {
    /// A badge counts only while unrevoked and before its expiry.
    pub fn is_active_at(&self, unix_seconds: i64) -> bool {
        !self.is_revoked && unix_seconds < self.expires_at
    }
}
