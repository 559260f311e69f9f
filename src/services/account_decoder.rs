use std::io::{Cursor, Read};
use byteorder::{LittleEndian, ReadBytesExt};
use solana_program::pubkey::Pubkey;
use crate::enums::framework::Framework;
use crate::enums::verification_tier::VerificationTier;
use crate::errors::{ParityError, ParityResult};
use crate::structs::auditor_entry::AuditorEntry;
use crate::structs::badge_entry::BadgeEntry;
use crate::structs::program_entry::ProgramEntry;
use crate::structs::registry_stats::RegistryStats;

const DISCRIMINATOR_LEN: u64 = 8;

/// Decodes registry program account data (little-endian, Borsh layout,
/// 8-byte account discriminator first).
pub struct AccountDecoder<'a> {
    account: &'static str,
    reader: Cursor<&'a [u8]>,
}

impl<'a> AccountDecoder<'a> {
    fn new(account: &'static str, data: &'a [u8]) -> Self {
        let mut reader = Cursor::new(data);
        reader.set_position(DISCRIMINATOR_LEN);
        Self { account, reader }
    }

    pub fn program_entry(data: &[u8]) -> ParityResult<ProgramEntry> {
        let mut r = AccountDecoder::new("ProgramEntry", data);
        let owner = r.pubkey("owner")?;
        let program_hash = hex::encode(r.bytes32("program_hash")?);
        let framework = Framework::from_byte(r.u8("framework")?);
        let metadata_uri = r.string("metadata_uri")?;
        let registered_at = r.i64("registered_at")?;
        let _updated_at = r.i64("updated_at")?;
        let analysis_count = r.u32("analysis_count")?;
        let latest_score = r.u8("latest_score")?;
        let is_verified = r.u8("is_verified")? == 1;

        Ok(ProgramEntry {
            owner: owner.to_string(),
            program_hash,
            framework,
            metadata_uri,
            registered_at,
            analysis_count,
            latest_score,
            is_verified,
        })
    }

    pub fn auditor(data: &[u8]) -> ParityResult<AuditorEntry> {
        let mut r = AccountDecoder::new("Auditor", data);
        Ok(AuditorEntry {
            authority: r.pubkey("authority")?.to_string(),
            name: r.string("name")?,
            credentials_uri: r.string("credentials_uri")?,
            total_analyses: r.u64("total_analyses")?,
            average_score: r.u64("average_score")?,
            is_active: r.u8("is_active")? == 1,
        })
    }

    pub fn badge(data: &[u8]) -> ParityResult<BadgeEntry> {
        let mut r = AccountDecoder::new("Badge", data);
        Ok(BadgeEntry {
            program_entry: r.pubkey("program_entry")?.to_string(),
            issuer: r.pubkey("issuer")?.to_string(),
            tier: VerificationTier::from_byte(r.u8("tier")?),
            score_at_issuance: r.u8("score_at_issuance")?,
            issued_at: r.i64("issued_at")?,
            expires_at: r.i64("expires_at")?,
            is_revoked: r.u8("is_revoked")? == 1,
        })
    }

    /// Counters of the singleton registry account; the authority is skipped.
    pub fn registry_stats(data: &[u8]) -> ParityResult<RegistryStats> {
        let mut r = AccountDecoder::new("Registry", data);
        let _authority = r.pubkey("authority")?;
        Ok(RegistryStats {
            total_programs: r.u64("total_programs")?,
            total_analyses: r.u64("total_analyses")?,
            total_skills: r.u64("total_skills")?,
            total_auditors: r.u64("total_auditors")?,
            total_patterns: r.u64("total_patterns")?,
            verified_count: None,
            average_score: None,
        })
    }

    fn truncated(&self, field: &str) -> ParityError {
        ParityError::parse_error(
            "account data",
            None,
            &format!("{} truncated while reading '{}'", self.account, field),
            Some(&format!("offset {} of {} bytes", self.reader.position(), self.reader.get_ref().len())),
        )
    }

    fn u8(&mut self, field: &str) -> ParityResult<u8> {
        self.reader.read_u8().map_err(|_| self.truncated(field))
    }

    fn u32(&mut self, field: &str) -> ParityResult<u32> {
        self.reader.read_u32::<LittleEndian>().map_err(|_| self.truncated(field))
    }

    fn u64(&mut self, field: &str) -> ParityResult<u64> {
        self.reader.read_u64::<LittleEndian>().map_err(|_| self.truncated(field))
    }

    fn i64(&mut self, field: &str) -> ParityResult<i64> {
        self.reader.read_i64::<LittleEndian>().map_err(|_| self.truncated(field))
    }

    fn bytes32(&mut self, field: &str) -> ParityResult<[u8; 32]> {
        let mut buf = [0u8; 32];
        self.reader.read_exact(&mut buf).map_err(|_| self.truncated(field))?;
        Ok(buf)
    }

    fn pubkey(&mut self, field: &str) -> ParityResult<Pubkey> {
        Ok(Pubkey::new_from_array(self.bytes32(field)?))
    }

    fn string(&mut self, field: &str) -> ParityResult<String> {
        let len = self.u32(field)? as usize;
        let remaining = self.reader.get_ref().len().saturating_sub(self.reader.position() as usize);
        if len > remaining {
            return Err(self.truncated(field));
        }
        let mut buf = vec![0u8; len];
        self.reader.read_exact(&mut buf).map_err(|_| self.truncated(field))?;
        String::from_utf8(buf).map_err(|e| {
            ParityError::parse_error("account data", None, &format!("'{}' is not valid UTF-8: {}", field, e), None)
        })
    }
}
