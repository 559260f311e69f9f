use std::str::FromStr;
use sha2::{Digest, Sha256};
use solana_program::pubkey::{Pubkey, MAX_SEED_LEN};
use crate::config::constants::DEFAULT_PROGRAM_ID;
use crate::errors::{ParityError, ParityResult};

const REGISTRY_SEED: &[u8] = b"registry";
const PROGRAM_SEED: &[u8] = b"program";
const ANALYSIS_SEED: &[u8] = b"analysis";
const SKILL_SEED: &[u8] = b"skill";
const AUDITOR_SEED: &[u8] = b"auditor";
const BADGE_SEED: &[u8] = b"badge";
const PATTERN_SEED: &[u8] = b"pattern";

/// SHA-256 of a program's bytes, the key programs are registered under.
pub fn program_hash(program: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(program);
    hasher.finalize().into()
}

pub fn program_hash_hex(program: &[u8]) -> String {
    hex::encode(program_hash(program))
}

/// Parses a hex program hash as shown by the API.
pub fn parse_program_hash(hash: &str) -> ParityResult<[u8; 32]> {
    let bytes = hex::decode(hash.trim()).map_err(|e| {
        ParityError::validation_error("program_hash", hash, "hex-encoded 32 bytes", Some(&e.to_string()))
    })?;
    <[u8; 32]>::try_from(bytes.as_slice()).map_err(|_| {
        ParityError::validation_error("program_hash", hash, "hex-encoded 32 bytes", None)
    })
}

pub fn parse_pubkey(field: &str, value: &str) -> ParityResult<Pubkey> {
    Pubkey::from_str(value.trim())
        .map_err(|e| ParityError::validation_error(field, value, "base58 public key", Some(&e.to_string())))
}

/// Derives the registry program's account addresses (PDAs).
///
/// Every address is a pure function of its seeds and the program id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgramAddressDeriver {
    program_id: Pubkey,
}

impl ProgramAddressDeriver {
    pub fn new(program_id: Pubkey) -> Self {
        Self { program_id }
    }

    pub fn from_program_id(program_id: &str) -> ParityResult<Self> {
        Ok(Self::new(parse_pubkey("program_id", program_id)?))
    }

    pub fn program_id(&self) -> &Pubkey {
        &self.program_id
    }

    pub fn registry_address(&self) -> ParityResult<(Pubkey, u8)> {
        self.derive(&[REGISTRY_SEED])
    }

    pub fn program_entry_address(&self, program_hash: &[u8; 32]) -> ParityResult<(Pubkey, u8)> {
        self.derive(&[PROGRAM_SEED, &program_hash[..]])
    }

    pub fn analysis_address(&self, program_entry: &Pubkey, auditor: &Pubkey) -> ParityResult<(Pubkey, u8)> {
        self.derive(&[ANALYSIS_SEED, program_entry.as_ref(), auditor.as_ref()])
    }

    pub fn skill_address(&self, skill_name: &str) -> ParityResult<(Pubkey, u8)> {
        self.derive(&[SKILL_SEED, skill_name.as_bytes()])
    }

    pub fn auditor_address(&self, authority: &Pubkey) -> ParityResult<(Pubkey, u8)> {
        self.derive(&[AUDITOR_SEED, authority.as_ref()])
    }

    pub fn badge_address(&self, program_entry: &Pubkey) -> ParityResult<(Pubkey, u8)> {
        self.derive(&[BADGE_SEED, program_entry.as_ref()])
    }

    pub fn pattern_address(&self, pattern_id: &str) -> ParityResult<(Pubkey, u8)> {
        self.derive(&[PATTERN_SEED, pattern_id.as_bytes()])
    }

    fn derive(&self, seeds: &[&[u8]]) -> ParityResult<(Pubkey, u8)> {
        if let Some(seed) = seeds.iter().find(|seed| seed.len() > MAX_SEED_LEN) {
            return Err(ParityError::validation_error(
                "seed",
                &String::from_utf8_lossy(seed),
                &format!("at most {} bytes", MAX_SEED_LEN),
                Some("Shorten the skill name or pattern id"),
            ));
        }

        Pubkey::try_find_program_address(seeds, &self.program_id).ok_or_else(|| {
            ParityError::validation_error("seeds", &format!("{:?}", seeds), "a viable bump seed", None)
        })
    }
}

impl Default for ProgramAddressDeriver {
    fn default() -> Self {
        // The default id is a compile-time constant that always parses.
        let program_id = Pubkey::from_str(DEFAULT_PROGRAM_ID).unwrap_or_default();
        Self::new(program_id)
    }
}
