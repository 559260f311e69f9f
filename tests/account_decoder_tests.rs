use byteorder::{LittleEndian, WriteBytesExt};
use parity_sdk::enums::framework::Framework;
use parity_sdk::enums::verification_tier::VerificationTier;
use parity_sdk::services::account_decoder::AccountDecoder;
use parity_sdk::ParityError;

const DISCRIMINATOR: [u8; 8] = [1, 2, 3, 4, 5, 6, 7, 8];

fn account() -> Vec<u8> {
    DISCRIMINATOR.to_vec()
}

fn write_string(buf: &mut Vec<u8>, value: &str) {
    buf.write_u32::<LittleEndian>(value.len() as u32).unwrap();
    buf.extend_from_slice(value.as_bytes());
}

fn program_entry_bytes() -> Vec<u8> {
    let mut buf = account();
    buf.extend_from_slice(&[3u8; 32]);
    buf.extend_from_slice(&[0xab; 32]);
    buf.write_u8(1).unwrap();
    write_string(&mut buf, "ipfs://meta");
    buf.write_i64::<LittleEndian>(1_700_000_000).unwrap();
    buf.write_i64::<LittleEndian>(1_700_000_500).unwrap();
    buf.write_u32::<LittleEndian>(4).unwrap();
    buf.write_u8(91).unwrap();
    buf.write_u8(1).unwrap();
    buf
}

#[test]
fn decodes_program_entry() {
    let entry = AccountDecoder::program_entry(&program_entry_bytes()).unwrap();

    assert_eq!(entry.program_hash, "ab".repeat(32));
    assert_eq!(entry.framework, Framework::Native);
    assert_eq!(entry.metadata_uri, "ipfs://meta");
    assert_eq!(entry.registered_at, 1_700_000_000);
    assert_eq!(entry.analysis_count, 4);
    assert_eq!(entry.latest_score, 91);
    assert!(entry.is_verified);
}

#[test]
fn truncated_program_entry_is_a_parse_error() {
    let mut bytes = program_entry_bytes();
    bytes.truncate(bytes.len() - 2);

    match AccountDecoder::program_entry(&bytes).unwrap_err() {
        ParityError::ParseError { reason, .. } => assert!(reason.contains("latest_score")),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn string_length_beyond_data_is_rejected() {
    let mut buf = account();
    buf.extend_from_slice(&[3u8; 32]);
    write_string(&mut buf, "auditor");
    buf.write_u32::<LittleEndian>(u32::MAX).unwrap();

    assert!(AccountDecoder::auditor(&buf).is_err());
}

#[test]
fn decodes_auditor_and_badge() {
    let mut buf = account();
    buf.extend_from_slice(&[5u8; 32]);
    write_string(&mut buf, "OtterSec");
    write_string(&mut buf, "https://example.com/creds");
    buf.write_u64::<LittleEndian>(12).unwrap();
    buf.write_u64::<LittleEndian>(87).unwrap();
    buf.write_u8(1).unwrap();

    let auditor = AccountDecoder::auditor(&buf).unwrap();
    assert_eq!(auditor.name, "OtterSec");
    assert_eq!(auditor.total_analyses, 12);
    assert!(auditor.is_active);

    let mut buf = account();
    buf.extend_from_slice(&[6u8; 32]);
    buf.extend_from_slice(&[7u8; 32]);
    buf.write_u8(2).unwrap();
    buf.write_u8(88).unwrap();
    buf.write_i64::<LittleEndian>(100).unwrap();
    buf.write_i64::<LittleEndian>(200).unwrap();
    buf.write_u8(0).unwrap();

    let badge = AccountDecoder::badge(&buf).unwrap();
    assert_eq!(badge.tier, VerificationTier::Gold);
    assert_eq!(badge.score_at_issuance, 88);
    assert!(badge.is_active_at(150));
    assert!(!badge.is_active_at(200));
}

#[test]
fn decodes_registry_counters() {
    let mut buf = account();
    buf.extend_from_slice(&[9u8; 32]);
    for value in [10u64, 20, 3, 4, 50] {
        buf.write_u64::<LittleEndian>(value).unwrap();
    }

    let stats = AccountDecoder::registry_stats(&buf).unwrap();
    assert_eq!(stats.total_programs, 10);
    assert_eq!(stats.total_analyses, 20);
    assert_eq!(stats.total_patterns, 50);
    assert_eq!(stats.verified_count, None);
}
