use parity_sdk::enums::finding_severity::FindingSeverity;
use parity_sdk::enums::framework::Framework;
use parity_sdk::enums::pattern_type::PatternType;
use parity_sdk::services::context_api::ContextApi;
use parity_sdk::structs::config::api_config::ApiConfig;
use parity_sdk::structs::context_query::ContextQuery;
use parity_sdk::structs::context_result::AuditFindingEntry;
use parity_sdk::{ParityClient, ParityError};
use parity_sdk::config::constants::MAX_RETRIES;
use parity_sdk::services::address_deriver::program_hash_hex;
use crate::common::{not_found, ok, scripted_client, skill_json, status, test_config, ScriptedTransport, TEST_BASE_URL};

const PROGRAM_JSON: &str = r#"{"owner":"11111111111111111111111111111111","programHash":"abcd","framework":"anchor","metadataUri":"ipfs://x","registeredAt":"2026-03-01T12:00:00Z","analysisCount":2,"latestScore":77,"isVerified":false}"#;

fn rules_json(ids: &[&str]) -> String {
    let rules: Vec<String> = ids
        .iter()
        .map(|id| {
            format!(
                r#"{{"id":"{}","severity":"high","patternType":"missing-signer-check","description":"d","detectionHint":"h"}}"#,
                id
            )
        })
        .collect();
    format!(r#"{{"rules":[{}]}}"#, rules.join(","))
}

fn audit_finding(severity: FindingSeverity) -> AuditFindingEntry {
    AuditFindingEntry {
        source: "audit".to_string(),
        vulnerability_class: "missing-signer-check".to_string(),
        severity,
        description: String::new(),
        fix_pattern: String::new(),
    }
}

#[test]
fn client_requires_an_api_key() {
    let (transport, _) = ScriptedTransport::new(vec![]);
    let config = ApiConfig {
        api_key: None,
        api_key_env: "PARITY_SDK_TEST_UNSET_KEY".to_string(),
        ..ApiConfig::default()
    };

    let err = ParityClient::with_transport(config, Box::new(transport)).err().unwrap();
    assert!(matches!(err, ParityError::ConfigurationError { .. }));
}

#[test]
fn retries_above_the_cap_are_rejected() {
    let (transport, _) = ScriptedTransport::new(vec![]);
    let err = ParityClient::with_transport(test_config(MAX_RETRIES + 25), Box::new(transport)).err().unwrap();
    assert!(matches!(err, ParityError::ConfigurationError { field: Some(ref f), .. } if f == "api.retries"));

    let (transport, _) = ScriptedTransport::new(vec![]);
    assert!(ParityClient::with_transport(test_config(MAX_RETRIES), Box::new(transport)).is_ok());
}

#[test]
fn zero_timeout_is_rejected() {
    let (transport, _) = ScriptedTransport::new(vec![]);
    let config = ApiConfig { timeout_ms: 0, ..test_config(1) };

    let err = ParityClient::with_transport(config, Box::new(transport)).err().unwrap();
    assert!(matches!(err, ParityError::ConfigurationError { field: Some(ref f), .. } if f == "api.timeout_ms"));
}

#[test]
fn unsafe_skill_names_never_reach_the_network() {
    let (mut client, requests) = scripted_client(vec![]);

    let err = client.skills().get("../programs").unwrap_err();
    assert!(matches!(err, ParityError::ValidationError { ref field, .. } if field == "skill"));
    assert!(!client.skills().is_valid("a/b?x=1").unwrap());
    assert!(!client.skills().is_valid(&"s".repeat(65)).unwrap());
    assert!(requests.lock().unwrap().is_empty());
}

#[test]
fn malformed_program_hashes_never_reach_the_network() {
    let (client, requests) = scripted_client(vec![]);

    let err = client.get_program("ab/../cd").unwrap_err();
    assert!(matches!(err, ParityError::ValidationError { ref field, .. } if field == "program_hash"));
    assert!(client.get_program("abcd").is_err());
    assert!(requests.lock().unwrap().is_empty());
}

#[test]
fn skill_lookups_are_cached() {
    let (mut client, requests) = scripted_client(vec![ok(&skill_json("oracle-checks"))]);

    let first = client.skills().get("oracle-checks").unwrap();
    let second = client.skills().get("oracle-checks").unwrap();

    assert_eq!(first, second);
    assert_eq!(requests.lock().unwrap().len(), 1);
    assert_eq!(requests.lock().unwrap()[0].path, "/v1/skills/oracle-checks");
}

#[test]
fn listing_fills_the_cache_and_clear_empties_it() {
    let list = format!("[{},{}]", skill_json("a"), skill_json("b"));
    let (mut client, requests) = scripted_client(vec![ok(&list), ok(&skill_json("b"))]);

    assert_eq!(client.skills().list().unwrap().len(), 2);
    client.skills().get("b").unwrap();
    assert_eq!(requests.lock().unwrap().len(), 1);

    client.skills().clear_cache();
    client.skills().get("b").unwrap();
    assert_eq!(requests.lock().unwrap().len(), 2);
}

#[test]
fn builtin_skills_are_valid_without_a_request() {
    let (mut client, requests) = scripted_client(vec![]);
    let mut skills = client.skills();

    assert!(skills.is_valid("security-audit").unwrap());
    assert!(skills.is_valid("deep-audit").unwrap());
    assert!(requests.lock().unwrap().is_empty());
}

#[test]
fn unknown_skill_is_invalid_but_server_errors_propagate() {
    let (mut client, _) = scripted_client(vec![not_found("Skill 'ghost' not found"), status(500, "oops")]);

    assert!(!client.skills().is_valid("ghost").unwrap());
    let err = client.skills().is_valid("flaky").unwrap_err();
    assert_eq!(err.status_code(), Some(500));
}

#[test]
fn deep_audit_expands_to_its_chain() {
    let (mut client, _) = scripted_client(vec![]);
    assert_eq!(
        client.skills().chain("deep-audit"),
        vec!["security-audit", "best-practices", "gas-optimization"]
    );
    assert_eq!(client.skills().chain("oracle-checks"), vec!["oracle-checks"]);
}

#[test]
fn resolve_expands_and_deduplicates_in_order() {
    let (mut client, requests) = scripted_client(vec![
        ok(&skill_json("best-practices")),
        ok(&skill_json("security-audit")),
        ok(&skill_json("gas-optimization")),
    ]);

    let names = vec![
        "best-practices".to_string(),
        "deep-audit".to_string(),
        "security-audit".to_string(),
    ];
    let resolved = client.skills().resolve(&names).unwrap();

    let resolved_names: Vec<&str> = resolved.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(resolved_names, vec!["best-practices", "security-audit", "gas-optimization"]);
    assert_eq!(requests.lock().unwrap().len(), 3);
}

#[test]
fn context_query_sends_only_set_filters() {
    let (mut client, requests) = scripted_client(vec![ok("{}")]);

    let query = ContextQuery {
        framework: Some(Framework::Anchor),
        severity: Some(FindingSeverity::Critical),
        ..ContextQuery::default()
    };
    let result = client.context().get(&query).unwrap();
    assert!(result.rules.is_empty());

    let sent = requests.lock().unwrap();
    assert_eq!(sent[0].path, "/v1/context");
    assert_eq!(
        sent[0].query,
        vec![
            ("framework".to_string(), "anchor".to_string()),
            ("severity".to_string(), "critical".to_string()),
        ]
    );
}

#[test]
fn rules_are_cached_per_pattern_type() {
    let (mut client, requests) = scripted_client(vec![
        ok(&rules_json(&["r1", "r2"])),
        ok(&rules_json(&["r1"])),
    ]);

    assert_eq!(client.context().rules(None).unwrap().len(), 2);
    assert_eq!(client.context().rules(None).unwrap().len(), 2);
    assert_eq!(client.context().rules(Some(PatternType::MissingSignerCheck)).unwrap().len(), 1);
    assert_eq!(client.context().rules(Some(PatternType::MissingSignerCheck)).unwrap().len(), 1);

    let sent = requests.lock().unwrap();
    assert_eq!(sent.len(), 2);
    assert_eq!(
        sent[1].query,
        vec![("pattern_type".to_string(), "missing-signer-check".to_string())]
    );
}

#[test]
fn risk_score_and_grouping_use_severity_weights() {
    let findings = vec![
        audit_finding(FindingSeverity::Critical),
        audit_finding(FindingSeverity::Medium),
        audit_finding(FindingSeverity::Medium),
    ];
    assert_eq!(ContextApi::calculate_risk_score(&findings), 100 - 25 - 16);

    let grouped = ContextApi::categorize_by_severity(&findings);
    assert_eq!(grouped.len(), 5);
    assert_eq!(grouped[&FindingSeverity::Medium].len(), 2);
    assert!(grouped[&FindingSeverity::High].is_empty());
}

#[test]
fn program_listing_accepts_envelope_and_bare_array() {
    let envelope = format!(
        r#"{{"data":[{}],"pagination":{{"page":2,"limit":10,"total":11,"totalPages":2}}}}"#,
        PROGRAM_JSON
    );
    let bare = format!("[{},{}]", PROGRAM_JSON, PROGRAM_JSON);
    let (client, requests) = scripted_client(vec![ok(&envelope), ok(&bare)]);

    let page = client.list_programs(2, 10).unwrap();
    assert_eq!(page.len(), 1);
    assert_eq!(page[0].registered_at, 1_772_366_400);
    assert_eq!(client.list_programs(1, 20).unwrap().len(), 2);

    let sent = requests.lock().unwrap();
    assert_eq!(
        sent[0].query,
        vec![("page".to_string(), "2".to_string()), ("limit".to_string(), "10".to_string())]
    );
}

#[test]
fn program_listing_validates_paging() {
    let (client, requests) = scripted_client(vec![]);
    assert!(client.list_programs(0, 10).is_err());
    assert!(client.list_programs(1, 0).is_err());
    assert!(client.list_programs(1, 101).is_err());
    assert!(requests.lock().unwrap().is_empty());
}

#[test]
fn program_lookup_and_stats() {
    let stats = r#"{"totalPrograms":5,"totalAnalyses":9,"totalSkills":4,"totalAuditors":2,"totalPatterns":30,"verifiedCount":3,"averageScore":81.5}"#;
    let (client, requests) = scripted_client(vec![ok(PROGRAM_JSON), ok(stats)]);

    let hash = program_hash_hex(b"vault program");
    let program = client.get_program(&format!("  {}  ", hash.to_uppercase())).unwrap();
    assert_eq!(program.latest_score, 77);

    let stats = client.registry_stats().unwrap();
    assert_eq!(stats.verified_count, Some(3));

    let sent = requests.lock().unwrap();
    assert_eq!(sent[0].path, format!("/v1/programs/{}", hash));
    assert_eq!(sent[1].path, "/v1/programs/stats");
}

#[test]
fn health_check_reports_status() {
    let body = r#"{"status":"healthy","version":"1.4.0","uptime":1200,"services":{"database":"up"}}"#;
    let (client, _) = scripted_client(vec![ok(body)]);

    let health = client.health_check().unwrap();
    assert!(health.is_healthy());
    assert_eq!(health.services["database"], "up");
    assert_eq!(client.config().base_url, TEST_BASE_URL);
}
