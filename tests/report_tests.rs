use parity_sdk::enums::finding_severity::FindingSeverity;
use parity_sdk::enums::output_format::OutputFormat;
use parity_sdk::structs::analysis_result::AnalysisResult;
use parity_sdk::ReportFormatter;
use crate::common::analysis_json;

fn result() -> AnalysisResult {
    serde_json::from_str(&analysis_json(58, &["medium", "critical", "pass"])).unwrap()
}

#[test]
fn markdown_groups_worst_first() {
    let markdown = ReportFormatter::markdown(&result());

    assert!(markdown.contains("**Score:** 58/100"));
    let critical = markdown.find("## 🔴 Critical (1)").unwrap();
    let medium = markdown.find("## 🟡 Medium (1)").unwrap();
    let pass = markdown.find("## 🟢 Pass (1)").unwrap();
    assert!(critical < medium && medium < pass);
    assert!(!markdown.contains("## 🟠 High"));
}

#[test]
fn sarif_maps_severity_to_level() {
    let sarif = ReportFormatter::sarif(&result());

    assert_eq!(sarif["version"], "2.1.0");
    let results = sarif["runs"][0]["results"].as_array().unwrap();
    assert_eq!(results.len(), 3);

    let level_of = |severity: FindingSeverity| {
        results
            .iter()
            .find(|r| r["properties"]["severity"] == severity.as_str())
            .map(|r| r["level"].as_str().unwrap().to_string())
            .unwrap()
    };
    assert_eq!(level_of(FindingSeverity::Critical), "error");
    assert_eq!(level_of(FindingSeverity::Medium), "warning");
    assert_eq!(level_of(FindingSeverity::Pass), "warning");

    assert_eq!(sarif["runs"][0]["tool"]["driver"]["rules"].as_array().unwrap().len(), 3);
}

#[test]
fn json_output_parses_back() {
    let rendered = ReportFormatter::render(&result(), OutputFormat::Json).unwrap();
    let parsed: AnalysisResult = serde_json::from_str(&rendered).unwrap();
    assert_eq!(parsed, result());
}

#[test]
fn text_lists_findings_by_severity() {
    let text = ReportFormatter::text(&result());
    assert!(text.starts_with("Score: 58/100 (anchor)"));
    assert!(text.find("[CRITICAL]").unwrap() < text.find("[MEDIUM]").unwrap());
}
