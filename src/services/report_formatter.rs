use serde_json::{json, Value};
use crate::config::constants::{SARIF_SCHEMA, SARIF_TOOL_URI};
use crate::enums::finding_severity::FindingSeverity;
use crate::enums::output_format::OutputFormat;
use crate::errors::ParityResult;
use crate::structs::analysis_result::AnalysisResult;
use crate::structs::finding::Finding;

const TOOL_NAME: &str = "parity";

/// Renders analysis results; the API always answers in JSON and every
/// other format is produced locally.
pub struct ReportFormatter;

impl ReportFormatter {
    pub fn render(result: &AnalysisResult, format: OutputFormat) -> ParityResult<String> {
        match format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
            OutputFormat::Sarif => Ok(serde_json::to_string_pretty(&Self::sarif(result))?),
            OutputFormat::Markdown => Ok(Self::markdown(result)),
            OutputFormat::Text => Ok(Self::text(result)),
        }
    }

    pub fn markdown(result: &AnalysisResult) -> String {
        let mut out = String::new();
        out.push_str("# Parity Analysis Report\n\n");
        out.push_str(&format!("**Score:** {}/100\n\n", result.score));
        out.push_str(&format!("**Framework:** {}\n\n", result.metadata.framework));
        if !result.skills.is_empty() {
            out.push_str(&format!("**Skills:** {}\n\n", result.skills.join(", ")));
        }
        out.push_str(&format!("{}\n", result.summary));

        for severity in FindingSeverity::REPORT_ORDER {
            let group: Vec<&Finding> = result.findings.iter().filter(|f| f.severity == severity).collect();
            if group.is_empty() {
                continue;
            }

            out.push_str(&format!("\n## {} {} ({})\n", severity.emoji(), capitalize(severity.as_str()), group.len()));
            for finding in group {
                out.push_str(&format!("\n### {}\n\n", finding.title));
                out.push_str(&format!("- **Location:** `{}:{}`", finding.location.file, finding.location.line));
                if let Some(instruction) = &finding.location.instruction {
                    out.push_str(&format!(" (instruction `{}`)", instruction));
                }
                out.push('\n');
                out.push_str(&format!("- **Pattern:** `{}`\n\n", finding.pattern));
                out.push_str(&format!("{}\n\n", finding.description));
                out.push_str(&format!("**Recommendation:** {}\n", finding.recommendation));
            }
        }

        out
    }

    /// SARIF 2.1.0 log with one run and one rule per distinct pattern.
    pub fn sarif(result: &AnalysisResult) -> Value {
        let mut rule_ids: Vec<&str> = Vec::new();
        for finding in &result.findings {
            if !rule_ids.contains(&finding.pattern.as_str()) {
                rule_ids.push(&finding.pattern);
            }
        }

        let rules: Vec<Value> = rule_ids
            .iter()
            .map(|id| {
                let first = result.findings.iter().find(|f| f.pattern == *id);
                json!({
                    "id": id,
                    "shortDescription": { "text": first.map(|f| f.title.as_str()).unwrap_or(*id) },
                })
            })
            .collect();

        let results: Vec<Value> = result
            .findings
            .iter()
            .map(|finding| {
                json!({
                    "ruleId": finding.pattern,
                    "level": finding.severity.sarif_level(),
                    "message": { "text": format!("{}: {}", finding.title, finding.description) },
                    "locations": [{
                        "physicalLocation": {
                            "artifactLocation": { "uri": finding.location.file },
                            "region": { "startLine": finding.location.line.max(1) },
                        }
                    }],
                    "properties": {
                        "severity": finding.severity.as_str(),
                        "recommendation": finding.recommendation,
                    },
                })
            })
            .collect();

        json!({
            "$schema": SARIF_SCHEMA,
            "version": "2.1.0",
            "runs": [{
                "tool": {
                    "driver": {
                        "name": TOOL_NAME,
                        "informationUri": SARIF_TOOL_URI,
                        "version": env!("CARGO_PKG_VERSION"),
                        "rules": rules,
                    }
                },
                "results": results,
                "properties": { "score": result.score },
            }]
        })
    }

    pub fn text(result: &AnalysisResult) -> String {
        let mut lines = vec![
            format!("Score: {}/100 ({})", result.score, result.metadata.framework),
            result.summary.clone(),
        ];

        for severity in FindingSeverity::REPORT_ORDER {
            for finding in result.findings.iter().filter(|f| f.severity == severity) {
                lines.push(String::new());
                lines.push(format!(
                    "[{}] {} ({}:{})",
                    severity.as_str().to_uppercase(),
                    finding.title,
                    finding.location.file,
                    finding.location.line
                ));
                lines.push(format!("  {}", finding.description));
                lines.push(format!("  Fix: {}", finding.recommendation));
            }
        }

        lines.join("\n")
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
