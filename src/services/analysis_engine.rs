use std::fs;
use std::time::Instant;
use crate::config::constants::{ANALYZE_ENDPOINT, MAX_PROGRAM_SIZE, MAX_SKILLS_PER_ANALYSIS, SKILL_SECURITY_AUDIT};
use crate::enums::finding_severity::FindingSeverity;
use crate::enums::framework::Framework;
use crate::enums::output_format::OutputFormat;
use crate::errors::{ParityError, ParityResult, ResultExt};
use crate::services::request_executor::RequestExecutor;
use crate::services::skills_api::SkillsApi;
use crate::structs::analysis_result::AnalysisResult;
use crate::structs::analyze_options::AnalyzeOptions;
use crate::structs::analyze_request::AnalyzeRequest;
use crate::structs::api_request::ApiRequest;
use crate::structs::finding::Finding;
use crate::structs::findings_count::FindingsCount;

const PERFECT_SCORE: u32 = 100;

/// Submits programs for analysis and enforces the caller's quality gates.
pub struct AnalysisEngine<'a> {
    executor: &'a RequestExecutor,
    skills: SkillsApi<'a>,
}

impl<'a> AnalysisEngine<'a> {
    pub fn new(executor: &'a RequestExecutor, skills: SkillsApi<'a>) -> Self {
        Self { executor, skills }
    }

    pub fn analyze(&mut self, options: &AnalyzeOptions) -> ParityResult<AnalysisResult> {
        Self::validate_options(options)?;
        let source = Self::read_program(options)?;
        self.analyze_source(&source, options)
    }

    /// Same as `analyze` but with the program already in memory;
    /// `options.program` is ignored.
    pub fn analyze_source(&mut self, source: &str, options: &AnalyzeOptions) -> ParityResult<AnalysisResult> {
        Self::validate_skill_count(options)?;
        Self::validate_min_score(options)?;
        Self::validate_source_size(source)?;

        let skills = options
            .skills
            .clone()
            .unwrap_or_else(|| vec![SKILL_SECURITY_AUDIT.to_string()]);
        let framework = options.framework.unwrap_or_else(|| Framework::detect(source));

        for skill in &skills {
            if !self.skills.is_valid(skill)? {
                return Err(ParityError::validation_error(
                    "skills",
                    skill,
                    "a built-in or registered skill",
                    Some("Run `parity skills list` to see available skills"),
                ));
            }
        }

        log::info!("🔍 Analyzing {} program with skills: {}", framework, skills.join(", "));
        let started = Instant::now();

        let request = ApiRequest::post(
            ANALYZE_ENDPOINT,
            &AnalyzeRequest {
                program: source.to_string(),
                framework,
                skills,
                output: OutputFormat::Json,
            },
        )?;
        let result: AnalysisResult = self.executor.execute_json(request)?;

        log::info!(
            "✅ Analysis finished in {:?}: score {}/100, {} findings",
            started.elapsed(),
            result.score,
            result.findings.len()
        );

        Self::check_gates(&result, options)?;
        Ok(result)
    }

    /// Minimum score first, then disallowed severities.
    pub fn check_gates(result: &AnalysisResult, options: &AnalyzeOptions) -> ParityResult<()> {
        if let Some(min_score) = options.min_score {
            if result.score < min_score {
                return Err(ParityError::ScoreBelowThreshold {
                    score: result.score,
                    min_score,
                });
            }
        }

        if !options.fail_on.is_empty() {
            let offending: Vec<Finding> = result
                .findings
                .iter()
                .filter(|finding| options.fail_on.contains(&finding.severity))
                .cloned()
                .collect();

            if !offending.is_empty() {
                return Err(ParityError::DisallowedFindings {
                    severities: options.fail_on.clone(),
                    findings: offending,
                });
            }
        }

        Ok(())
    }

    pub fn count_findings(findings: &[Finding]) -> FindingsCount {
        let mut count = FindingsCount::default();
        for finding in findings {
            count.add(finding.severity);
        }
        count
    }

    pub fn calculate_score(findings: &[Finding]) -> u8 {
        Self::score_from_severities(findings.iter().map(|f| f.severity))
    }

    /// 100 minus the severity weights, floored at 0.
    pub fn score_from_severities(severities: impl IntoIterator<Item = FindingSeverity>) -> u8 {
        let deducted: u32 = severities.into_iter().map(|s| s.weight()).sum();
        PERFECT_SCORE.saturating_sub(deducted) as u8
    }

    pub fn generate_summary(findings: &[Finding], score: u8) -> String {
        let count = Self::count_findings(findings);
        let parts: Vec<String> = [
            FindingSeverity::Critical,
            FindingSeverity::High,
            FindingSeverity::Medium,
            FindingSeverity::Info,
        ]
        .iter()
        .filter(|severity| count.get(**severity) > 0)
        .map(|severity| format!("{} {}", count.get(*severity), severity))
        .collect();

        if parts.is_empty() {
            return format!("Analysis complete with a perfect score of {}. No issues found.", score);
        }

        format!("Found {} severity issues. Overall score: {}/100.", parts.join(" and "), score)
    }

    fn validate_options(options: &AnalyzeOptions) -> ParityResult<()> {
        if options.program.as_os_str().is_empty() {
            return Err(ParityError::validation_error(
                "program",
                "",
                "a path to the program source",
                None,
            ));
        }
        Self::validate_skill_count(options)?;
        Self::validate_min_score(options)
    }

    fn validate_skill_count(options: &AnalyzeOptions) -> ParityResult<()> {
        match &options.skills {
            Some(skills) if skills.is_empty() => Err(ParityError::validation_error(
                "skills",
                "[]",
                "at least one skill",
                Some("Omit skills to run the default security audit"),
            )),
            Some(skills) if skills.len() > MAX_SKILLS_PER_ANALYSIS => Err(ParityError::validation_error(
                "skills",
                &skills.len().to_string(),
                &format!("at most {} skills per analysis", MAX_SKILLS_PER_ANALYSIS),
                None,
            )),
            _ => Ok(()),
        }
    }

    fn validate_min_score(options: &AnalyzeOptions) -> ParityResult<()> {
        match options.min_score {
            Some(min_score) if u32::from(min_score) > PERFECT_SCORE => Err(ParityError::validation_error(
                "min_score",
                &min_score.to_string(),
                "between 0 and 100",
                None,
            )),
            _ => Ok(()),
        }
    }

    fn read_program(options: &AnalyzeOptions) -> ParityResult<String> {
        let path = &options.program;
        let display = path.display().to_string();

        if !path.is_file() {
            return Err(ParityError::file_error(&display, "read program", "file not found"));
        }

        let size = fs::metadata(path).with_file_context(&display, "inspect program")?.len();
        if size > MAX_PROGRAM_SIZE {
            return Err(ParityError::validation_error(
                "program",
                &display,
                &format!("at most {} bytes, got {}", MAX_PROGRAM_SIZE, size),
                None,
            ));
        }

        fs::read_to_string(path).with_file_context(&display, "read program")
    }

    fn validate_source_size(source: &str) -> ParityResult<()> {
        let size = source.len() as u64;
        if size > MAX_PROGRAM_SIZE {
            return Err(ParityError::validation_error(
                "program",
                "<inline source>",
                &format!("at most {} bytes, got {}", MAX_PROGRAM_SIZE, size),
                None,
            ));
        }
        Ok(())
    }
}
