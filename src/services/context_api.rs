use std::collections::BTreeMap;
use crate::config::constants::{CONTEXT_ENDPOINT, VULNERABILITY_CATEGORIES};
use crate::enums::finding_severity::FindingSeverity;
use crate::enums::framework::Framework;
use crate::enums::pattern_type::PatternType;
use crate::errors::ParityResult;
use crate::services::analysis_engine::AnalysisEngine;
use crate::services::request_executor::RequestExecutor;
use crate::structs::api_request::ApiRequest;
use crate::structs::context_query::ContextQuery;
use crate::structs::context_result::{AuditFindingEntry, ContextResult, FrameworkPatternEntry, StaticRule};
use crate::structs::definition_cache::DefinitionCache;

pub type RuleCache = DefinitionCache<Vec<StaticRule>>;

const ALL_RULES_KEY: &str = "all";

/// Read-only view over the context engine's rules and audit knowledge.
pub struct ContextApi<'a> {
    executor: &'a RequestExecutor,
    rules: &'a mut RuleCache,
}

impl<'a> ContextApi<'a> {
    pub fn new(executor: &'a RequestExecutor, rules: &'a mut RuleCache) -> Self {
        Self { executor, rules }
    }

    pub fn get(&self, query: &ContextQuery) -> ParityResult<ContextResult> {
        let request = ApiRequest::get(CONTEXT_ENDPOINT).with_query(query.to_query_params());
        self.executor.execute_json(request)
    }

    /// Rules are cached per pattern type, with the unfiltered list under its own key.
    pub fn rules(&mut self, pattern_type: Option<PatternType>) -> ParityResult<Vec<StaticRule>> {
        let key = pattern_type.map_or(ALL_RULES_KEY, |p| p.as_str());
        if let Some(cached) = self.rules.get(key) {
            return Ok(cached);
        }

        let result = self.get(&ContextQuery {
            pattern_type,
            ..ContextQuery::default()
        })?;
        self.rules.insert(key, result.rules.clone());
        Ok(result.rules)
    }

    pub fn audit_findings(&self, severity: Option<FindingSeverity>) -> ParityResult<Vec<AuditFindingEntry>> {
        let result = self.get(&ContextQuery {
            severity,
            ..ContextQuery::default()
        })?;
        Ok(result.audit_findings)
    }

    pub fn framework_patterns(&self, framework: Framework) -> ParityResult<Vec<FrameworkPatternEntry>> {
        let result = self.get(&ContextQuery {
            framework: Some(framework),
            ..ContextQuery::default()
        })?;
        Ok(result.framework_patterns)
    }

    pub fn vulnerability_categories(&self) -> &'static [&'static str] {
        VULNERABILITY_CATEGORIES
    }

    /// Same weighting as analysis scores.
    pub fn calculate_risk_score(findings: &[AuditFindingEntry]) -> u8 {
        AnalysisEngine::score_from_severities(findings.iter().map(|f| f.severity))
    }

    pub fn categorize_by_severity(
        findings: &[AuditFindingEntry],
    ) -> BTreeMap<FindingSeverity, Vec<AuditFindingEntry>> {
        let mut categorized: BTreeMap<FindingSeverity, Vec<AuditFindingEntry>> = FindingSeverity::REPORT_ORDER
            .iter()
            .map(|severity| (*severity, Vec::new()))
            .collect();

        for finding in findings {
            categorized.entry(finding.severity).or_default().push(finding.clone());
        }

        categorized
    }

    pub fn clear_cache(&mut self) {
        self.rules.clear();
    }
}
