use crate::config::constants::{HEALTH_ENDPOINT, MAX_PAGE_LIMIT, MAX_RETRIES, PROGRAMS_ENDPOINT};
use crate::errors::{ParityError, ParityResult};
use crate::services::address_deriver::parse_program_hash;
use crate::services::analysis_engine::AnalysisEngine;
use crate::services::context_api::{ContextApi, RuleCache};
use crate::services::request_executor::RequestExecutor;
use crate::services::reqwest_transport::ReqwestTransport;
use crate::services::skills_api::{SkillCache, SkillsApi};
use crate::structs::analysis_result::AnalysisResult;
use crate::structs::analyze_options::AnalyzeOptions;
use crate::structs::api_request::ApiRequest;
use crate::structs::config::api_config::ApiConfig;
use crate::structs::health_status::HealthStatus;
use crate::structs::program_entry::ProgramEntry;
use crate::structs::program_page::ProgramPage;
use crate::structs::registry_stats::RegistryStats;
use crate::traits::transport::Transport;

/// Entry point of the SDK. Owns the request executor and the skill and
/// rule caches, and lends them to the skills, context and analysis views.
pub struct ParityClient {
    config: ApiConfig,
    executor: RequestExecutor,
    skill_cache: SkillCache,
    rule_cache: RuleCache,
}

impl ParityClient {
    pub fn new(config: ApiConfig) -> ParityResult<Self> {
        Self::check_limits(&config)?;
        let transport = ReqwestTransport::new(&config.base_url, config.timeout()).map_err(|e| {
            ParityError::config_error(&e.to_string(), Some("api.base_url"), None)
        })?;
        Self::with_transport(config, Box::new(transport))
    }

    pub fn from_api_key(api_key: impl Into<String>) -> ParityResult<Self> {
        Self::new(ApiConfig::with_api_key(api_key))
    }

    /// Builds a client over any transport; the API key is still required.
    pub fn with_transport(config: ApiConfig, transport: Box<dyn Transport>) -> ParityResult<Self> {
        Self::check_limits(&config)?;
        let api_key = config.resolve_api_key().ok_or_else(|| {
            ParityError::config_error(
                "API key is required",
                Some("api.api_key"),
                Some(&format!("Pass an API key or set the {} environment variable", config.api_key_env)),
            )
        })?;

        let executor = RequestExecutor::new(transport, &api_key, config.retries, config.retry_delay());
        log::debug!("🔧 Parity client ready for {} ({} retries)", executor.base_url(), config.retries);

        Ok(Self {
            config,
            executor,
            skill_cache: SkillCache::new(),
            rule_cache: RuleCache::new(),
        })
    }

    fn check_limits(config: &ApiConfig) -> ParityResult<()> {
        if config.retries > MAX_RETRIES {
            return Err(ParityError::config_error(
                &format!("retries must be at most {}, got {}", MAX_RETRIES, config.retries),
                Some("api.retries"),
                Some(&format!("Use a value between 0 and {}", MAX_RETRIES)),
            ));
        }
        if config.timeout_ms == 0 {
            return Err(ParityError::config_error(
                "timeout_ms must be greater than zero",
                Some("api.timeout_ms"),
                None,
            ));
        }
        Ok(())
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn skills(&mut self) -> SkillsApi<'_> {
        SkillsApi::new(&self.executor, &mut self.skill_cache)
    }

    pub fn context(&mut self) -> ContextApi<'_> {
        ContextApi::new(&self.executor, &mut self.rule_cache)
    }

    pub fn analyze(&mut self, options: &AnalyzeOptions) -> ParityResult<AnalysisResult> {
        self.analysis_engine().analyze(options)
    }

    pub fn analyze_source(&mut self, source: &str, options: &AnalyzeOptions) -> ParityResult<AnalysisResult> {
        self.analysis_engine().analyze_source(source, options)
    }

    pub fn get_program(&self, program_hash: &str) -> ParityResult<ProgramEntry> {
        let hash = parse_program_hash(program_hash.trim())?;
        self.executor
            .execute_json(ApiRequest::get(format!("{}/{}", PROGRAMS_ENDPOINT, hex::encode(hash))))
    }

    /// Pages are 1-based; `limit` must be within 1..=100.
    pub fn list_programs(&self, page: u32, limit: u32) -> ParityResult<Vec<ProgramEntry>> {
        if page == 0 {
            return Err(ParityError::validation_error("page", "0", "a page number starting at 1", None));
        }
        if limit == 0 || limit > MAX_PAGE_LIMIT {
            return Err(ParityError::validation_error(
                "limit",
                &limit.to_string(),
                &format!("between 1 and {}", MAX_PAGE_LIMIT),
                None,
            ));
        }

        let request = ApiRequest::get(PROGRAMS_ENDPOINT).with_query(vec![
            ("page".to_string(), page.to_string()),
            ("limit".to_string(), limit.to_string()),
        ]);
        let page: ProgramPage = self.executor.execute_json(request)?;
        Ok(page.into_entries())
    }

    pub fn registry_stats(&self) -> ParityResult<RegistryStats> {
        self.executor
            .execute_json(ApiRequest::get(format!("{}/stats", PROGRAMS_ENDPOINT)))
    }

    pub fn health_check(&self) -> ParityResult<HealthStatus> {
        self.executor.execute_json(ApiRequest::get(HEALTH_ENDPOINT))
    }

    fn analysis_engine(&mut self) -> AnalysisEngine<'_> {
        let skills = SkillsApi::new(&self.executor, &mut self.skill_cache);
        AnalysisEngine::new(&self.executor, skills)
    }
}
