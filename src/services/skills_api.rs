use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::constants::{
    BUILTIN_SKILLS, MAX_SKILL_NAME_LEN, SKILLS_ENDPOINT, SKILL_BEST_PRACTICES, SKILL_DEEP_AUDIT, SKILL_GAS_OPTIMIZATION,
    SKILL_SECURITY_AUDIT,
};
use crate::errors::{ParityError, ParityResult};
use crate::services::request_executor::RequestExecutor;
use crate::structs::api_request::ApiRequest;
use crate::structs::definition_cache::DefinitionCache;
use crate::structs::skill_definition::SkillDefinition;

pub type SkillCache = DefinitionCache<SkillDefinition>;

static SKILL_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9_.-]*$").expect("valid skill name regex"));

/// Skill names become a single URL path segment, so only a safe charset is accepted.
pub fn validate_skill_name(name: &str) -> ParityResult<()> {
    if name.len() > MAX_SKILL_NAME_LEN || !SKILL_NAME.is_match(name) {
        return Err(ParityError::validation_error(
            "skill",
            name,
            &format!("letters, digits, '-', '_' or '.', at most {} characters", MAX_SKILL_NAME_LEN),
            None,
        ));
    }
    Ok(())
}

/// Skill registry view with lazy caching and chain expansion.
pub struct SkillsApi<'a> {
    executor: &'a RequestExecutor,
    cache: &'a mut SkillCache,
}

impl<'a> SkillsApi<'a> {
    pub fn new(executor: &'a RequestExecutor, cache: &'a mut SkillCache) -> Self {
        Self { executor, cache }
    }

    /// Fetches every skill and refreshes the cache with the result.
    pub fn list(&mut self) -> ParityResult<Vec<SkillDefinition>> {
        let skills: Vec<SkillDefinition> = self.executor.execute_json(ApiRequest::get(SKILLS_ENDPOINT))?;
        for skill in &skills {
            self.cache.insert(skill.name.clone(), skill.clone());
        }
        log::info!("📚 Cached {} skill definitions", skills.len());
        Ok(skills)
    }

    pub fn get(&mut self, name: &str) -> ParityResult<SkillDefinition> {
        if let Some(cached) = self.cache.get(name) {
            return Ok(cached);
        }
        validate_skill_name(name)?;

        let skill: SkillDefinition = self
            .executor
            .execute_json(ApiRequest::get(format!("{}/{}", SKILLS_ENDPOINT, name)))?;
        self.cache.insert(name, skill.clone());
        Ok(skill)
    }

    /// Built-in names are valid without a request. Other names are valid
    /// when the registry knows them; a 404 means unknown, while transport
    /// and server failures are returned as errors.
    pub fn is_valid(&mut self, name: &str) -> ParityResult<bool> {
        if BUILTIN_SKILLS.contains(&name) {
            return Ok(true);
        }
        if validate_skill_name(name).is_err() {
            return Ok(false);
        }

        match self.get(name) {
            Ok(_) => Ok(true),
            Err(e) if e.status_code() == Some(404) => Ok(false),
            Err(e) => Err(e),
        }
    }

    pub fn chain(&self, name: &str) -> Vec<String> {
        Self::expand_chain(name)
    }

    pub fn expand_chain(name: &str) -> Vec<String> {
        if name == SKILL_DEEP_AUDIT {
            return vec![
                SKILL_SECURITY_AUDIT.to_string(),
                SKILL_BEST_PRACTICES.to_string(),
                SKILL_GAS_OPTIMIZATION.to_string(),
            ];
        }
        vec![name.to_string()]
    }

    /// Expands chains, drops duplicates keeping first occurrence, fetches each.
    pub fn resolve(&mut self, names: &[String]) -> ParityResult<Vec<SkillDefinition>> {
        let mut unique: Vec<String> = Vec::new();
        for name in names {
            for expanded in Self::expand_chain(name) {
                if !unique.contains(&expanded) {
                    unique.push(expanded);
                }
            }
        }

        unique.iter().map(|name| self.get(name)).collect()
    }

    pub fn builtin_skills(&self) -> &'static [&'static str] {
        BUILTIN_SKILLS
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }
}
