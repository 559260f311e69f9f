use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use solana_program::pubkey::Pubkey;
use crate::config::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME, MAX_RETRIES, SUPPORTED_CLUSTERS};
use crate::errors::{ParityError, ParityResult};
use crate::structs::config::config::Config;

const SAMPLE_CONFIG: &str = r#"# Parity SDK Configuration

[api]
# API key. Leave unset to read it from the variable named by api_key_env.
# api_key = "pk_live_..."
api_key_env = "PARITY_API_KEY"

base_url = "https://api.parity.cx"

# Per-request timeout
timeout_ms = 30000

# Retries on 5xx responses and connection failures (max 5).
# Delay doubles on every attempt: retry_delay_ms * 2^attempt
retries = 3
retry_delay_ms = 1000

[solana]
rpc_url = "https://api.devnet.solana.com"
# "mainnet-beta", "devnet", "testnet" or "localnet"
cluster = "devnet"
program_id = "BiV9Apx3pr5kXxeje3Xk4piVWUxokRRsWwKhyRPWAYSQ"
"#;

pub struct ConfigManager;

impl ConfigManager {

    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME))
    }

    /// Loads `~/.parity/config.toml`, falling back to defaults when absent.
    pub fn load() -> ParityResult<Config> {
        let config_location = Self::config_path();

        if config_location.exists() {
            return Self::load_from(&config_location);
        }

        log::debug!("📋 No config file at {}, using defaults", config_location.display());
        Ok(Config::default())
    }

    pub fn load_from(path: &Path) -> ParityResult<Config> {
        log::info!("📋 Loading config from: {}", path.display());
        let content = fs::read_to_string(path).map_err(|e| ParityError::ConfigurationFileError {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let config: Config = toml::from_str(&content).map_err(|e| ParityError::ConfigurationFileError {
            path: path.display().to_string(),
            reason: e.message().to_string(),
        })?;
        Ok(config)
    }

    pub fn create_sample_config() -> ParityResult<PathBuf> {
        let config_file_path = Self::config_path();
        Self::create_sample_config_at(&config_file_path)?;
        Ok(config_file_path)
    }

    pub fn create_sample_config_at(path: &Path) -> ParityResult<()> {
        if path.exists() {
            return Err(ParityError::config_error(
                &format!("config file already exists at {}", path.display()),
                None,
                Some("Edit the existing file or remove it first"),
            ));
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, SAMPLE_CONFIG)?;
        log::info!("✅ Created sample config at: {}", path.display());
        Ok(())
    }

    pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();
        let api = &config.api;

        if !api.base_url.starts_with("http://") && !api.base_url.starts_with("https://") {
            errors.push(format!("api.base_url must be an http(s) URL: {}", api.base_url));
        }

        if api.retries > MAX_RETRIES {
            errors.push(format!("api.retries must be at most {}, got {}", MAX_RETRIES, api.retries));
        }

        if api.timeout_ms == 0 {
            errors.push("api.timeout_ms must be greater than zero".to_string());
        }

        if api.resolve_api_key().is_none() {
            errors.push(format!("No API key: set api.api_key or the {} environment variable", api.api_key_env));
        }

        if !SUPPORTED_CLUSTERS.contains(&config.solana.cluster.as_str()) {
            errors.push(format!(
                "solana.cluster must be one of {}, got {}",
                SUPPORTED_CLUSTERS.join(", "),
                config.solana.cluster
            ));
        }

        if Pubkey::from_str(&config.solana.program_id).is_err() {
            errors.push(format!("solana.program_id is not a valid base58 public key: {}", config.solana.program_id));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_config_parses_to_defaults() {
        let config: Config = toml::from_str(SAMPLE_CONFIG).unwrap();
        let defaults = Config::default();
        assert_eq!(config.api.base_url, defaults.api.base_url);
        assert_eq!(config.api.retries, defaults.api.retries);
        assert_eq!(config.solana.program_id, defaults.solana.program_id);
    }

    #[test]
    fn validation_collects_every_problem() {
        let mut config = Config::default();
        config.api.api_key = Some("key".to_string());
        config.api.base_url = "ftp://example".to_string();
        config.api.retries = 9;
        config.solana.cluster = "moon".to_string();
        config.solana.program_id = "not-a-key".to_string();

        let errors = ConfigManager::validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 4);
    }
}
