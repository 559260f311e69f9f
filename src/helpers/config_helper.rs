use crate::config::constants::{
    API_KEY_ENV, DEFAULT_BASE_URL, DEFAULT_CLUSTER, DEFAULT_PROGRAM_ID, DEFAULT_RETRIES,
    DEFAULT_RETRY_DELAY_MS, DEFAULT_SOLANA_RPC, DEFAULT_TIMEOUT_MS,
};

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_api_key_env() -> String {
        API_KEY_ENV.to_string()
    }

    pub fn default_base_url() -> String {
        DEFAULT_BASE_URL.to_string()
    }

    pub fn default_timeout_ms() -> u64 {
        DEFAULT_TIMEOUT_MS
    }

    pub fn default_retries() -> u32 {
        DEFAULT_RETRIES
    }

    pub fn default_retry_delay_ms() -> u64 {
        DEFAULT_RETRY_DELAY_MS
    }

    pub fn default_rpc_url() -> String {
        DEFAULT_SOLANA_RPC.to_string()
    }

    pub fn default_cluster() -> String {
        DEFAULT_CLUSTER.to_string()
    }

    pub fn default_program_id() -> String {
        DEFAULT_PROGRAM_ID.to_string()
    }
}
