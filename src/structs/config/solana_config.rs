use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SolanaConfig {
    #[serde(default = "ConfigHelper::default_rpc_url")]
    pub rpc_url: String,

    /// One of `mainnet-beta`, `devnet`, `testnet`, `localnet`.
    #[serde(default = "ConfigHelper::default_cluster")]
    pub cluster: String,

    /// Base58 id of the registry program.
    #[serde(default = "ConfigHelper::default_program_id")]
    pub program_id: String,
}

impl Default for SolanaConfig {
    fn default() -> Self {
        Self {
            rpc_url: ConfigHelper::default_rpc_url(),
            cluster: ConfigHelper::default_cluster(),
            program_id: ConfigHelper::default_program_id(),
        }
    }
}
