pub const DEFAULT_BASE_URL: &str = "https://api.parity.cx";
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;
pub const DEFAULT_RETRIES: u32 = 3;
pub const DEFAULT_RETRY_DELAY_MS: u64 = 1_000;
pub const MAX_RETRIES: u32 = 5;

pub const DEFAULT_SOLANA_RPC: &str = "https://api.devnet.solana.com";
pub const DEFAULT_CLUSTER: &str = "devnet";
pub const SUPPORTED_CLUSTERS: &[&str] = &["mainnet-beta", "devnet", "testnet", "localnet"];
pub const DEFAULT_PROGRAM_ID: &str = "BiV9Apx3pr5kXxeje3Xk4piVWUxokRRsWwKhyRPWAYSQ";

pub const API_KEY_ENV: &str = "PARITY_API_KEY";
pub const CONFIG_DIR_NAME: &str = ".parity";
pub const CONFIG_FILE_NAME: &str = "config.toml";

pub const API_VERSION: &str = "v1";
pub const SDK_VERSION_HEADER: &str = "X-Parity-SDK-Version";
pub const USER_AGENT: &str = concat!("parity-sdk-rs/", env!("CARGO_PKG_VERSION"));

pub const ANALYZE_ENDPOINT: &str = "/v1/analyze";
pub const SKILLS_ENDPOINT: &str = "/v1/skills";
pub const CONTEXT_ENDPOINT: &str = "/v1/context";
pub const PROGRAMS_ENDPOINT: &str = "/v1/programs";
pub const HEALTH_ENDPOINT: &str = "/v1/health";

pub const SKILL_SECURITY_AUDIT: &str = "security-audit";
pub const SKILL_BEST_PRACTICES: &str = "best-practices";
pub const SKILL_GAS_OPTIMIZATION: &str = "gas-optimization";
pub const SKILL_DEEP_AUDIT: &str = "deep-audit";
pub const BUILTIN_SKILLS: &[&str] = &[
    SKILL_SECURITY_AUDIT,
    SKILL_BEST_PRACTICES,
    SKILL_GAS_OPTIMIZATION,
    SKILL_DEEP_AUDIT,
];

pub const MAX_PROGRAM_SIZE: u64 = 10 * 1024 * 1024;
pub const MAX_SKILLS_PER_ANALYSIS: usize = 8;
pub const MAX_SKILL_NAME_LEN: usize = 64;
pub const DEFAULT_PAGE_LIMIT: u32 = 20;
pub const MAX_PAGE_LIMIT: u32 = 100;

// Must stay in sync with the on-chain pattern enum.
pub const VULNERABILITY_CATEGORIES: &[&str] = &[
    "missing-signer-check",
    "unchecked-arithmetic",
    "unvalidated-pda",
    "insecure-cpi",
    "account-deserialization",
    "rent-exemption",
    "close-account",
    "type-cosplay",
    "reinitialization-attack",
    "owner-check",
];

pub const SARIF_SCHEMA: &str = "https://raw.githubusercontent.com/oasis-tcs/sarif-spec/main/sarif-2.1/schema/sarif-schema-2.1.0.json";
pub const SARIF_TOOL_URI: &str = "https://parity.cx";
