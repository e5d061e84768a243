//! Configuration schema definitions.
//!
//! Every section has defaults matching a local Madara devnet, so an empty
//! file (or no file at all) is a valid starting point.

use serde::Deserialize;
use std::path::PathBuf;

/// Environment variable name for the account private key.
pub const PRIVATE_KEY_ENV_VAR: &str = "DECLARER_PRIVATE_KEY";

/// Root configuration for the declarer.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct DeclarerConfig {
    /// Node endpoint settings.
    pub node: NodeConfig,

    /// Signing account identity.
    pub account: AccountConfig,

    /// Declaration options.
    pub declare: DeclareConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Starknet node connection configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NodeConfig {
    /// JSON-RPC endpoint URL.
    pub rpc_url: String,

    /// Failover JSON-RPC endpoint URLs, used for read queries only.
    pub failover_urls: Vec<String>,

    /// RPC request timeout in seconds.
    pub rpc_timeout_secs: u64,

    /// Chain ID as a hex felt. Queried from the node when absent.
    pub chain_id: Option<String>,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            rpc_url: "http://localhost:9944".to_string(),
            failover_urls: Vec::new(),
            rpc_timeout_secs: 30,
            chain_id: None,
        }
    }
}

/// Account credentials bound to the node client.
///
/// Kept as raw strings; they are parsed when a declaration is attempted.
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct AccountConfig {
    /// Account contract address (hex felt).
    pub address: String,

    /// Account version: "0" for legacy call encoding, "1" for Cairo 1.
    pub version: String,

    /// Private key (hex felt). Prefer the environment variable.
    pub private_key: Option<String>,
}

impl Default for AccountConfig {
    fn default() -> Self {
        Self {
            address: "0x4".to_string(),
            version: "1".to_string(),
            private_key: None,
        }
    }
}

impl AccountConfig {
    /// Fill the private key from `DECLARER_PRIVATE_KEY` if the file left it unset.
    pub fn apply_env(&mut self) {
        if self.private_key.is_none() {
            self.private_key = std::env::var(PRIVATE_KEY_ENV_VAR).ok();
        }
    }
}

impl std::fmt::Debug for AccountConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccountConfig")
            .field("address", &self.address)
            .field("version", &self.version)
            .field(
                "private_key",
                &self.private_key.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}

/// Compiled class hash source and fee settings for the declaration.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct DeclareConfig {
    /// Explicit compiled class hash (hex felt). Wins over `casm_path`.
    pub compiled_class_hash: Option<String>,

    /// Path to the compiled CASM class. When both this and the hash are
    /// unset, a sibling `*.compiled_contract_class.json` is looked up.
    pub casm_path: Option<PathBuf>,

    /// L1 gas amount. With `gas_price` set too, fee estimation is skipped.
    pub gas: Option<u64>,

    /// L1 gas price in fri.
    pub gas_price: Option<u64>,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
