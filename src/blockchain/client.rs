//! Starknet JSON-RPC client with timeout and failover handling.
//!
//! # Responsibilities
//! - Hold the node endpoints (primary + failovers)
//! - Query chain state needed to sign (chain id)
//! - Hand out providers for transaction submission
//! - Handle timeouts and network errors gracefully

use starknet::core::types::Felt;
use starknet::providers::jsonrpc::{HttpTransport, JsonRpcClient};
use starknet::providers::Provider;
use std::time::Duration;
use tokio::time::timeout;
use url::Url;

use crate::blockchain::types::{BlockchainResult, DeclareError};
use crate::config::NodeConfig;

/// Starknet RPC client wrapper with failover support for reads.
#[derive(Clone)]
pub struct StarknetClient {
    /// Primary endpoint followed by failovers.
    endpoints: Vec<Url>,
    /// Chain id pinned by configuration, if any.
    chain_id: Option<Felt>,
    /// Request timeout duration.
    timeout_duration: Duration,
}

impl StarknetClient {
    /// Create a new client. No network I/O happens here.
    ///
    /// # Arguments
    /// * `config` - Node configuration
    pub fn new(config: &NodeConfig) -> BlockchainResult<Self> {
        let primary: Url = config.rpc_url.parse().map_err(|e| {
            DeclareError::Rpc(format!("Invalid RPC URL '{}': {}", config.rpc_url, e))
        })?;
        let mut endpoints = vec![primary];

        for url_str in &config.failover_urls {
            match url_str.parse() {
                Ok(url) => endpoints.push(url),
                Err(_) => tracing::warn!(url = %url_str, "Ignoring invalid failover RPC URL"),
            }
        }

        let chain_id = match &config.chain_id {
            Some(raw) => Some(Felt::from_hex(raw).map_err(|_| {
                DeclareError::InvalidCredentials(format!("invalid chain id '{}'", raw))
            })?),
            None => None,
        };

        tracing::debug!(
            rpc_url = %config.rpc_url,
            failovers = endpoints.len() - 1,
            "Starknet client initialized"
        );

        Ok(Self {
            endpoints,
            chain_id,
            timeout_duration: Duration::from_secs(config.rpc_timeout_secs),
        })
    }

    /// Chain id from configuration, or from the first node that answers.
    pub async fn get_chain_id(&self) -> BlockchainResult<Felt> {
        if let Some(chain_id) = self.chain_id {
            return Ok(chain_id);
        }

        for (i, url) in self.endpoints.iter().enumerate() {
            let provider = JsonRpcClient::new(HttpTransport::new(url.clone()));
            match timeout(self.timeout_duration, provider.chain_id()).await {
                Ok(Ok(chain_id)) => return Ok(chain_id),
                Ok(Err(e)) => {
                    tracing::warn!(provider_idx = i, error = %e, "RPC error, trying next provider");
                }
                Err(_) => {
                    tracing::warn!(provider_idx = i, "RPC timeout, trying next provider");
                }
            }
        }
        Err(DeclareError::Rpc("All RPC providers failed".to_string()))
    }

    /// Provider bound to the primary endpoint.
    ///
    /// Transactions always go to the primary so a submission is never
    /// repeated against a second node.
    pub fn primary_provider(&self) -> JsonRpcClient<HttpTransport> {
        JsonRpcClient::new(HttpTransport::new(self.endpoints[0].clone()))
    }

    pub fn primary_url(&self) -> &Url {
        &self.endpoints[0]
    }

    pub fn timeout_duration(&self) -> Duration {
        self.timeout_duration
    }
}

impl std::fmt::Debug for StarknetClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StarknetClient")
            .field("rpc_url", &self.endpoints[0].as_str())
            .field("failovers", &(self.endpoints.len() - 1))
            .field("timeout_secs", &self.timeout_duration.as_secs())
            .finish()
    }
}
