//! Signing account and class declaration.
//!
//! # Security
//! - The private key comes from configuration or `DECLARER_PRIVATE_KEY`
//! - Credentials are parsed per declaration, never at startup
//! - Keys are never logged or serialized

use async_trait::async_trait;
use starknet::accounts::{Account, ExecutionEncoding, SingleOwnerAccount};
use starknet::core::types::contract::SierraClass;
use starknet::core::types::Felt;
use starknet::signers::{LocalWallet, SigningKey};
use std::sync::Arc;
use tokio::time::timeout;

use crate::artifact::{resolve_compiled_class_hash, ContractArtifact};
use crate::blockchain::client::StarknetClient;
use crate::blockchain::types::{AccountVersion, BlockchainResult, DeclareError, DeclareReport};
use crate::config::schema::PRIVATE_KEY_ENV_VAR;
use crate::config::{AccountConfig, DeclareConfig, DeclarerConfig};

/// Anything able to declare a contract class on behalf of an address.
#[async_trait]
pub trait SigningAccount: Send + Sync {
    /// Submit one declare transaction for `artifact`.
    async fn declare(&self, artifact: &ContractArtifact) -> BlockchainResult<DeclareReport>;
}

#[async_trait]
impl<T: SigningAccount + ?Sized> SigningAccount for Arc<T> {
    async fn declare(&self, artifact: &ContractArtifact) -> BlockchainResult<DeclareReport> {
        (**self).declare(artifact).await
    }
}

/// A single-owner Starknet account bound to a [`StarknetClient`].
///
/// Credentials are kept as configured and only parsed when a declaration
/// is attempted, so a malformed address or key is reported as a failed
/// declaration rather than a startup error.
pub struct StarknetAccount {
    client: StarknetClient,
    credentials: AccountConfig,
    declare: DeclareConfig,
}

/// Credentials parsed and ready to sign.
struct BoundCredentials {
    signer: LocalWallet,
    address: Felt,
    version: AccountVersion,
}

impl BoundCredentials {
    fn encoding(&self) -> ExecutionEncoding {
        match self.version {
            AccountVersion::Legacy => ExecutionEncoding::Legacy,
            AccountVersion::Cairo1 => ExecutionEncoding::New,
        }
    }
}

impl StarknetAccount {
    /// Bind credentials to a client. Nothing is parsed here.
    pub fn new(client: StarknetClient, credentials: AccountConfig) -> Self {
        Self {
            client,
            credentials,
            declare: DeclareConfig::default(),
        }
    }

    /// Build client and account from a validated configuration.
    pub fn from_config(config: &DeclarerConfig) -> BlockchainResult<Self> {
        let client = StarknetClient::new(&config.node)?;
        Ok(Self::new(client, config.account.clone()).with_declare_config(config.declare.clone()))
    }

    /// Set where the compiled class hash and fee settings come from.
    pub fn with_declare_config(mut self, declare: DeclareConfig) -> Self {
        self.declare = declare;
        self
    }

    fn bind_credentials(&self) -> BlockchainResult<BoundCredentials> {
        let raw_address = &self.credentials.address;
        let address = Felt::from_hex(raw_address).map_err(|_| {
            DeclareError::InvalidCredentials(format!("invalid account address '{}'", raw_address))
        })?;

        let private_key_hex = self.credentials.private_key.as_deref().ok_or_else(|| {
            DeclareError::InvalidCredentials(format!(
                "private key not set (set account.private_key or {})",
                PRIVATE_KEY_ENV_VAR
            ))
        })?;
        let key_hex = private_key_hex.strip_prefix("0x").unwrap_or(private_key_hex);
        let key = Felt::from_hex(&format!("0x{}", key_hex)).map_err(|_| {
            DeclareError::InvalidCredentials("invalid private key format".to_string())
        })?;

        let version = AccountVersion::parse(&self.credentials.version)?;

        Ok(BoundCredentials {
            signer: LocalWallet::from(SigningKey::from_secret_scalar(key)),
            address,
            version,
        })
    }
}

#[async_trait]
impl SigningAccount for StarknetAccount {
    async fn declare(&self, artifact: &ContractArtifact) -> BlockchainResult<DeclareReport> {
        let credentials = self.bind_credentials()?;

        let class: SierraClass = serde_json::from_value(artifact.document().clone())
            .map_err(|e| DeclareError::InvalidClass(e.to_string()))?;
        let flattened = class
            .flatten()
            .map_err(|e| DeclareError::InvalidClass(e.to_string()))?;

        let compiled_class_hash = resolve_compiled_class_hash(&self.declare, artifact.path())?;
        let chain_id = self.client.get_chain_id().await?;

        let encoding = credentials.encoding();
        let account = SingleOwnerAccount::new(
            self.client.primary_provider(),
            credentials.signer,
            credentials.address,
            chain_id,
            encoding,
        );

        tracing::info!(
            rpc_url = %self.client.primary_url(),
            address = %format!("{:#x}", credentials.address),
            artifact = %artifact.path().display(),
            compiled_class_hash = %format!("{:#x}", compiled_class_hash),
            "Submitting declare transaction"
        );

        let mut declaration = account.declare_v3(Arc::new(flattened), compiled_class_hash);
        if let Some(gas) = self.declare.gas {
            declaration = declaration.gas(gas);
        }
        if let Some(gas_price) = self.declare.gas_price {
            declaration = declaration.gas_price(u128::from(gas_price));
        }

        let secs = self.client.timeout_duration().as_secs();
        let result = timeout(self.client.timeout_duration(), declaration.send())
            .await
            .map_err(|_| DeclareError::Timeout(secs))?
            .map_err(|e| DeclareError::Rejected(e.to_string()))?;

        let report = DeclareReport::from_felts(result.transaction_hash, result.class_hash);
        tracing::info!(
            transaction_hash = %report.transaction_hash,
            class_hash = %report.class_hash,
            "Declare transaction accepted"
        );
        Ok(report)
    }
}

impl std::fmt::Debug for StarknetAccount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StarknetAccount")
            .field("client", &self.client)
            .field("credentials", &self.credentials)
            .finish()
    }
}
