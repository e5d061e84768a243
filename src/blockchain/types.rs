//! Chain-specific types and error definitions.

use starknet::core::types::Felt;
use std::fmt;
use thiserror::Error;

use crate::artifact::CasmError;

/// Errors that can occur while building or submitting a declaration.
#[derive(Debug, Error)]
pub enum DeclareError {
    /// The artifact is JSON but not a usable Sierra class.
    #[error("invalid contract class: {0}")]
    InvalidClass(String),

    /// The compiled class hash could not be determined.
    #[error(transparent)]
    CompiledClassHash(#[from] CasmError),

    /// Address, key or chain id could not be used.
    #[error("invalid credentials: {0}")]
    InvalidCredentials(String),

    /// RPC connection or request failed.
    #[error("RPC error: {0}")]
    Rpc(String),

    /// RPC request timed out.
    #[error("RPC timeout after {0} seconds")]
    Timeout(u64),

    /// The node or the account refused the transaction.
    #[error("{0}")]
    Rejected(String),
}

/// Result type for blockchain operations.
pub type BlockchainResult<T> = Result<T, DeclareError>;

/// What the node returned for an accepted declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclareReport {
    pub transaction_hash: String,
    pub class_hash: String,
}

impl DeclareReport {
    pub fn new(transaction_hash: impl Into<String>, class_hash: impl Into<String>) -> Self {
        Self {
            transaction_hash: transaction_hash.into(),
            class_hash: class_hash.into(),
        }
    }

    pub fn from_felts(transaction_hash: Felt, class_hash: Felt) -> Self {
        Self::new(
            format!("{:#x}", transaction_hash),
            format!("{:#x}", class_hash),
        )
    }
}

impl fmt::Display for DeclareReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{ transaction_hash: {}, class_hash: {} }}",
            self.transaction_hash, self.class_hash
        )
    }
}

/// Call encoding of the account contract, selected by its version tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountVersion {
    /// Cairo 0 accounts.
    Legacy,
    /// Cairo 1 accounts.
    Cairo1,
}

impl AccountVersion {
    pub fn parse(tag: &str) -> BlockchainResult<Self> {
        match tag {
            "0" => Ok(Self::Legacy),
            "1" => Ok(Self::Cairo1),
            other => Err(DeclareError::InvalidCredentials(format!(
                "unsupported account version '{}'",
                other
            ))),
        }
    }
}
