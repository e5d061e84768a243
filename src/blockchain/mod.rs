//! Starknet integration subsystem.
//!
//! # Data Flow
//! ```text
//! NodeConfig / AccountConfig
//!     → client.rs (endpoints, chain id with timeouts and failover)
//!     → account.rs (key loading, declare transaction, submission)
//!     → types.rs (DeclareReport or DeclareError)
//! ```
//!
//! # Security Constraints
//! - Never log private keys or sensitive data
//! - All RPC calls have configurable timeouts
//! - Submissions go to the primary endpoint only, exactly once

pub mod account;
pub mod client;
pub mod types;

pub use account::{SigningAccount, StarknetAccount};
pub use client::StarknetClient;
pub use types::{AccountVersion, DeclareError, DeclareReport};
