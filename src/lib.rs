//! Starknet contract class declarer.
//!
//! Loads a compiled Sierra contract class from disk and submits a single
//! declare transaction through a configured account.

pub mod artifact;
pub mod blockchain;
pub mod config;
pub mod observability;
pub mod workflow;

pub use blockchain::{SigningAccount, StarknetAccount};
pub use config::DeclarerConfig;
pub use workflow::DeclareWorkflow;
