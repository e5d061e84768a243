//! Declare workflow subsystem.
//!
//! # Data Flow
//! ```text
//! sierra path (argv)
//!     → artifact loader (resolve + parse)       fails → "Error loading artifact: ..."
//!     → SigningAccount::declare (one network call) fails → "Error during declaration: ..."
//!     → "Declare result: { transaction_hash, class_hash }"
//!     → exit code (outcome.rs)
//! ```
//!
//! # Design Decisions
//! - Exactly one attempt and one output line per invocation
//! - Both failure phases are reported the same way; exit codes tell them apart

pub mod declare;
pub mod outcome;

pub use declare::DeclareWorkflow;
pub use outcome::{exit_code, WorkflowError};
