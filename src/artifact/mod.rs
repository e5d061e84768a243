//! Contract artifact subsystem.
//!
//! # Data Flow
//! ```text
//! positional path
//!     → loader.rs (resolve against cwd, read, parse JSON)
//!     → ContractArtifact (opaque document)
//!     → casm.rs (compiled class hash, resolved at declaration time)
//! ```
//!
//! # Design Decisions
//! - Artifacts are data: read and parsed, never executed
//! - The loader checks well-formedness only; class-level checks happen
//!   when the account builds the transaction

pub mod casm;
pub mod loader;

pub use casm::{resolve_compiled_class_hash, CasmError};
pub use loader::{resolve_path, ArtifactError, ArtifactSource, ContractArtifact, JsonArtifactLoader};
