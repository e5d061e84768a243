//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! defaults (schema.rs)
//!     → optional TOML file (loader.rs)
//!     → environment / .env (private key)
//!     → command-line overrides
//!     → validation.rs (semantic checks)
//!     → DeclarerConfig (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - Endpoint and credentials are never compiled in; they reach the
//!   workflow only through this module
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError, ConfigOverrides};
pub use schema::{AccountConfig, DeclareConfig, DeclarerConfig, NodeConfig};
