//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events on stderr)
//!
//! Consumers:
//!     → operator terminal or log collector
//! ```
//!
//! # Design Decisions
//! - Structured fields (addresses, hashes, paths) instead of formatted text
//! - Secrets are never passed to log macros

pub mod logging;
