//! Workflow outcomes, output labels and process exit codes.

use thiserror::Error;

use crate::artifact::ArtifactError;
use crate::blockchain::{DeclareError, DeclareReport};

/// Prefix of the line printed when the node accepts the declaration.
pub const SUCCESS_LABEL: &str = "Declare result: ";
/// Prefix of the line printed when submission fails.
pub const DECLARE_ERROR_LABEL: &str = "Error during declaration: ";
/// Prefix of the line printed when the artifact cannot be loaded.
pub const LOAD_ERROR_LABEL: &str = "Error loading artifact: ";

/// Exit status for a confirmed declaration.
pub const EXIT_SUCCESS: u8 = 0;
/// Exit status when the declare call fails.
pub const EXIT_DECLARE_FAILED: u8 = 1;
/// Exit status when the artifact cannot be loaded. 2 is clap's usage error.
pub const EXIT_LOAD_FAILED: u8 = 3;
/// Exit status for configuration problems.
pub const EXIT_CONFIG_FAILED: u8 = 4;

/// Why a declaration attempt did not succeed.
#[derive(Debug, Error)]
pub enum WorkflowError {
    /// The artifact could not be loaded; nothing was submitted.
    #[error(transparent)]
    Load(#[from] ArtifactError),

    /// The declare call failed.
    #[error(transparent)]
    Declare(#[from] DeclareError),
}

impl WorkflowError {
    pub fn label(&self) -> &'static str {
        match self {
            WorkflowError::Load(_) => LOAD_ERROR_LABEL,
            WorkflowError::Declare(_) => DECLARE_ERROR_LABEL,
        }
    }

    pub fn exit_code(&self) -> u8 {
        match self {
            WorkflowError::Load(_) => EXIT_LOAD_FAILED,
            WorkflowError::Declare(_) => EXIT_DECLARE_FAILED,
        }
    }
}

/// Map a finished attempt to the process exit status.
pub fn exit_code(outcome: &Result<DeclareReport, WorkflowError>) -> u8 {
    match outcome {
        Ok(_) => EXIT_SUCCESS,
        Err(e) => e.exit_code(),
    }
}
