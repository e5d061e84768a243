//! Contract artifact loading.
//!
//! An artifact is read as plain JSON. Its fields are the compiler's
//! business; the only requirement here is a well-formed top-level object.

use serde_json::Value;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while turning a path into a [`ContractArtifact`].
#[derive(Debug, Error)]
pub enum ArtifactError {
    /// No path was given.
    #[error("no artifact path given")]
    EmptyPath,

    /// The path does not exist.
    #[error("artifact not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The file exists but could not be read.
    #[error("failed to read artifact {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file is not valid JSON.
    #[error("malformed artifact {}: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The file is JSON but not an object.
    #[error("artifact {} is not a JSON object", .0.display())]
    NotAnObject(PathBuf),
}

/// A compiled contract class document, kept opaque.
#[derive(Debug, Clone, PartialEq)]
pub struct ContractArtifact {
    path: PathBuf,
    document: Value,
}

impl ContractArtifact {
    pub fn new(path: impl Into<PathBuf>, document: Value) -> Self {
        Self {
            path: path.into(),
            document,
        }
    }

    /// Absolute path the artifact was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn document(&self) -> &Value {
        &self.document
    }
}

/// Something that can turn a resolved path into an artifact.
pub trait ArtifactSource: Send + Sync {
    fn load(&self, path: &Path) -> Result<ContractArtifact, ArtifactError>;
}

/// Reads artifacts from the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonArtifactLoader;

impl ArtifactSource for JsonArtifactLoader {
    fn load(&self, path: &Path) -> Result<ContractArtifact, ArtifactError> {
        let file = File::open(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => ArtifactError::NotFound(path.to_path_buf()),
            _ => ArtifactError::Io {
                path: path.to_path_buf(),
                source: e,
            },
        })?;

        let document: Value =
            serde_json::from_reader(BufReader::new(file)).map_err(|e| ArtifactError::Malformed {
                path: path.to_path_buf(),
                source: e,
            })?;

        if !document.is_object() {
            return Err(ArtifactError::NotAnObject(path.to_path_buf()));
        }

        tracing::debug!(path = %path.display(), "Artifact loaded");
        Ok(ContractArtifact::new(path, document))
    }
}

/// Resolve a user-supplied path against the working directory.
pub fn resolve_path(raw: &str, cwd: &Path) -> Result<PathBuf, ArtifactError> {
    if raw.trim().is_empty() {
        return Err(ArtifactError::EmptyPath);
    }
    // `join` keeps absolute paths as they are.
    Ok(cwd.join(raw))
}
