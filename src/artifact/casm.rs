//! Compiled class hash resolution.
//!
//! A Cairo 1 declaration commits to the hash of the CASM compiled from the
//! Sierra class. The hash is taken, in order, from the configuration, from
//! a configured CASM file, or from the CASM file Scarb writes next to the
//! Sierra artifact.

use starknet::core::types::contract::CompiledClass;
use starknet::core::types::Felt;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::DeclareConfig;

const SIERRA_SUFFIX: &str = ".contract_class.json";
const CASM_SUFFIX: &str = ".compiled_contract_class.json";

#[derive(Debug, Error)]
pub enum CasmError {
    #[error("invalid compiled class hash '{0}'")]
    InvalidHash(String),

    #[error(
        "no compiled class hash for {}: set declare.compiled_class_hash or declare.casm_path",
        .0.display()
    )]
    Missing(PathBuf),

    #[error("failed to read CASM file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CASM file {}: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to hash CASM file {}: {message}", path.display())]
    Hash { path: PathBuf, message: String },
}

/// Path of the CASM file Scarb emits alongside a Sierra artifact.
///
/// `target/dev/pkg_Token.contract_class.json` maps to
/// `target/dev/pkg_Token.compiled_contract_class.json`.
pub fn sibling_casm_path(sierra_path: &Path) -> Option<PathBuf> {
    let name = sierra_path.file_name()?.to_str()?;
    let stem = name.strip_suffix(SIERRA_SUFFIX)?;
    Some(sierra_path.with_file_name(format!("{stem}{CASM_SUFFIX}")))
}

/// Resolve the compiled class hash for the Sierra artifact at `sierra_path`.
pub fn resolve_compiled_class_hash(
    config: &DeclareConfig,
    sierra_path: &Path,
) -> Result<Felt, CasmError> {
    if let Some(hash) = &config.compiled_class_hash {
        return Felt::from_hex(hash).map_err(|_| CasmError::InvalidHash(hash.clone()));
    }

    let casm_path = match &config.casm_path {
        Some(path) => path.clone(),
        None => sibling_casm_path(sierra_path)
            .filter(|path| path.exists())
            .ok_or_else(|| CasmError::Missing(sierra_path.to_path_buf()))?,
    };

    hash_casm_file(&casm_path)
}

/// Compute the compiled class hash of a CASM file.
pub fn hash_casm_file(path: &Path) -> Result<Felt, CasmError> {
    let file = File::open(path).map_err(|e| CasmError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    let class: CompiledClass =
        serde_json::from_reader(BufReader::new(file)).map_err(|e| CasmError::Malformed {
            path: path.to_path_buf(),
            source: e,
        })?;

    let hash = class.class_hash().map_err(|e| CasmError::Hash {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    tracing::debug!(path = %path.display(), compiled_class_hash = %format!("{:#x}", hash), "CASM hashed");
    Ok(hash)
}
