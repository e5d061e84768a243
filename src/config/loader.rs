//! Configuration loading from disk and the environment.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::schema::DeclarerConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Command-line values that take precedence over the file and environment.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub rpc_url: Option<String>,
    pub address: Option<String>,
    pub compiled_class_hash: Option<String>,
    pub casm_path: Option<PathBuf>,
}

impl ConfigOverrides {
    fn apply(self, config: &mut DeclarerConfig) {
        if let Some(rpc_url) = self.rpc_url {
            config.node.rpc_url = rpc_url;
        }
        if let Some(address) = self.address {
            config.account.address = address;
        }
        if let Some(hash) = self.compiled_class_hash {
            config.declare.compiled_class_hash = Some(hash);
        }
        if let Some(casm_path) = self.casm_path {
            config.declare.casm_path = Some(casm_path);
        }
    }
}

/// Parse a TOML file without validating it.
pub fn read_config(path: &Path) -> Result<DeclarerConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(toml::from_str(&content)?)
}

/// Build the effective configuration.
///
/// Order: defaults, then the optional TOML file, then the environment
/// (including a `.env` file), then command-line overrides. The result is
/// validated before it is returned.
pub fn load_config(
    path: Option<&Path>,
    overrides: ConfigOverrides,
) -> Result<DeclarerConfig, ConfigError> {
    let mut config = match path {
        Some(path) => read_config(path)?,
        None => DeclarerConfig::default(),
    };

    let _ = dotenvy::dotenv();
    config.account.apply_env();
    overrides.apply(&mut config);

    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}
