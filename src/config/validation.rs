//! Configuration validation.
//!
//! Serde handles the syntactic checks; this module checks values.
//! Returns all validation errors, not just the first.
//!
//! Account credentials are deliberately not checked here: they are parsed
//! when a declaration is attempted and reported as a declaration failure.

use starknet::core::types::Felt;
use std::fmt;

use crate::config::schema::DeclarerConfig;

/// A single semantic problem found in the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted path of the offending field, e.g. `node.rpc_url`.
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate a fully merged configuration.
pub fn validate_config(config: &DeclarerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Err(e) = url::Url::parse(&config.node.rpc_url) {
        errors.push(ValidationError::new(
            "node.rpc_url",
            format!("invalid URL '{}': {}", config.node.rpc_url, e),
        ));
    }

    for failover in &config.node.failover_urls {
        if let Err(e) = url::Url::parse(failover) {
            errors.push(ValidationError::new(
                "node.failover_urls",
                format!("invalid URL '{}': {}", failover, e),
            ));
        }
    }

    if config.node.rpc_timeout_secs == 0 {
        errors.push(ValidationError::new(
            "node.rpc_timeout_secs",
            "must be greater than zero",
        ));
    }

    if let Some(chain_id) = &config.node.chain_id {
        check_felt(&mut errors, "node.chain_id", chain_id);
    }

    if let Some(hash) = &config.declare.compiled_class_hash {
        check_felt(&mut errors, "declare.compiled_class_hash", hash);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_felt(errors: &mut Vec<ValidationError>, field: &'static str, value: &str) {
    if Felt::from_hex(value).is_err() {
        errors.push(ValidationError::new(
            field,
            format!("'{}' is not a valid hex field element", value),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_passes() {
        assert!(validate_config(&DeclarerConfig::default()).is_ok());
    }

    #[test]
    fn test_credentials_are_not_validated() {
        let mut config = DeclarerConfig::default();
        config.account.address = "not-an-address".to_string();
        config.account.version = "7".to_string();
        config.account.private_key = None;
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = DeclarerConfig::default();
        config.node.rpc_url = "not a url".to_string();
        config.node.failover_urls.push("also not a url".to_string());
        config.node.rpc_timeout_secs = 0;

        let errors = validate_config(&config).unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec!["node.rpc_url", "node.failover_urls", "node.rpc_timeout_secs"]
        );
    }

    #[test]
    fn test_optional_felts_checked_when_present() {
        let mut config = DeclarerConfig::default();
        config.node.chain_id = Some("SN_MAIN".to_string());
        config.declare.compiled_class_hash = Some("0x1234".to_string());
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "node.chain_id");
    }
}
