//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges and address formats
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ServerConfig → Result<(), Vec<ValidationError>>
//! - Port 0 is accepted (ephemeral port, used by tests)

use std::net::SocketAddr;

use crate::config::schema::ServerConfig;

/// A single semantic problem with the configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("HOST must not be empty")]
    EmptyHost,

    #[error("HOST {0:?} must not contain whitespace")]
    InvalidHost(String),

    #[error("MAX_BODY_BYTES must be greater than zero")]
    ZeroBodyLimit,

    #[error("METRICS_ADDRESS {0:?} is not a socket address")]
    InvalidMetricsAddress(String),
}

/// Check a parsed configuration for semantic errors.
pub fn validate_config(config: &ServerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let host = config.host.trim();
    if host.is_empty() {
        errors.push(ValidationError::EmptyHost);
    } else if host.chars().any(char::is_whitespace) {
        errors.push(ValidationError::InvalidHost(config.host.clone()));
    }

    if config.max_body_bytes == 0 {
        errors.push(ValidationError::ZeroBodyLimit);
    }

    if let Some(address) = &config.metrics_address {
        if address.parse::<SocketAddr>().is_err() {
            errors.push(ValidationError::InvalidMetricsAddress(address.clone()));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(validate_config(&ServerConfig::default()).is_ok());
    }

    #[test]
    fn collects_every_error() {
        let config = ServerConfig {
            host: "   ".into(),
            max_body_bytes: 0,
            metrics_address: Some("nowhere".into()),
            ..ServerConfig::default()
        };

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::EmptyHost,
                ValidationError::ZeroBodyLimit,
                ValidationError::InvalidMetricsAddress("nowhere".into()),
            ]
        );
    }

    #[test]
    fn rejects_host_with_whitespace() {
        let config = ServerConfig {
            host: "local host".into(),
            ..ServerConfig::default()
        };
        assert_eq!(
            validate_config(&config).unwrap_err(),
            vec![ValidationError::InvalidHost("local host".into())]
        );
    }

    #[test]
    fn accepts_ipv6_and_hostnames() {
        for host in ["::", "::1", "localhost", "127.0.0.1"] {
            let config = ServerConfig {
                host: host.into(),
                metrics_address: Some("127.0.0.1:9090".into()),
                ..ServerConfig::default()
            };
            assert!(validate_config(&config).is_ok(), "{host} should be valid");
        }
    }
}
