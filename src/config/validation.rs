//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, bind address well-formed)
//! - Enforce environment constraints (production requires a database)
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: AppConfig → Result<(), Vec<ValidationError>>
//! - Runs before the config is accepted into the system

use thiserror::Error;

use crate::config::schema::AppConfig;

/// A single semantic validation failure.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("listener.bind_address `{0}` is not a host:port address")]
    InvalidBindAddress(String),

    #[error("database.uri must be set in production (in-memory storage is development-only)")]
    MissingDatabaseUri,

    #[error("database.{0} must not be empty")]
    EmptyDatabaseField(&'static str),

    #[error("timeouts.request_secs must be greater than zero")]
    ZeroRequestTimeout,
}

/// Check the semantic constraints on a deserialized config.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if !valid_bind_address(&config.listener.bind_address) {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if config.environment.is_production() && config.database.uri.is_empty() {
        errors.push(ValidationError::MissingDatabaseUri);
    }

    if config.database.database.is_empty() {
        errors.push(ValidationError::EmptyDatabaseField("database"));
    }
    if config.database.collection.is_empty() {
        errors.push(ValidationError::EmptyDatabaseField("collection"));
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroRequestTimeout);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Shape check only: a non-empty host and a numeric port. Hostnames like
/// `localhost:5000` are accepted; resolution is left to the listener bind.
fn valid_bind_address(addr: &str) -> bool {
    match addr.rsplit_once(':') {
        Some((host, port)) => !host.is_empty() && port.parse::<u16>().is_ok(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::Environment;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&AppConfig::default()).is_ok());
    }

    #[test]
    fn test_hostname_bind_address_is_valid() {
        let mut config = AppConfig::default();
        config.listener.bind_address = "localhost:5000".to_string();
        assert!(validate_config(&config).is_ok());

        config.listener.bind_address = "localhost:notaport".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_production_requires_database_uri() {
        let mut config = AppConfig::default();
        config.environment = Environment::Production;

        let errors = validate_config(&config).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| matches!(e, ValidationError::MissingDatabaseUri)));

        config.database.uri = "mongodb://127.0.0.1:27017".to_string();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = AppConfig::default();
        config.listener.bind_address = "not-an-address".to_string();
        config.database.collection = String::new();
        config.timeouts.request_secs = 0;

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
    }
}
