//! Configuration loading from disk and the environment.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::AppConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", format_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load, override and validate configuration.
///
/// When `path` is `None` the defaults are used as the base. Environment
/// variables `PORT`, `MONGO_URI` and `APP_ENV` override the file either way.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut config = match path {
        Some(path) => {
            let content = fs::read_to_string(path)?;
            toml::from_str(&content)?
        }
        None => AppConfig::default(),
    };

    apply_env_overrides(&mut config);
    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

fn apply_env_overrides(config: &mut AppConfig) {
    if let Ok(port) = std::env::var("PORT") {
        set_port(&mut config.listener.bind_address, &port);
    }
    if let Ok(uri) = std::env::var("MONGO_URI") {
        config.database.uri = uri;
    }
    if let Ok(env) = std::env::var("APP_ENV") {
        match env.parse() {
            Ok(parsed) => config.environment = parsed,
            Err(err) => tracing::warn!(error = %err, "Ignoring APP_ENV override"),
        }
    }
}

/// Replace the port of a `host:port` bind address in place.
fn set_port(bind_address: &mut String, port: &str) {
    if let Some((host, _)) = bind_address.rsplit_once(':') {
        *bind_address = format!("{host}:{port}");
    }
}
