//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the service.
//! All types derive Serde traits for deserialization from config files.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Root configuration for the shopping-list service.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Document database connection settings.
    pub database: DatabaseConfig,

    /// Prebuilt front-end serving (production only).
    pub static_assets: StaticAssetsConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Deployment environment; controls whether static assets are served.
    pub environment: Environment,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address, host:port (e.g., "0.0.0.0:5000" or "localhost:5000").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:5000".to_string(),
        }
    }
}

/// Document database connection settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// MongoDB connection string. Empty selects the in-memory store,
    /// which only development mode accepts.
    pub uri: String,

    /// Database name.
    pub database: String,

    /// Collection holding the items.
    pub collection: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            uri: String::new(),
            database: "shoplist".to_string(),
            collection: "items".to_string(),
        }
    }
}

/// Prebuilt front-end serving configuration.
///
/// Only consulted in production mode, where unmatched paths fall back to
/// the front-end build directory.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct StaticAssetsConfig {
    /// Directory containing the front-end build output.
    pub dir: String,

    /// File served for paths that match nothing in the directory.
    pub index: String,
}

impl Default for StaticAssetsConfig {
    fn default() -> Self {
        Self {
            dir: "client/build".to_string(),
            index: "index.html".to_string(),
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Per-request timeout in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Deployment environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    pub fn is_production(self) -> bool {
        self == Environment::Production
    }
}

impl FromStr for Environment {
    type Err = UnknownEnvironment;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "production" => Ok(Environment::Production),
            "development" => Ok(Environment::Development),
            other => Err(UnknownEnvironment(other.to_string())),
        }
    }
}

/// Error for an unrecognized environment name.
#[derive(Debug)]
pub struct UnknownEnvironment(pub String);

impl fmt::Display for UnknownEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown environment `{}`", self.0)
    }
}

impl std::error::Error for UnknownEnvironment {}
