//! Configuration types for Parley.
//!
//! `DatabaseConfig` describes how to reach the PostgreSQL store and
//! `ApiConfig` how to expose the HTTP surface. Both are assembled by the
//! binary from CLI flags and environment variables (`DB_*`, `API_*`).

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

/// Default API version path segment (`/api/{version}/...`).
pub const DEFAULT_API_VERSION: &str = "v1";

/// Default HTTP port.
pub const DEFAULT_API_PORT: u16 = 8080;

/// Default pool size.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Errors raised while validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required setting {0}")]
    Missing(&'static str),

    #[error("invalid setting {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}

/// Connection settings for the relational store.
#[derive(Debug)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: SecretString,
    pub name: String,
    pub max_connections: u32,
}

impl DatabaseConfig {
    /// Reject blank values for settings the store cannot work without.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.host.trim().is_empty() {
            return Err(ConfigError::Missing("DB_HOST"));
        }
        if self.user.trim().is_empty() {
            return Err(ConfigError::Missing("DB_USER"));
        }
        if self.password.expose_secret().is_empty() {
            return Err(ConfigError::Missing("DB_PASSWORD"));
        }
        if self.name.trim().is_empty() {
            return Err(ConfigError::Missing("DB_NAME"));
        }
        if self.max_connections == 0 {
            return Err(ConfigError::Invalid {
                name: "DB_MAX_CONNECTIONS",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

/// HTTP surface settings.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub version: String,
    pub host: String,
    pub port: u16,
}

impl ApiConfig {
    /// Path prefix every route is nested under, e.g. `/api/v1`.
    pub fn prefix(&self) -> String {
        format!("/api/{}", self.version.trim_matches('/'))
    }

    /// Socket address string to bind, e.g. `0.0.0.0:8080`.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let version = self.version.trim_matches('/');
        if version.is_empty() {
            return Err(ConfigError::Missing("API_VERSION"));
        }
        if version.contains('/') {
            return Err(ConfigError::Invalid {
                name: "API_VERSION",
                reason: format!("'{}' must be a single path segment", self.version),
            });
        }
        Ok(())
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            version: DEFAULT_API_VERSION.to_string(),
            host: "0.0.0.0".to_string(),
            port: DEFAULT_API_PORT,
        }
    }
}
