//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical business areas:
//! - `auth` - Token signing and password hashing configuration
//! - `database` - Database connection and pool configuration
//! - `environment` - Environment detection
//! - `server` - HTTP server configuration
//!
//! Configuration is loaded from environment variables. Most settings fall
//! back to development defaults; secrets do not. A missing `JWT_SECRET`
//! makes [`AppConfig::from_env`] fail so the server refuses to boot rather
//! than sign tokens with a guessable key.

pub mod auth;
pub mod database;
pub mod environment;
pub mod server;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// Re-export commonly used types
pub use auth::{JwtConfig, SecurityConfig};
pub use database::DatabaseConfig;
pub use environment::Environment;
pub use server::ServerConfig;

/// Errors raised while loading configuration from the environment
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is not set
    #[error("required environment variable {name} is not set")]
    MissingVar { name: &'static str },

    /// An environment variable is set but cannot be parsed
    #[error("environment variable {name} has invalid value: {reason}")]
    InvalidVar { name: &'static str, reason: String },
}

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Token signing and password hashing configuration
    pub security: SecurityConfig,
}

impl AppConfig {
    /// Load the complete configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingVar`] if `JWT_SECRET` is absent. The
    /// caller is expected to treat this as fatal and abort startup.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            environment: Environment::from_env(),
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            security: SecurityConfig::from_env()?,
        })
    }
}
