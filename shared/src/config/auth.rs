//! Token signing and password hashing configuration

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Default bcrypt work factor. Each increment doubles hashing time.
pub const DEFAULT_BCRYPT_COST: u32 = 12;

/// Default session token lifetime in hours
pub const DEFAULT_TOKEN_TTL_HOURS: i64 = 24;

/// JWT signing configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Secret key for HMAC token signing
    pub secret: String,

    /// Session token lifetime in hours
    pub token_ttl_hours: i64,
}

impl JwtConfig {
    /// Create a new JWT configuration with the given secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            token_ttl_hours: DEFAULT_TOKEN_TTL_HOURS,
        }
    }

    /// Set the token lifetime in hours
    pub fn with_ttl_hours(mut self, hours: i64) -> Self {
        self.token_ttl_hours = hours;
        self
    }
}

/// Complete security configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SecurityConfig {
    /// JWT configuration
    pub jwt: JwtConfig,

    /// bcrypt work factor for password hashing
    pub bcrypt_cost: u32,
}

impl SecurityConfig {
    /// Load from environment variables.
    ///
    /// `JWT_SECRET` is required and has no default: a server signing
    /// sessions with a known fallback secret would accept forged tokens.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingVar`] if `JWT_SECRET` is not set.
    pub fn from_env() -> Result<Self, ConfigError> {
        let secret = std::env::var("JWT_SECRET")
            .map_err(|_| ConfigError::MissingVar { name: "JWT_SECRET" })?;
        let token_ttl_hours = std::env::var("JWT_TOKEN_TTL_HOURS")
            .unwrap_or_else(|_| DEFAULT_TOKEN_TTL_HOURS.to_string())
            .parse()
            .unwrap_or(DEFAULT_TOKEN_TTL_HOURS);
        let bcrypt_cost = std::env::var("BCRYPT_COST")
            .unwrap_or_else(|_| DEFAULT_BCRYPT_COST.to_string())
            .parse()
            .unwrap_or(DEFAULT_BCRYPT_COST);

        Ok(Self {
            jwt: JwtConfig {
                secret,
                token_ttl_hours,
            },
            bcrypt_cost,
        })
    }
}
