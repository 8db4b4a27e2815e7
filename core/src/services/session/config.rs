//! Configuration for the session service

use crate::domain::entities::session::SESSION_TTL_HOURS;

/// Configuration for the session service
#[derive(Debug, Clone)]
pub struct SessionServiceConfig {
    /// JWT signing secret
    pub jwt_secret: String,
    /// Session token lifetime in hours
    pub token_ttl_hours: i64,
}

impl SessionServiceConfig {
    /// Create a config with the given secret and the default lifetime
    pub fn new(jwt_secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            token_ttl_hours: SESSION_TTL_HOURS,
        }
    }
}

impl Default for SessionServiceConfig {
    fn default() -> Self {
        Self {
            jwt_secret: "development-secret-please-change-in-production".to_string(),
            token_ttl_hours: SESSION_TTL_HOURS,
        }
    }
}
