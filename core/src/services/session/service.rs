//! Main session service implementation

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::domain::entities::session::Claims;
use crate::errors::{DomainError, SessionError};

use super::config::SessionServiceConfig;

/// Service for signing and verifying session tokens
///
/// Tokens are HS256-signed JWTs carrying only `sub`, `iat` and `exp`.
/// Verification is deliberately opaque: every failure mode (malformed
/// token, wrong signature, expired session) surfaces as the same
/// [`SessionError::InvalidToken`].
pub struct SessionService {
    config: SessionServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl SessionService {
    /// Creates a new session service instance
    ///
    /// # Arguments
    ///
    /// * `config` - Session service configuration holding the signing secret
    pub fn new(config: SessionServiceConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        // No clock leeway: a token whose exp has passed is rejected, not
        // waved through for another minute.
        validation.leeway = 0;

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Signs a new session token for a user
    ///
    /// # Arguments
    ///
    /// * `user_id` - The user's UUID
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The signed session token
    /// * `Err(DomainError)` - Token generation failed
    pub fn issue_session(&self, user_id: Uuid) -> Result<String, DomainError> {
        let claims = Claims::new(user_id, self.config.token_ttl_hours);
        self.encode_jwt(&claims)
    }

    /// Verifies a session token and returns the user it identifies
    ///
    /// # Arguments
    ///
    /// * `token` - The JWT session token to verify
    ///
    /// # Returns
    ///
    /// * `Ok(Uuid)` - The authenticated user's id
    /// * `Err(DomainError)` - Token is malformed, tampered with, or expired
    pub fn authenticate(&self, token: &str) -> Result<Uuid, DomainError> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|_| DomainError::Session(SessionError::InvalidToken))?;

        token_data
            .claims
            .user_id()
            .map_err(|_| DomainError::Session(SessionError::InvalidToken))
    }

    /// Session lifetime in seconds, for client-facing expiry hints
    pub fn token_ttl_seconds(&self) -> i64 {
        self.config.token_ttl_hours * 3600
    }

    /// Encodes claims into a JWT
    pub(crate) fn encode_jwt(&self, claims: &Claims) -> Result<String, DomainError> {
        let header = Header::new(Algorithm::HS256);
        encode(&header, claims, &self.encoding_key)
            .map_err(|_| DomainError::Session(SessionError::TokenGenerationFailed))
    }
}
