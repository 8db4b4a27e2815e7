//! Main authentication service implementation

use std::sync::Arc;

use uuid::Uuid;

use qd_shared::validation;

use crate::domain::entities::user::{Role, User};
use crate::domain::value_objects::{AuthResponse, UserProfile};
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::UserRepository;
use crate::services::session::SessionService;

use super::config::AuthServiceConfig;
use super::password::{hash_password, verify_password};

/// Authentication service for registration, login and access control
pub struct AuthService<U: UserRepository> {
    /// User repository for database operations
    user_repository: Arc<U>,
    /// Session service for token signing and verification
    session_service: Arc<SessionService>,
    /// Service configuration
    config: AuthServiceConfig,
}

impl<U: UserRepository> AuthService<U> {
    /// Create a new authentication service
    ///
    /// # Arguments
    ///
    /// * `user_repository` - Repository for user data persistence
    /// * `session_service` - Service for session token management
    /// * `config` - Service configuration
    pub fn new(
        user_repository: Arc<U>,
        session_service: Arc<SessionService>,
        config: AuthServiceConfig,
    ) -> Self {
        Self {
            user_repository,
            session_service,
            config,
        }
    }

    /// Register a new user account
    ///
    /// This method:
    /// 1. Validates email shape, display name and password length
    /// 2. Rejects emails that already have an account
    /// 3. Hashes the password with bcrypt on a blocking worker thread
    /// 4. Persists the new account with the default `User` role
    ///
    /// Registration does not log the user in; no session token is issued.
    ///
    /// # Arguments
    ///
    /// * `email` - Login email address
    /// * `name` - Display name
    /// * `password` - Plaintext password, never stored
    ///
    /// # Returns
    ///
    /// * `Ok(UserProfile)` - Profile of the newly created account
    /// * `Err(DomainError)` - Validation failed or the email is taken
    pub async fn register(
        &self,
        email: &str,
        name: &str,
        password: &str,
    ) -> DomainResult<UserProfile> {
        // Step 1: Validate inputs
        let email = validation::normalize_email(email);
        if !validation::is_valid_email(&email) {
            return Err(DomainError::Validation {
                message: "Invalid email address".to_string(),
            });
        }
        if !validation::not_empty(name) || !validation::length_between(name, 1, 100) {
            return Err(DomainError::Validation {
                message: "Name must be between 1 and 100 characters".to_string(),
            });
        }
        if !validation::is_valid_password_length(password) {
            return Err(DomainError::Validation {
                message: format!(
                    "Password must be between {} and {} characters",
                    validation::PASSWORD_MIN_LENGTH,
                    validation::PASSWORD_MAX_LENGTH
                ),
            });
        }

        // Step 2: Reject duplicate registrations
        if self.user_repository.exists_by_email(&email).await? {
            return Err(DomainError::Auth(AuthError::UserAlreadyExists));
        }

        // Step 3: Hash the password off the async executor
        let password_hash = self.hash_password_blocking(password).await?;

        // Step 4: Persist the account
        let user = User::new(email, name.trim().to_string(), password_hash);
        let user = self.user_repository.create(user).await?;

        tracing::info!(
            user_id = %user.id,
            event = "user_registered",
            "New user account registered"
        );

        Ok(UserProfile::from(&user))
    }

    /// Authenticate a user by email and password
    ///
    /// This method:
    /// 1. Looks up the account by email
    /// 2. Verifies the password against the stored bcrypt hash
    /// 3. Signs a session token for the account
    ///
    /// Unknown email and wrong password both produce
    /// [`AuthError::InvalidCredentials`], so responses do not reveal which
    /// addresses have accounts.
    ///
    /// # Arguments
    ///
    /// * `email` - Login email address
    /// * `password` - Plaintext password to check
    ///
    /// # Returns
    ///
    /// * `Ok(AuthResponse)` - Session token and the user's profile
    /// * `Err(DomainError)` - Credentials did not match any account
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<AuthResponse> {
        // Step 1: Look up the account
        let email = validation::normalize_email(email);
        let user = match self.user_repository.find_by_email(&email).await? {
            Some(user) => user,
            None => {
                tracing::warn!(event = "login_failed", "Login attempt for unknown email");
                return Err(DomainError::Auth(AuthError::InvalidCredentials));
            }
        };

        // Step 2: Verify the password off the async executor
        let verified = self
            .verify_password_blocking(password, &user.password_hash)
            .await?;
        if !verified {
            tracing::warn!(
                user_id = %user.id,
                event = "login_failed",
                "Login attempt with wrong password"
            );
            return Err(DomainError::Auth(AuthError::InvalidCredentials));
        }

        // Step 3: Sign a session token
        let token = self.session_service.issue_session(user.id)?;

        tracing::info!(user_id = %user.id, event = "user_login", "User logged in");

        Ok(AuthResponse::new(
            token,
            self.session_service.token_ttl_seconds(),
            UserProfile::from(&user),
        ))
    }

    /// Verify a session token and return the user id it identifies
    ///
    /// # Returns
    ///
    /// * `Ok(Uuid)` - The authenticated user's id
    /// * `Err(DomainError)` - Token is malformed, tampered with, or expired
    pub fn authenticate(&self, token: &str) -> DomainResult<Uuid> {
        self.session_service.authenticate(token)
    }

    /// Check that a user currently holds one of the allowed roles
    ///
    /// The role is read from storage on every call rather than from the
    /// session token, so role changes apply to requests immediately. A
    /// user id with no matching account is treated as lacking permission.
    ///
    /// # Arguments
    ///
    /// * `user_id` - The authenticated user's id
    /// * `allowed_roles` - Roles that may perform the operation
    ///
    /// # Returns
    ///
    /// * `Ok(User)` - The current account, for handlers that need it
    /// * `Err(DomainError)` - The account is missing or holds no allowed role
    pub async fn authorize(&self, user_id: Uuid, allowed_roles: &[Role]) -> DomainResult<User> {
        let user = self
            .user_repository
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::Auth(AuthError::InsufficientPermissions))?;

        if !user.has_any_role(allowed_roles) {
            tracing::warn!(
                user_id = %user.id,
                role = %user.role,
                event = "authorization_denied",
                "User lacks required role"
            );
            return Err(DomainError::Auth(AuthError::InsufficientPermissions));
        }

        Ok(user)
    }

    /// Authenticate a token, then check the user's current role
    ///
    /// The two stages are strictly ordered: a request with a bad token
    /// fails authentication before any role is considered, so an expired
    /// session on an admin route reports the session failure rather than
    /// a permissions failure.
    ///
    /// # Arguments
    ///
    /// * `token` - The session token presented by the caller
    /// * `allowed_roles` - Roles that may perform the operation
    ///
    /// # Returns
    ///
    /// * `Ok(User)` - The authenticated, authorized account
    /// * `Err(DomainError)` - Session invalid, or role not allowed
    pub async fn require_role(&self, token: &str, allowed_roles: &[Role]) -> DomainResult<User> {
        // Stage 1: authentication
        let user_id = self.authenticate(token)?;

        // Stage 2: authorization against the stored role
        self.authorize(user_id, allowed_roles).await
    }

    /// Hash a password on a blocking worker thread
    async fn hash_password_blocking(&self, password: &str) -> DomainResult<String> {
        let password = password.to_string();
        let cost = self.config.bcrypt_cost;
        tokio::task::spawn_blocking(move || hash_password(&password, cost))
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Password hashing task failed: {}", e),
            })?
    }

    /// Verify a password on a blocking worker thread
    async fn verify_password_blocking(&self, password: &str, hash: &str) -> DomainResult<bool> {
        let password = password.to_string();
        let hash = hash.to_string();
        tokio::task::spawn_blocking(move || verify_password(&password, &hash))
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Password verification task failed: {}", e),
            })
    }
}
