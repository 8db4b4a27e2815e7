//! Domain-specific error types for authentication and session handling
//!
//! This module provides error type definitions for credential and session
//! failures. HTTP status mapping happens in the presentation layer.

use thiserror::Error;

/// Authentication and authorization errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    /// Login failed. Covers both unknown email and wrong password so the
    /// response does not reveal which addresses have accounts.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Registration attempted with an email that already has an account
    #[error("User already exists")]
    UserAlreadyExists,

    /// Authenticated caller does not hold any of the required roles
    #[error("Insufficient permissions")]
    InsufficientPermissions,
}

/// Session token errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SessionError {
    /// Token is malformed, carries a bad signature, or has expired.
    /// One variant for all three: callers must not be able to probe
    /// which check failed.
    #[error("Invalid or expired token")]
    InvalidToken,

    /// Signing a new token failed
    #[error("Token generation failed")]
    TokenGenerationFailed,
}
