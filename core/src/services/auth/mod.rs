//! Authentication service module
//!
//! This module provides the account security core:
//! - User registration with bcrypt password hashing
//! - Login with unified credential errors
//! - Session verification and role-based authorization

mod config;
mod password;
mod service;

#[cfg(test)]
mod tests;

pub use config::AuthServiceConfig;
pub use password::{hash_password, verify_password};
pub use service::AuthService;
