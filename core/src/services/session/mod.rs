//! Session service module for JWT management
//!
//! This module handles session token operations:
//! - Signing session tokens for authenticated users
//! - Verifying presented tokens and extracting the user identity

mod config;
mod service;

#[cfg(test)]
mod tests;

pub use config::SessionServiceConfig;
pub use service::SessionService;
