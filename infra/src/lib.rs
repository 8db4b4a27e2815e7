//! # Infrastructure Layer
//!
//! Concrete implementations for external concerns of the QuickDesk
//! backend. Currently this means MySQL persistence: the connection
//! pool and the SQLx-backed repository implementations for users,
//! tickets and comments.

pub mod database;

pub use database::{DatabasePool, MySqlTicketRepository, MySqlUserRepository, PoolStatistics};

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
