//! Type definitions module
//!
//! This module organizes types into logical categories:
//! - `response` - API response wrappers

pub mod response;

// Re-export commonly used types at module level
pub use response::ApiResponse;
