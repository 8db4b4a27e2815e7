use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request body for POST /api/v1/auth/register
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Login email address
    #[validate(email)]
    pub email: String,

    /// Display name shown on tickets and comments
    #[validate(length(min = 1, max = 100))]
    pub name: String,

    /// Plaintext password, 8 to 72 characters (bcrypt input limit)
    #[validate(length(min = 8, max = 72))]
    pub password: String,
}

/// Request body for POST /api/v1/auth/login
///
/// Only presence is validated here; anything the account lookup does
/// not match comes back as the same invalid-credentials error.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1))]
    pub email: String,

    #[validate(length(min = 1))]
    pub password: String,
}
