//! Authentication response value object for API responses.

use serde::{Deserialize, Serialize};

use super::user_profile::UserProfile;

/// Authentication response returned after a successful login
///
/// Contains the signed session token and the profile of the account it
/// belongs to, so clients can render the logged-in state without a
/// second request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthResponse {
    /// Signed session token for API authentication
    pub token: String,

    /// Session lifetime in seconds
    pub expires_in: i64,

    /// Profile of the authenticated user
    pub user: UserProfile,
}

impl AuthResponse {
    /// Creates a new authentication response
    ///
    /// # Arguments
    ///
    /// * `token` - Signed session token
    /// * `expires_in` - Session lifetime in seconds
    /// * `user` - Profile of the authenticated user
    pub fn new(token: String, expires_in: i64, user: UserProfile) -> Self {
        Self {
            token,
            expires_in,
            user,
        }
    }
}
