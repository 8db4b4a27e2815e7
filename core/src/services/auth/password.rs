//! Password hashing built on bcrypt.
//!
//! bcrypt embeds a random salt and the work factor in the hash string, so
//! hashing the same password twice yields different hashes and
//! verification needs no stored parameters beyond the hash itself.

use crate::errors::DomainError;

/// Hash a password with the given bcrypt work factor
///
/// # Arguments
///
/// * `password` - The plaintext password
/// * `cost` - bcrypt work factor (4..=31)
///
/// # Returns
///
/// * `Ok(String)` - The bcrypt hash in `$2b$...` format
/// * `Err(DomainError)` - Hashing failed
pub fn hash_password(password: &str, cost: u32) -> Result<String, DomainError> {
    bcrypt::hash(password, cost).map_err(|e| DomainError::Internal {
        message: format!("Password hashing failed: {}", e),
    })
}

/// Verify a password against a stored bcrypt hash
///
/// Never fails: a malformed or truncated hash verifies as `false`, the
/// same as a wrong password.
pub fn verify_password(password: &str, hash: &str) -> bool {
    bcrypt::verify(password, hash).unwrap_or(false)
}
