//! Configuration for the authentication service

/// Default bcrypt work factor
const DEFAULT_BCRYPT_COST: u32 = 12;

/// Configuration for the authentication service
#[derive(Debug, Clone)]
pub struct AuthServiceConfig {
    /// bcrypt work factor used when hashing new passwords.
    /// Verification reads the factor from the stored hash, so existing
    /// accounts keep working when this changes.
    pub bcrypt_cost: u32,
}

impl Default for AuthServiceConfig {
    fn default() -> Self {
        Self {
            bcrypt_cost: DEFAULT_BCRYPT_COST,
        }
    }
}

impl AuthServiceConfig {
    /// Create a config with an explicit bcrypt work factor
    pub fn with_bcrypt_cost(cost: u32) -> Self {
        Self { bcrypt_cost: cost }
    }
}
