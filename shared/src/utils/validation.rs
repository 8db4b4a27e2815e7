//! Common validation utilities

use once_cell::sync::Lazy;
use regex::Regex;

/// Minimum accepted password length
pub const PASSWORD_MIN_LENGTH: usize = 8;

/// Maximum accepted password length. bcrypt only reads the first 72 bytes
/// of input, so longer passwords would be silently truncated.
pub const PASSWORD_MAX_LENGTH: usize = 72;

// Pragmatic email shape check: one @, no whitespace, a dot in the domain.
// Full RFC 5322 parsing is not worth it; the address is only used as a
// login identifier.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap()
});

/// Trim surrounding whitespace from an email address.
///
/// Case is preserved: addresses are stored and looked up exactly as
/// entered, so the same trimming must run on both paths.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_string()
}

/// Check if an email address has a plausible shape
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    email.len() >= 5 && email.len() <= 254 && EMAIL_REGEX.is_match(email)
}

/// Check if a password length is within the accepted bounds
pub fn is_valid_password_length(password: &str) -> bool {
    let len = password.len();
    (PASSWORD_MIN_LENGTH..=PASSWORD_MAX_LENGTH).contains(&len)
}

/// Check if a string is not empty after trimming
pub fn not_empty(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Check if a string length is within bounds
pub fn length_between(value: &str, min: usize, max: usize) -> bool {
    let len = value.len();
    len >= min && len <= max
}
