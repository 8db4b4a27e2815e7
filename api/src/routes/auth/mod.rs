//! Authentication route handlers
//!
//! Public endpoints: account registration and email/password login.
//! Everything else in the API sits behind the session middleware.

pub mod login;
pub mod register;
