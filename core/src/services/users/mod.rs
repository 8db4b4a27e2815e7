//! User management service module
//!
//! Administrative operations over user accounts:
//! - Listing all accounts and all agents
//! - Changing an account's role

mod service;

#[cfg(test)]
mod tests;

pub use service::UserService;
