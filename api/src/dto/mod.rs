pub mod auth;
pub mod error;
pub mod ticket;
pub mod user;
