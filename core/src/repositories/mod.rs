//! Repository interfaces for data persistence.
//!
//! Traits in this module define the contract between the domain layer and
//! storage. Concrete implementations live in the infrastructure crate;
//! in-memory mocks for testing live alongside each trait.

pub mod ticket;
pub mod user;

pub use ticket::{MockTicketRepository, TicketRepository, TicketScope};
pub use user::{MockUserRepository, UserRepository};
