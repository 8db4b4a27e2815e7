//! Administrative routes
//!
//! Handlers require the `ADMIN` role. Admins operate on the full
//! ticket set (`TicketScope::All`), manage account roles and assign
//! tickets to agents.

pub mod agents;
pub mod stats;
pub mod tickets;
pub mod users;
