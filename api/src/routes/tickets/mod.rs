//! Reporter-facing ticket routes
//!
//! Every handler authorizes the caller and then works inside the
//! `CreatedBy` scope, so accounts only ever see their own tickets. A
//! ticket outside the caller's scope answers 404, the same as an
//! unknown id.

pub mod comments;
pub mod create_ticket;
pub mod list_tickets;
pub mod ticket_detail;
pub mod ticket_stats;
