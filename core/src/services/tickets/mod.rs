//! Ticket service module for the helpdesk workflow
//!
//! This module covers the full ticket lifecycle:
//! - Filing new tickets
//! - Scoped listing, detail and status updates
//! - Assignment to agents
//! - Comment threads
//! - Dashboard statistics

mod service;

#[cfg(test)]
mod tests;

pub use service::TicketService;
