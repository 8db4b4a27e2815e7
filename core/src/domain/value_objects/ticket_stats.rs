//! Dashboard statistics value objects.

use serde::{Deserialize, Serialize};

use super::ticket_views::TicketSummary;

/// Status breakdown for a single user's or agent's ticket queue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueStats {
    /// Total number of tickets in the queue
    pub total: u64,

    /// Tickets in `OPEN` state
    pub open: u64,

    /// Tickets in `IN_PROGRESS` state
    pub in_progress: u64,

    /// Tickets in `RESOLVED` state
    pub resolved: u64,

    /// Most recently filed tickets, newest first
    pub recent: Vec<TicketSummary>,
}

/// System-wide ticket statistics for the admin dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalStats {
    /// Total number of tickets in the system
    pub total: u64,

    /// Tickets in `OPEN` state
    pub open: u64,

    /// Tickets in `IN_PROGRESS` state
    pub in_progress: u64,

    /// Tickets in `RESOLVED` state
    pub resolved: u64,

    /// Tickets in `CLOSED` state
    pub closed: u64,

    /// Tickets with `URGENT` priority, regardless of state
    pub urgent: u64,

    /// Most recently filed tickets, newest first
    pub recent: Vec<TicketSummary>,
}
