use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use qd_core::domain::entities::ticket::{TicketPriority, TicketStatus};

/// Request body for POST /api/v1/tickets
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateTicketRequest {
    /// Short summary of the problem
    #[validate(length(min = 1, max = 150))]
    pub title: String,

    /// Full problem description
    #[validate(length(min = 1, max = 5000))]
    pub description: String,

    /// Urgency chosen by the reporter
    pub priority: TicketPriority,
}

/// Request body for status updates on the agent and admin surfaces
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: TicketStatus,
}

/// Request body for POST /api/v1/admin/tickets/{id}/assign
///
/// A null `agent_id` clears the assignment and reopens the ticket.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignTicketRequest {
    pub agent_id: Option<Uuid>,
}

/// Request body for adding a comment to a ticket thread
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AddCommentRequest {
    #[validate(length(min = 1, max = 2000))]
    pub content: String,
}
