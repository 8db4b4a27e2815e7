//! Enriched ticket projections for API responses.
//!
//! Tickets store bare user ids; these views carry the referenced users'
//! names alongside, so list and detail screens render without extra
//! lookups.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use chrono::{DateTime, Utc};

use crate::domain::entities::ticket::{Comment, Ticket};
use crate::domain::value_objects::user_profile::UserBrief;

/// Ticket with its reporter and assignee resolved to user briefs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketSummary {
    /// The ticket itself
    pub ticket: Ticket,

    /// User who filed the ticket
    pub created_by: UserBrief,

    /// Agent currently assigned, if any
    pub assigned_to: Option<UserBrief>,
}

impl TicketSummary {
    /// Creates a new ticket summary
    pub fn new(ticket: Ticket, created_by: UserBrief, assigned_to: Option<UserBrief>) -> Self {
        Self {
            ticket,
            created_by,
            assigned_to,
        }
    }
}

/// Comment with its author resolved to a user brief
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentView {
    /// Unique identifier for the comment
    pub id: Uuid,

    /// Comment text
    pub content: String,

    /// User who wrote the comment
    pub author: UserBrief,

    /// Timestamp when the comment was written
    pub created_at: DateTime<Utc>,
}

impl CommentView {
    /// Creates a comment view from a comment and its resolved author
    pub fn new(comment: Comment, author: UserBrief) -> Self {
        Self {
            id: comment.id,
            content: comment.content,
            author,
            created_at: comment.created_at,
        }
    }
}

/// Full ticket view including the comment thread
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketDetail {
    /// The ticket itself
    pub ticket: Ticket,

    /// User who filed the ticket
    pub created_by: UserBrief,

    /// Agent currently assigned, if any
    pub assigned_to: Option<UserBrief>,

    /// Comment thread in chronological order
    pub comments: Vec<CommentView>,
}

impl TicketDetail {
    /// Creates a new ticket detail view
    pub fn new(
        ticket: Ticket,
        created_by: UserBrief,
        assigned_to: Option<UserBrief>,
        comments: Vec<CommentView>,
    ) -> Self {
        Self {
            ticket,
            created_by,
            assigned_to,
            comments,
        }
    }
}
