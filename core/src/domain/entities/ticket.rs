//! Ticket and comment entities for the helpdesk workflow.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Workflow state of a ticket
///
/// The status is a flat enum: any status can be set from any other, there
/// is no enforced transition graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketStatus {
    /// Newly filed, nobody working on it yet
    Open,
    /// An agent is actively working the ticket
    InProgress,
    /// Work is done, awaiting confirmation or archival
    Resolved,
    /// Ticket is closed
    Closed,
}

impl TicketStatus {
    /// Canonical string form, as stored in the database
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketStatus::Open => "OPEN",
            TicketStatus::InProgress => "IN_PROGRESS",
            TicketStatus::Resolved => "RESOLVED",
            TicketStatus::Closed => "CLOSED",
        }
    }
}

impl std::fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TicketStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "OPEN" => Ok(TicketStatus::Open),
            "IN_PROGRESS" => Ok(TicketStatus::InProgress),
            "RESOLVED" => Ok(TicketStatus::Resolved),
            "CLOSED" => Ok(TicketStatus::Closed),
            _ => Err(format!("Invalid ticket status: {}", s)),
        }
    }
}

/// Urgency of a ticket, set by the reporter at creation time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketPriority {
    Low,
    Medium,
    High,
    Urgent,
}

impl TicketPriority {
    /// Canonical string form, as stored in the database
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketPriority::Low => "LOW",
            TicketPriority::Medium => "MEDIUM",
            TicketPriority::High => "HIGH",
            TicketPriority::Urgent => "URGENT",
        }
    }
}

impl std::fmt::Display for TicketPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TicketPriority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LOW" => Ok(TicketPriority::Low),
            "MEDIUM" => Ok(TicketPriority::Medium),
            "HIGH" => Ok(TicketPriority::High),
            "URGENT" => Ok(TicketPriority::Urgent),
            _ => Err(format!("Invalid ticket priority: {}", s)),
        }
    }
}

/// Ticket entity representing a support request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    /// Unique identifier for the ticket
    pub id: Uuid,

    /// Short summary shown in ticket lists
    pub title: String,

    /// Full problem description
    pub description: String,

    /// Current workflow state
    pub status: TicketStatus,

    /// Urgency set by the reporter
    pub priority: TicketPriority,

    /// User who filed the ticket
    pub created_by: Uuid,

    /// Agent currently assigned, if any
    pub assigned_to: Option<Uuid>,

    /// Timestamp when the ticket was filed
    pub created_at: DateTime<Utc>,

    /// Timestamp when the ticket was last updated
    pub updated_at: DateTime<Utc>,
}

impl Ticket {
    /// Creates a new open, unassigned ticket
    pub fn new(
        title: String,
        description: String,
        priority: TicketPriority,
        created_by: Uuid,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title,
            description,
            status: TicketStatus::Open,
            priority,
            created_by,
            assigned_to: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Assigns the ticket to an agent, or unassigns it.
    ///
    /// Assignment moves the ticket to `InProgress`; removing the assignee
    /// returns it to `Open`.
    pub fn assign(&mut self, agent_id: Option<Uuid>) {
        self.status = match agent_id {
            Some(_) => TicketStatus::InProgress,
            None => TicketStatus::Open,
        };
        self.assigned_to = agent_id;
        self.updated_at = Utc::now();
    }

    /// Sets the workflow state
    pub fn set_status(&mut self, status: TicketStatus) {
        self.status = status;
        self.updated_at = Utc::now();
    }

    /// Checks if the ticket is assigned to the given agent
    pub fn is_assigned_to(&self, agent_id: Uuid) -> bool {
        self.assigned_to == Some(agent_id)
    }

    /// Checks if the ticket was filed by the given user
    pub fn is_created_by(&self, user_id: Uuid) -> bool {
        self.created_by == user_id
    }
}

/// Comment entity attached to a ticket
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// Unique identifier for the comment
    pub id: Uuid,

    /// Ticket this comment belongs to
    pub ticket_id: Uuid,

    /// User who wrote the comment
    pub author_id: Uuid,

    /// Comment text
    pub content: String,

    /// Timestamp when the comment was written
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Creates a new comment on a ticket
    pub fn new(ticket_id: Uuid, author_id: Uuid, content: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            ticket_id,
            author_id,
            content,
            created_at: Utc::now(),
        }
    }
}
