//! Ticket repository trait defining the interface for ticket persistence.
//!
//! Every query takes a [`TicketScope`] so the same interface serves the
//! three dashboards: a user sees tickets they filed, an agent sees tickets
//! assigned to them, and an admin sees everything. Access control picks
//! the scope; the repository only filters by it.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::ticket::{Comment, Ticket, TicketPriority, TicketStatus};
use crate::errors::DomainError;

/// Visibility window for ticket queries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicketScope {
    /// Every ticket in the system
    All,
    /// Tickets filed by the given user
    CreatedBy(Uuid),
    /// Tickets currently assigned to the given agent
    AssignedTo(Uuid),
}

impl TicketScope {
    /// Check whether a ticket falls inside this scope
    pub fn contains(&self, ticket: &Ticket) -> bool {
        match self {
            TicketScope::All => true,
            TicketScope::CreatedBy(user_id) => ticket.created_by == *user_id,
            TicketScope::AssignedTo(agent_id) => ticket.assigned_to == Some(*agent_id),
        }
    }
}

/// Repository trait for Ticket entity persistence operations
#[async_trait]
pub trait TicketRepository: Send + Sync {
    /// Create a new ticket in the repository
    ///
    /// # Arguments
    /// * `ticket` - The Ticket entity to persist
    ///
    /// # Returns
    /// * `Ok(Ticket)` - The created ticket
    /// * `Err(DomainError)` - Creation failed
    async fn create(&self, ticket: Ticket) -> Result<Ticket, DomainError>;

    /// Find a ticket by its unique identifier
    ///
    /// # Returns
    /// * `Ok(Some(Ticket))` - Ticket found
    /// * `Ok(None)` - No ticket found with given ID
    /// * `Err(DomainError)` - Database or other error occurred
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Ticket>, DomainError>;

    /// Update an existing ticket in the repository
    ///
    /// # Returns
    /// * `Ok(Ticket)` - The updated ticket
    /// * `Err(DomainError::NotFound)` - No ticket with this id exists
    async fn update(&self, ticket: Ticket) -> Result<Ticket, DomainError>;

    /// List tickets in the given scope, newest first
    ///
    /// # Example
    /// ```no_run
    /// # use uuid::Uuid;
    /// # use qd_core::repositories::{TicketRepository, TicketScope};
    /// # async fn example(repo: &impl TicketRepository) -> Result<(), Box<dyn std::error::Error>> {
    /// let agent_id = Uuid::parse_str("550e8400-e29b-41d4-a716-446655440000")?;
    /// let queue = repo.list(TicketScope::AssignedTo(agent_id)).await?;
    /// println!("{} tickets in queue", queue.len());
    /// # Ok(())
    /// # }
    /// ```
    async fn list(&self, scope: TicketScope) -> Result<Vec<Ticket>, DomainError>;

    /// List the most recently filed tickets in the given scope, newest first
    ///
    /// # Arguments
    /// * `scope` - Visibility window to query
    /// * `limit` - Maximum number of tickets to return
    async fn recent(&self, scope: TicketScope, limit: u32) -> Result<Vec<Ticket>, DomainError>;

    /// Count tickets in the given scope, optionally filtered by status
    ///
    /// # Arguments
    /// * `scope` - Visibility window to query
    /// * `status` - Count only tickets in this state (None counts all)
    async fn count(
        &self,
        scope: TicketScope,
        status: Option<TicketStatus>,
    ) -> Result<u64, DomainError>;

    /// Count tickets in the given scope with the given priority
    async fn count_by_priority(
        &self,
        scope: TicketScope,
        priority: TicketPriority,
    ) -> Result<u64, DomainError>;

    /// Attach a comment to a ticket
    ///
    /// # Returns
    /// * `Ok(Comment)` - The created comment
    /// * `Err(DomainError)` - Creation failed
    async fn add_comment(&self, comment: Comment) -> Result<Comment, DomainError>;

    /// List a ticket's comments in chronological order, oldest first
    async fn list_comments(&self, ticket_id: Uuid) -> Result<Vec<Comment>, DomainError>;
}
