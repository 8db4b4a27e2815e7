//! Main ticket service implementation

use std::collections::HashMap;
use std::sync::Arc;

use uuid::Uuid;

use qd_shared::validation;

use crate::domain::entities::ticket::{Comment, Ticket, TicketPriority, TicketStatus};
use crate::domain::entities::user::{Role, User};
use crate::domain::value_objects::{
    CommentView, GlobalStats, QueueStats, TicketDetail, TicketSummary, UserBrief,
};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::{TicketRepository, TicketScope, UserRepository};

/// Number of tickets shown in dashboard "recent" panels
const RECENT_TICKETS_LIMIT: u32 = 5;

/// Maximum ticket title length
const TITLE_MAX_LENGTH: usize = 150;

/// Maximum ticket description length
const DESCRIPTION_MAX_LENGTH: usize = 5000;

/// Maximum comment length
const COMMENT_MAX_LENGTH: usize = 2000;

/// Service for the ticket lifecycle: filing, triage, comments and stats
///
/// Every read takes a [`TicketScope`] chosen by the caller's role. A
/// ticket outside the scope is reported as not found rather than
/// forbidden, so callers cannot probe which ticket ids exist.
pub struct TicketService<T: TicketRepository, U: UserRepository> {
    /// Ticket repository for database operations
    ticket_repository: Arc<T>,
    /// User repository, used to resolve reporter and assignee names
    user_repository: Arc<U>,
}

impl<T: TicketRepository, U: UserRepository> TicketService<T, U> {
    /// Create a new ticket service
    ///
    /// # Arguments
    ///
    /// * `ticket_repository` - Repository for ticket persistence
    /// * `user_repository` - Repository for resolving referenced users
    pub fn new(ticket_repository: Arc<T>, user_repository: Arc<U>) -> Self {
        Self {
            ticket_repository,
            user_repository,
        }
    }

    /// File a new ticket
    ///
    /// New tickets start `OPEN` and unassigned.
    ///
    /// # Arguments
    ///
    /// * `creator` - The authenticated account filing the ticket
    /// * `title` - Short summary
    /// * `description` - Full problem description
    /// * `priority` - Urgency chosen by the reporter
    pub async fn create_ticket(
        &self,
        creator: &User,
        title: &str,
        description: &str,
        priority: TicketPriority,
    ) -> DomainResult<TicketSummary> {
        if !validation::not_empty(title) || !validation::length_between(title, 1, TITLE_MAX_LENGTH)
        {
            return Err(DomainError::Validation {
                message: format!("Title must be between 1 and {} characters", TITLE_MAX_LENGTH),
            });
        }
        if !validation::not_empty(description)
            || !validation::length_between(description, 1, DESCRIPTION_MAX_LENGTH)
        {
            return Err(DomainError::Validation {
                message: format!(
                    "Description must be between 1 and {} characters",
                    DESCRIPTION_MAX_LENGTH
                ),
            });
        }

        let ticket = Ticket::new(
            title.trim().to_string(),
            description.to_string(),
            priority,
            creator.id,
        );
        let ticket = self.ticket_repository.create(ticket).await?;

        tracing::info!(
            ticket_id = %ticket.id,
            user_id = %creator.id,
            priority = %ticket.priority,
            event = "ticket_created",
            "New ticket filed"
        );

        Ok(TicketSummary::new(ticket, UserBrief::from(creator), None))
    }

    /// List tickets visible in the given scope, newest first
    pub async fn list_tickets(&self, scope: TicketScope) -> DomainResult<Vec<TicketSummary>> {
        let tickets = self.ticket_repository.list(scope).await?;
        self.enrich_tickets(tickets).await
    }

    /// Fetch one ticket with its comment thread
    ///
    /// # Returns
    ///
    /// * `Ok(TicketDetail)` - The ticket, resolved names and comments
    /// * `Err(DomainError::NotFound)` - Unknown id, or ticket outside scope
    pub async fn ticket_detail(
        &self,
        scope: TicketScope,
        ticket_id: Uuid,
    ) -> DomainResult<TicketDetail> {
        let ticket = self.find_in_scope(scope, ticket_id).await?;
        let comments = self.ticket_repository.list_comments(ticket_id).await?;

        let mut user_ids = vec![ticket.created_by];
        if let Some(assignee) = ticket.assigned_to {
            user_ids.push(assignee);
        }
        user_ids.extend(comments.iter().map(|c| c.author_id));
        let users = self.resolve_users(&user_ids).await?;

        let created_by = Self::brief_for(&users, ticket.created_by)?;
        let assigned_to = match ticket.assigned_to {
            Some(assignee) => Some(Self::brief_for(&users, assignee)?),
            None => None,
        };
        let comments = comments
            .into_iter()
            .map(|comment| {
                let author = Self::brief_for(&users, comment.author_id)?;
                Ok(CommentView::new(comment, author))
            })
            .collect::<DomainResult<Vec<_>>>()?;

        Ok(TicketDetail::new(ticket, created_by, assigned_to, comments))
    }

    /// Change a ticket's workflow state
    ///
    /// The status enum is flat: any state can be set from any other.
    pub async fn update_status(
        &self,
        scope: TicketScope,
        ticket_id: Uuid,
        status: TicketStatus,
    ) -> DomainResult<TicketSummary> {
        let mut ticket = self.find_in_scope(scope, ticket_id).await?;

        let previous_status = ticket.status;
        ticket.set_status(status);
        let ticket = self.ticket_repository.update(ticket).await?;

        tracing::info!(
            ticket_id = %ticket.id,
            previous_status = %previous_status,
            new_status = %ticket.status,
            event = "ticket_status_changed",
            "Ticket status updated"
        );

        self.enrich_ticket(ticket).await
    }

    /// Assign a ticket to an agent, or clear the assignment
    ///
    /// Assignment moves the ticket to `IN_PROGRESS`; clearing it returns
    /// the ticket to `OPEN`. The assignee must be an existing account
    /// with the `AGENT` role.
    ///
    /// # Arguments
    ///
    /// * `ticket_id` - Ticket to (re)assign
    /// * `agent_id` - Agent to assign, or None to unassign
    pub async fn assign_ticket(
        &self,
        ticket_id: Uuid,
        agent_id: Option<Uuid>,
    ) -> DomainResult<TicketSummary> {
        let mut ticket = self.find_in_scope(TicketScope::All, ticket_id).await?;

        if let Some(agent_id) = agent_id {
            let agent = self.user_repository.find_by_id(agent_id).await?;
            match agent {
                Some(ref user) if user.role == Role::Agent => {}
                _ => {
                    return Err(DomainError::Validation {
                        message: "Assignee must be an existing agent".to_string(),
                    });
                }
            }
        }

        ticket.assign(agent_id);
        let ticket = self.ticket_repository.update(ticket).await?;

        match agent_id {
            Some(agent_id) => tracing::info!(
                ticket_id = %ticket.id,
                agent_id = %agent_id,
                event = "ticket_assigned",
                "Ticket assigned to agent"
            ),
            None => tracing::info!(
                ticket_id = %ticket.id,
                event = "ticket_unassigned",
                "Ticket assignment cleared"
            ),
        }

        self.enrich_ticket(ticket).await
    }

    /// Add a comment to a ticket's thread
    ///
    /// # Arguments
    ///
    /// * `author` - The authenticated account writing the comment
    /// * `scope` - Visibility window of the author
    /// * `ticket_id` - Ticket to comment on
    /// * `content` - Comment text
    pub async fn add_comment(
        &self,
        author: &User,
        scope: TicketScope,
        ticket_id: Uuid,
        content: &str,
    ) -> DomainResult<CommentView> {
        let ticket = self.find_in_scope(scope, ticket_id).await?;

        if !validation::not_empty(content)
            || !validation::length_between(content, 1, COMMENT_MAX_LENGTH)
        {
            return Err(DomainError::Validation {
                message: format!(
                    "Comment must be between 1 and {} characters",
                    COMMENT_MAX_LENGTH
                ),
            });
        }

        let comment = Comment::new(ticket.id, author.id, content.trim().to_string());
        let comment = self.ticket_repository.add_comment(comment).await?;

        tracing::info!(
            ticket_id = %ticket.id,
            user_id = %author.id,
            event = "comment_added",
            "Comment added to ticket"
        );

        Ok(CommentView::new(comment, UserBrief::from(author)))
    }

    /// List a ticket's comments in chronological order, oldest first
    pub async fn list_comments(
        &self,
        scope: TicketScope,
        ticket_id: Uuid,
    ) -> DomainResult<Vec<CommentView>> {
        self.find_in_scope(scope, ticket_id).await?;
        let comments = self.ticket_repository.list_comments(ticket_id).await?;

        let author_ids: Vec<Uuid> = comments.iter().map(|c| c.author_id).collect();
        let users = self.resolve_users(&author_ids).await?;

        comments
            .into_iter()
            .map(|comment| {
                let author = Self::brief_for(&users, comment.author_id)?;
                Ok(CommentView::new(comment, author))
            })
            .collect()
    }

    /// Status breakdown and recent tickets for one queue
    ///
    /// Serves both the user dashboard (scope `CreatedBy`) and the agent
    /// dashboard (scope `AssignedTo`).
    pub async fn queue_stats(&self, scope: TicketScope) -> DomainResult<QueueStats> {
        let total = self.ticket_repository.count(scope, None).await?;
        let open = self
            .ticket_repository
            .count(scope, Some(TicketStatus::Open))
            .await?;
        let in_progress = self
            .ticket_repository
            .count(scope, Some(TicketStatus::InProgress))
            .await?;
        let resolved = self
            .ticket_repository
            .count(scope, Some(TicketStatus::Resolved))
            .await?;
        let recent = self
            .ticket_repository
            .recent(scope, RECENT_TICKETS_LIMIT)
            .await?;
        let recent = self.enrich_tickets(recent).await?;

        Ok(QueueStats {
            total,
            open,
            in_progress,
            resolved,
            recent,
        })
    }

    /// System-wide statistics for the admin dashboard
    pub async fn global_stats(&self) -> DomainResult<GlobalStats> {
        let scope = TicketScope::All;
        let total = self.ticket_repository.count(scope, None).await?;
        let open = self
            .ticket_repository
            .count(scope, Some(TicketStatus::Open))
            .await?;
        let in_progress = self
            .ticket_repository
            .count(scope, Some(TicketStatus::InProgress))
            .await?;
        let resolved = self
            .ticket_repository
            .count(scope, Some(TicketStatus::Resolved))
            .await?;
        let closed = self
            .ticket_repository
            .count(scope, Some(TicketStatus::Closed))
            .await?;
        let urgent = self
            .ticket_repository
            .count_by_priority(scope, TicketPriority::Urgent)
            .await?;
        let recent = self
            .ticket_repository
            .recent(scope, RECENT_TICKETS_LIMIT)
            .await?;
        let recent = self.enrich_tickets(recent).await?;

        Ok(GlobalStats {
            total,
            open,
            in_progress,
            resolved,
            closed,
            urgent,
            recent,
        })
    }

    /// Fetch a ticket and require it to be inside the scope.
    ///
    /// Out-of-scope tickets report as not found, not forbidden.
    async fn find_in_scope(&self, scope: TicketScope, ticket_id: Uuid) -> DomainResult<Ticket> {
        self.ticket_repository
            .find_by_id(ticket_id)
            .await?
            .filter(|ticket| scope.contains(ticket))
            .ok_or_else(|| DomainError::NotFound {
                resource: "Ticket".to_string(),
            })
    }

    /// Batch-load the users referenced by a set of ids
    async fn resolve_users(&self, ids: &[Uuid]) -> DomainResult<HashMap<Uuid, User>> {
        let mut unique: Vec<Uuid> = ids.to_vec();
        unique.sort_unstable();
        unique.dedup();

        let users = self.user_repository.find_by_ids(&unique).await?;
        Ok(users.into_iter().map(|u| (u.id, u)).collect())
    }

    /// Look up a resolved user and convert to a brief.
    ///
    /// A dangling reference means the database lost integrity; surface it
    /// as an internal error instead of silently dropping the name.
    fn brief_for(users: &HashMap<Uuid, User>, user_id: Uuid) -> DomainResult<UserBrief> {
        users
            .get(&user_id)
            .map(UserBrief::from)
            .ok_or_else(|| DomainError::Internal {
                message: format!("Referenced user {} does not exist", user_id),
            })
    }

    /// Resolve names for a batch of tickets
    async fn enrich_tickets(&self, tickets: Vec<Ticket>) -> DomainResult<Vec<TicketSummary>> {
        let mut user_ids = Vec::with_capacity(tickets.len() * 2);
        for ticket in &tickets {
            user_ids.push(ticket.created_by);
            if let Some(assignee) = ticket.assigned_to {
                user_ids.push(assignee);
            }
        }
        let users = self.resolve_users(&user_ids).await?;

        tickets
            .into_iter()
            .map(|ticket| {
                let created_by = Self::brief_for(&users, ticket.created_by)?;
                let assigned_to = match ticket.assigned_to {
                    Some(assignee) => Some(Self::brief_for(&users, assignee)?),
                    None => None,
                };
                Ok(TicketSummary::new(ticket, created_by, assigned_to))
            })
            .collect()
    }

    /// Resolve names for a single ticket
    async fn enrich_ticket(&self, ticket: Ticket) -> DomainResult<TicketSummary> {
        let mut summaries = self.enrich_tickets(vec![ticket]).await?;
        summaries.pop().ok_or_else(|| DomainError::Internal {
            message: "Ticket enrichment produced no result".to_string(),
        })
    }
}
