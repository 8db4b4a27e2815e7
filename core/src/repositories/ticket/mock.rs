//! Mock implementation of TicketRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::ticket::{Comment, Ticket, TicketPriority, TicketStatus};
use crate::errors::DomainError;

use super::trait_::{TicketRepository, TicketScope};

/// Mock ticket repository for testing
pub struct MockTicketRepository {
    tickets: Arc<RwLock<HashMap<Uuid, Ticket>>>,
    comments: Arc<RwLock<Vec<Comment>>>,
}

impl MockTicketRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self {
            tickets: Arc::new(RwLock::new(HashMap::new())),
            comments: Arc::new(RwLock::new(Vec::new())),
        }
    }

    fn sorted_newest_first(mut tickets: Vec<Ticket>) -> Vec<Ticket> {
        tickets.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        tickets
    }
}

impl Default for MockTicketRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TicketRepository for MockTicketRepository {
    async fn create(&self, ticket: Ticket) -> Result<Ticket, DomainError> {
        let mut tickets = self.tickets.write().await;
        tickets.insert(ticket.id, ticket.clone());
        Ok(ticket)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Ticket>, DomainError> {
        let tickets = self.tickets.read().await;
        Ok(tickets.get(&id).cloned())
    }

    async fn update(&self, ticket: Ticket) -> Result<Ticket, DomainError> {
        let mut tickets = self.tickets.write().await;

        if !tickets.contains_key(&ticket.id) {
            return Err(DomainError::NotFound {
                resource: "Ticket".to_string(),
            });
        }

        tickets.insert(ticket.id, ticket.clone());
        Ok(ticket)
    }

    async fn list(&self, scope: TicketScope) -> Result<Vec<Ticket>, DomainError> {
        let tickets = self.tickets.read().await;
        let matching = tickets
            .values()
            .filter(|t| scope.contains(t))
            .cloned()
            .collect();
        Ok(Self::sorted_newest_first(matching))
    }

    async fn recent(&self, scope: TicketScope, limit: u32) -> Result<Vec<Ticket>, DomainError> {
        let mut matching = self.list(scope).await?;
        matching.truncate(limit as usize);
        Ok(matching)
    }

    async fn count(
        &self,
        scope: TicketScope,
        status: Option<TicketStatus>,
    ) -> Result<u64, DomainError> {
        let tickets = self.tickets.read().await;
        let count = tickets
            .values()
            .filter(|t| scope.contains(t))
            .filter(|t| status.map_or(true, |s| t.status == s))
            .count();
        Ok(count as u64)
    }

    async fn count_by_priority(
        &self,
        scope: TicketScope,
        priority: TicketPriority,
    ) -> Result<u64, DomainError> {
        let tickets = self.tickets.read().await;
        let count = tickets
            .values()
            .filter(|t| scope.contains(t) && t.priority == priority)
            .count();
        Ok(count as u64)
    }

    async fn add_comment(&self, comment: Comment) -> Result<Comment, DomainError> {
        let mut comments = self.comments.write().await;
        comments.push(comment.clone());
        Ok(comment)
    }

    async fn list_comments(&self, ticket_id: Uuid) -> Result<Vec<Comment>, DomainError> {
        let comments = self.comments.read().await;
        let mut thread: Vec<Comment> = comments
            .iter()
            .filter(|c| c.ticket_id == ticket_id)
            .cloned()
            .collect();
        thread.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(thread)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticket(created_by: Uuid) -> Ticket {
        Ticket::new(
            "Login broken".to_string(),
            "Cannot log in since this morning".to_string(),
            TicketPriority::High,
            created_by,
        )
    }

    #[tokio::test]
    async fn test_scope_filters_by_creator() {
        let repo = MockTicketRepository::new();
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();

        repo.create(ticket(alice)).await.unwrap();
        repo.create(ticket(alice)).await.unwrap();
        repo.create(ticket(bob)).await.unwrap();

        let alices = repo.list(TicketScope::CreatedBy(alice)).await.unwrap();
        assert_eq!(alices.len(), 2);

        let all = repo.list(TicketScope::All).await.unwrap();
        assert_eq!(all.len(), 3);
    }

    #[tokio::test]
    async fn test_scope_filters_by_assignee() {
        let repo = MockTicketRepository::new();
        let agent = Uuid::new_v4();

        let mut assigned = ticket(Uuid::new_v4());
        assigned.assign(Some(agent));
        repo.create(assigned).await.unwrap();
        repo.create(ticket(Uuid::new_v4())).await.unwrap();

        let queue = repo.list(TicketScope::AssignedTo(agent)).await.unwrap();
        assert_eq!(queue.len(), 1);
        assert!(queue[0].is_assigned_to(agent));
    }

    #[tokio::test]
    async fn test_count_by_status() {
        let repo = MockTicketRepository::new();
        let creator = Uuid::new_v4();

        let mut resolved = ticket(creator);
        resolved.set_status(TicketStatus::Resolved);
        repo.create(resolved).await.unwrap();
        repo.create(ticket(creator)).await.unwrap();

        let open = repo
            .count(TicketScope::All, Some(TicketStatus::Open))
            .await
            .unwrap();
        let total = repo.count(TicketScope::All, None).await.unwrap();
        assert_eq!(open, 1);
        assert_eq!(total, 2);
    }

    #[tokio::test]
    async fn test_comments_in_chronological_order() {
        let repo = MockTicketRepository::new();
        let t = repo.create(ticket(Uuid::new_v4())).await.unwrap();
        let author = Uuid::new_v4();

        let first = Comment::new(t.id, author, "first".to_string());
        let mut second = Comment::new(t.id, author, "second".to_string());
        second.created_at = first.created_at + chrono::Duration::seconds(5);

        // Insert out of order; listing must sort by time
        repo.add_comment(second).await.unwrap();
        repo.add_comment(first).await.unwrap();

        let thread = repo.list_comments(t.id).await.unwrap();
        assert_eq!(thread.len(), 2);
        assert_eq!(thread[0].content, "first");
        assert_eq!(thread[1].content, "second");
    }

    #[tokio::test]
    async fn test_update_missing_ticket_fails() {
        let repo = MockTicketRepository::new();
        let result = repo.update(ticket(Uuid::new_v4())).await;
        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }
}
