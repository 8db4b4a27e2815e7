//! MySQL implementation of the TicketRepository trait.
//!
//! Scope filters translate to WHERE fragments so the same queries serve
//! the user, agent and admin views. Status and priority are stored as
//! uppercase strings matching the domain enums.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use std::str::FromStr;
use uuid::Uuid;

use qd_core::domain::entities::ticket::{Comment, Ticket, TicketPriority, TicketStatus};
use qd_core::errors::DomainError;
use qd_core::repositories::{TicketRepository, TicketScope};

const TICKET_COLUMNS: &str =
    "id, title, description, status, priority, created_by, assigned_to, created_at, updated_at";

const COMMENT_COLUMNS: &str = "id, ticket_id, author_id, content, created_at";

/// MySQL implementation of TicketRepository
pub struct MySqlTicketRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlTicketRepository {
    /// Create a new MySQL ticket repository
    ///
    /// # Arguments
    /// * `pool` - MySQL connection pool from SQLx
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// WHERE fragment and bind value for a scope, if it filters at all
    fn scope_condition(scope: TicketScope) -> Option<(&'static str, Uuid)> {
        match scope {
            TicketScope::All => None,
            TicketScope::CreatedBy(user_id) => Some(("created_by = ?", user_id)),
            TicketScope::AssignedTo(agent_id) => Some(("assigned_to = ?", agent_id)),
        }
    }

    /// Convert database row to Ticket entity
    fn row_to_ticket(row: &sqlx::mysql::MySqlRow) -> Result<Ticket, DomainError> {
        let id: String = row.try_get("id").map_err(|e| DomainError::Database {
            message: format!("Failed to get id: {}", e),
        })?;
        let status: String = row.try_get("status").map_err(|e| DomainError::Database {
            message: format!("Failed to get status: {}", e),
        })?;
        let priority: String = row.try_get("priority").map_err(|e| DomainError::Database {
            message: format!("Failed to get priority: {}", e),
        })?;
        let created_by: String = row
            .try_get("created_by")
            .map_err(|e| DomainError::Database {
                message: format!("Failed to get created_by: {}", e),
            })?;
        let assigned_to: Option<String> =
            row.try_get("assigned_to").map_err(|e| DomainError::Database {
                message: format!("Failed to get assigned_to: {}", e),
            })?;

        Ok(Ticket {
            id: Self::parse_uuid(&id)?,
            title: row.try_get("title").map_err(|e| DomainError::Database {
                message: format!("Failed to get title: {}", e),
            })?,
            description: row
                .try_get("description")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get description: {}", e),
                })?,
            status: TicketStatus::from_str(&status)
                .map_err(|e| DomainError::Database { message: e })?,
            priority: TicketPriority::from_str(&priority)
                .map_err(|e| DomainError::Database { message: e })?,
            created_by: Self::parse_uuid(&created_by)?,
            assigned_to: assigned_to.as_deref().map(Self::parse_uuid).transpose()?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get created_at: {}", e),
                })?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get updated_at: {}", e),
                })?,
        })
    }

    /// Convert database row to Comment entity
    fn row_to_comment(row: &sqlx::mysql::MySqlRow) -> Result<Comment, DomainError> {
        let id: String = row.try_get("id").map_err(|e| DomainError::Database {
            message: format!("Failed to get id: {}", e),
        })?;
        let ticket_id: String = row.try_get("ticket_id").map_err(|e| DomainError::Database {
            message: format!("Failed to get ticket_id: {}", e),
        })?;
        let author_id: String = row.try_get("author_id").map_err(|e| DomainError::Database {
            message: format!("Failed to get author_id: {}", e),
        })?;

        Ok(Comment {
            id: Self::parse_uuid(&id)?,
            ticket_id: Self::parse_uuid(&ticket_id)?,
            author_id: Self::parse_uuid(&author_id)?,
            content: row.try_get("content").map_err(|e| DomainError::Database {
                message: format!("Failed to get content: {}", e),
            })?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get created_at: {}", e),
                })?,
        })
    }

    fn parse_uuid(value: &str) -> Result<Uuid, DomainError> {
        Uuid::parse_str(value).map_err(|e| DomainError::Database {
            message: format!("Invalid UUID: {}", e),
        })
    }
}

#[async_trait]
impl TicketRepository for MySqlTicketRepository {
    async fn create(&self, ticket: Ticket) -> Result<Ticket, DomainError> {
        let query = r#"
            INSERT INTO tickets (
                id, title, description, status, priority,
                created_by, assigned_to, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(ticket.id.to_string())
            .bind(&ticket.title)
            .bind(&ticket.description)
            .bind(ticket.status.as_str())
            .bind(ticket.priority.as_str())
            .bind(ticket.created_by.to_string())
            .bind(ticket.assigned_to.map(|id| id.to_string()))
            .bind(ticket.created_at)
            .bind(ticket.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to create ticket: {}", e),
            })?;

        Ok(ticket)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Ticket>, DomainError> {
        let query = format!("SELECT {} FROM tickets WHERE id = ? LIMIT 1", TICKET_COLUMNS);

        let result = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Database query failed: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_ticket(&row)?)),
            None => Ok(None),
        }
    }

    async fn update(&self, ticket: Ticket) -> Result<Ticket, DomainError> {
        let query = r#"
            UPDATE tickets SET
                title = ?,
                description = ?,
                status = ?,
                priority = ?,
                assigned_to = ?,
                updated_at = ?
            WHERE id = ?
        "#;

        let updated_at = Utc::now();
        let result = sqlx::query(query)
            .bind(&ticket.title)
            .bind(&ticket.description)
            .bind(ticket.status.as_str())
            .bind(ticket.priority.as_str())
            .bind(ticket.assigned_to.map(|id| id.to_string()))
            .bind(updated_at)
            .bind(ticket.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to update ticket: {}", e),
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound {
                resource: "Ticket".to_string(),
            });
        }

        let mut updated_ticket = ticket;
        updated_ticket.updated_at = updated_at;
        Ok(updated_ticket)
    }

    async fn list(&self, scope: TicketScope) -> Result<Vec<Ticket>, DomainError> {
        let mut query = format!("SELECT {} FROM tickets", TICKET_COLUMNS);
        let scope_bind = Self::scope_condition(scope);
        if let Some((condition, _)) = scope_bind {
            query.push_str(" WHERE ");
            query.push_str(condition);
        }
        query.push_str(" ORDER BY created_at DESC");

        let mut statement = sqlx::query(&query);
        if let Some((_, id)) = scope_bind {
            statement = statement.bind(id.to_string());
        }

        let rows = statement
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Database query failed: {}", e),
            })?;

        rows.iter().map(Self::row_to_ticket).collect()
    }

    async fn recent(&self, scope: TicketScope, limit: u32) -> Result<Vec<Ticket>, DomainError> {
        let mut query = format!("SELECT {} FROM tickets", TICKET_COLUMNS);
        let scope_bind = Self::scope_condition(scope);
        if let Some((condition, _)) = scope_bind {
            query.push_str(" WHERE ");
            query.push_str(condition);
        }
        query.push_str(" ORDER BY created_at DESC LIMIT ?");

        let mut statement = sqlx::query(&query);
        if let Some((_, id)) = scope_bind {
            statement = statement.bind(id.to_string());
        }
        statement = statement.bind(limit);

        let rows = statement
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Database query failed: {}", e),
            })?;

        rows.iter().map(Self::row_to_ticket).collect()
    }

    async fn count(
        &self,
        scope: TicketScope,
        status: Option<TicketStatus>,
    ) -> Result<u64, DomainError> {
        let mut conditions: Vec<&'static str> = Vec::new();
        let scope_bind = Self::scope_condition(scope);
        if let Some((condition, _)) = scope_bind {
            conditions.push(condition);
        }
        if status.is_some() {
            conditions.push("status = ?");
        }

        let mut query = String::from("SELECT COUNT(*) as count FROM tickets");
        if !conditions.is_empty() {
            query.push_str(" WHERE ");
            query.push_str(&conditions.join(" AND "));
        }

        let mut statement = sqlx::query(&query);
        if let Some((_, id)) = scope_bind {
            statement = statement.bind(id.to_string());
        }
        if let Some(status) = status {
            statement = statement.bind(status.as_str());
        }

        let row = statement
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to count tickets: {}", e),
            })?;

        let count: i64 = row.try_get("count").map_err(|e| DomainError::Database {
            message: format!("Failed to get count: {}", e),
        })?;

        Ok(count as u64)
    }

    async fn count_by_priority(
        &self,
        scope: TicketScope,
        priority: TicketPriority,
    ) -> Result<u64, DomainError> {
        let mut query = String::from("SELECT COUNT(*) as count FROM tickets WHERE priority = ?");
        let scope_bind = Self::scope_condition(scope);
        if let Some((condition, _)) = scope_bind {
            query.push_str(" AND ");
            query.push_str(condition);
        }

        let mut statement = sqlx::query(&query).bind(priority.as_str());
        if let Some((_, id)) = scope_bind {
            statement = statement.bind(id.to_string());
        }

        let row = statement
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to count tickets: {}", e),
            })?;

        let count: i64 = row.try_get("count").map_err(|e| DomainError::Database {
            message: format!("Failed to get count: {}", e),
        })?;

        Ok(count as u64)
    }

    async fn add_comment(&self, comment: Comment) -> Result<Comment, DomainError> {
        let query = r#"
            INSERT INTO comments (
                id, ticket_id, author_id, content, created_at
            ) VALUES (?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(comment.id.to_string())
            .bind(comment.ticket_id.to_string())
            .bind(comment.author_id.to_string())
            .bind(&comment.content)
            .bind(comment.created_at)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to create comment: {}", e),
            })?;

        Ok(comment)
    }

    async fn list_comments(&self, ticket_id: Uuid) -> Result<Vec<Comment>, DomainError> {
        let query = format!(
            "SELECT {} FROM comments WHERE ticket_id = ? ORDER BY created_at ASC",
            COMMENT_COLUMNS
        );

        let rows = sqlx::query(&query)
            .bind(ticket_id.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Database query failed: {}", e),
            })?;

        rows.iter().map(Self::row_to_comment).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_condition_fragments() {
        assert!(MySqlTicketRepository::scope_condition(TicketScope::All).is_none());

        let user_id = Uuid::new_v4();
        let (condition, bound) =
            MySqlTicketRepository::scope_condition(TicketScope::CreatedBy(user_id)).unwrap();
        assert_eq!(condition, "created_by = ?");
        assert_eq!(bound, user_id);

        let (condition, bound) =
            MySqlTicketRepository::scope_condition(TicketScope::AssignedTo(user_id)).unwrap();
        assert_eq!(condition, "assigned_to = ?");
        assert_eq!(bound, user_id);
    }
}
