//! User repository trait defining the interface for user data persistence.
//!
//! This module defines the repository pattern interface for User entities.
//! The trait is async-first and uses Result types for proper error handling.
//! Implementations handle the actual database operations while maintaining
//! the abstraction boundary between domain and infrastructure layers.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::user::{Role, User};
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by their email address
    ///
    /// # Arguments
    /// * `email` - The email address to look up (already normalized)
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user registered with the given email
    /// * `Err(DomainError)` - Database or other error occurred
    ///
    /// # Example
    /// ```no_run
    /// # use qd_core::repositories::UserRepository;
    /// # async fn example(repo: &impl UserRepository) -> Result<(), Box<dyn std::error::Error>> {
    /// match repo.find_by_email("alice@example.com").await? {
    ///     Some(user) => println!("User found: {:?}", user.id),
    ///     None => println!("User not found"),
    /// }
    /// # Ok(())
    /// # }
    /// ```
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Find a user by their unique identifier
    ///
    /// # Arguments
    /// * `id` - The UUID of the user
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user found with given ID
    /// * `Err(DomainError)` - Database or other error occurred
    ///
    /// # Example
    /// ```no_run
    /// # use uuid::Uuid;
    /// # use qd_core::repositories::UserRepository;
    /// # async fn example(repo: &impl UserRepository) -> Result<(), Box<dyn std::error::Error>> {
    /// let user_id = Uuid::parse_str("550e8400-e29b-41d4-a716-446655440000")?;
    ///
    /// if let Some(user) = repo.find_by_id(user_id).await? {
    ///     println!("User role: {:?}", user.role);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError>;

    /// Find all users whose ids appear in the given slice
    ///
    /// Used to batch-resolve reporter and assignee names for ticket views.
    /// Ids without a matching user are silently absent from the result.
    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<User>, DomainError>;

    /// Check if a user exists with the given email address
    ///
    /// # Returns
    /// * `Ok(true)` - Email already registered
    /// * `Ok(false)` - Email is free
    /// * `Err(DomainError)` - Database error occurred
    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError>;

    /// Create a new user in the repository
    ///
    /// # Arguments
    /// * `user` - The User entity to persist
    ///
    /// # Returns
    /// * `Ok(User)` - The created user
    /// * `Err(DomainError)` - Creation failed (e.g., duplicate email)
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// Update an existing user in the repository
    ///
    /// # Arguments
    /// * `user` - The User entity with updated fields
    ///
    /// # Returns
    /// * `Ok(User)` - The updated user
    /// * `Err(DomainError::NotFound)` - No user with this id exists
    async fn update(&self, user: User) -> Result<User, DomainError>;

    /// List all registered users, newest first
    async fn list(&self) -> Result<Vec<User>, DomainError>;

    /// List all users holding the given role, newest first
    ///
    /// # Example
    /// ```no_run
    /// # use qd_core::repositories::UserRepository;
    /// # use qd_core::domain::entities::user::Role;
    /// # async fn example(repo: &impl UserRepository) -> Result<(), Box<dyn std::error::Error>> {
    /// let agents = repo.list_by_role(Role::Agent).await?;
    /// println!("{} agents available", agents.len());
    /// # Ok(())
    /// # }
    /// ```
    async fn list_by_role(&self, role: Role) -> Result<Vec<User>, DomainError>;
}
