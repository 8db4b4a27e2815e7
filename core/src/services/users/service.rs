//! User management service implementation

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::user::Role;
use crate::domain::value_objects::{UserBrief, UserProfile};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::UserRepository;

/// Service for administrative user management
pub struct UserService<U: UserRepository> {
    /// User repository for database operations
    user_repository: Arc<U>,
}

impl<U: UserRepository> UserService<U> {
    /// Create a new user management service
    pub fn new(user_repository: Arc<U>) -> Self {
        Self { user_repository }
    }

    /// List all registered accounts, newest first
    pub async fn list_users(&self) -> DomainResult<Vec<UserProfile>> {
        let users = self.user_repository.list().await?;
        Ok(users.iter().map(UserProfile::from).collect())
    }

    /// List all support agents, for assignment pickers
    pub async fn list_agents(&self) -> DomainResult<Vec<UserBrief>> {
        let agents = self.user_repository.list_by_role(Role::Agent).await?;
        Ok(agents.iter().map(UserBrief::from).collect())
    }

    /// Change an account's role
    ///
    /// Takes effect on the target's next request: role checks read
    /// storage, not the session token.
    ///
    /// # Arguments
    ///
    /// * `user_id` - Account to change
    /// * `role` - New role
    ///
    /// # Returns
    ///
    /// * `Ok(UserProfile)` - The updated account
    /// * `Err(DomainError::NotFound)` - No account with this id exists
    pub async fn update_role(&self, user_id: Uuid, role: Role) -> DomainResult<UserProfile> {
        let mut user = self
            .user_repository
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| DomainError::NotFound {
                resource: "User".to_string(),
            })?;

        let previous_role = user.role;
        user.set_role(role);
        let user = self.user_repository.update(user).await?;

        tracing::info!(
            user_id = %user.id,
            previous_role = %previous_role,
            new_role = %user.role,
            event = "role_changed",
            "User role updated"
        );

        Ok(UserProfile::from(&user))
    }
}
