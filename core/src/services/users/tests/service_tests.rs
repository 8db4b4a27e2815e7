//! Unit tests for the user management service

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::user::{Role, User};
use crate::errors::DomainError;
use crate::repositories::{MockUserRepository, UserRepository};
use crate::services::users::UserService;

fn user(email: &str, name: &str, role: Role) -> User {
    User::with_role(
        email.to_string(),
        name.to_string(),
        "$2b$12$hash".to_string(),
        role,
    )
}

async fn seeded_service(users: Vec<User>) -> (UserService<MockUserRepository>, Arc<MockUserRepository>) {
    let repo = Arc::new(MockUserRepository::with_users(users).await);
    (UserService::new(Arc::clone(&repo)), repo)
}

#[tokio::test]
async fn test_list_users_returns_profiles() {
    let (service, _) = seeded_service(vec![
        user("alice@example.com", "Alice", Role::User),
        user("smith@example.com", "Smith", Role::Agent),
    ])
    .await;

    let users = service.list_users().await.unwrap();
    assert_eq!(users.len(), 2);
}

#[tokio::test]
async fn test_list_agents_filters_role() {
    let (service, _) = seeded_service(vec![
        user("alice@example.com", "Alice", Role::User),
        user("smith@example.com", "Smith", Role::Agent),
        user("root@example.com", "Root", Role::Admin),
    ])
    .await;

    let agents = service.list_agents().await.unwrap();
    assert_eq!(agents.len(), 1);
    assert_eq!(agents[0].name, "Smith");
}

#[tokio::test]
async fn test_update_role_persists() {
    let alice = user("alice@example.com", "Alice", Role::User);
    let alice_id = alice.id;
    let (service, repo) = seeded_service(vec![alice]).await;

    let profile = service.update_role(alice_id, Role::Agent).await.unwrap();
    assert_eq!(profile.role, Role::Agent);

    let stored = repo.find_by_id(alice_id).await.unwrap().unwrap();
    assert_eq!(stored.role, Role::Agent);
}

#[tokio::test]
async fn test_update_role_missing_user() {
    let (service, _) = seeded_service(vec![]).await;

    let result = service.update_role(Uuid::new_v4(), Role::Agent).await;
    assert!(matches!(result, Err(DomainError::NotFound { .. })));
}
