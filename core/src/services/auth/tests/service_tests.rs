//! Unit tests for the authentication service

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::session::Claims;
use crate::domain::entities::user::Role;
use crate::errors::{AuthError, DomainError, SessionError};
use crate::repositories::{MockUserRepository, UserRepository};
use crate::services::auth::{AuthService, AuthServiceConfig};
use crate::services::session::{SessionService, SessionServiceConfig};

// Minimum bcrypt cost keeps these tests fast
const TEST_BCRYPT_COST: u32 = 4;

fn create_test_auth_service(
    repo: Arc<MockUserRepository>,
) -> (AuthService<MockUserRepository>, Arc<SessionService>) {
    let session_service = Arc::new(SessionService::new(SessionServiceConfig::new(
        "test-secret-for-auth-service",
    )));
    let auth_service = AuthService::new(
        repo,
        Arc::clone(&session_service),
        AuthServiceConfig::with_bcrypt_cost(TEST_BCRYPT_COST),
    );
    (auth_service, session_service)
}

#[tokio::test]
async fn test_register_creates_user_role_account() {
    let repo = Arc::new(MockUserRepository::new());
    let (auth, _) = create_test_auth_service(Arc::clone(&repo));

    let profile = auth
        .register("alice@example.com", "Alice", "password123")
        .await
        .expect("registration should succeed");

    assert_eq!(profile.email, "alice@example.com");
    assert_eq!(profile.role, Role::User);

    let stored = repo
        .find_by_email("alice@example.com")
        .await
        .unwrap()
        .expect("user should be persisted");
    // The plaintext never reaches storage
    assert_ne!(stored.password_hash, "password123");
    assert!(stored.password_hash.starts_with("$2"));
}

#[tokio::test]
async fn test_register_trims_email_and_keeps_case() {
    let repo = Arc::new(MockUserRepository::new());
    let (auth, _) = create_test_auth_service(Arc::clone(&repo));

    auth.register("  Bob@Example.COM ", "Bob", "password123")
        .await
        .unwrap();

    // Stored case-sensitively, surrounding whitespace removed
    assert!(repo.exists_by_email("Bob@Example.COM").await.unwrap());
    assert!(!repo.exists_by_email("bob@example.com").await.unwrap());
}

#[tokio::test]
async fn test_register_duplicate_email_rejected() {
    let repo = Arc::new(MockUserRepository::new());
    let (auth, _) = create_test_auth_service(repo);

    auth.register("alice@example.com", "Alice", "password123")
        .await
        .unwrap();
    let result = auth
        .register("alice@example.com", "Alice Again", "otherpassword")
        .await;

    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::UserAlreadyExists))
    ));
}

#[tokio::test]
async fn test_register_validates_inputs() {
    let repo = Arc::new(MockUserRepository::new());
    let (auth, _) = create_test_auth_service(repo);

    let bad_email = auth.register("not-an-email", "Alice", "password123").await;
    assert!(matches!(bad_email, Err(DomainError::Validation { .. })));

    let short_password = auth.register("alice@example.com", "Alice", "short").await;
    assert!(matches!(short_password, Err(DomainError::Validation { .. })));

    let blank_name = auth.register("alice@example.com", "   ", "password123").await;
    assert!(matches!(blank_name, Err(DomainError::Validation { .. })));
}

#[tokio::test]
async fn test_login_round_trip() {
    let repo = Arc::new(MockUserRepository::new());
    let (auth, _) = create_test_auth_service(repo);

    let profile = auth
        .register("alice@example.com", "Alice", "password123")
        .await
        .unwrap();

    let response = auth
        .login("alice@example.com", "password123")
        .await
        .expect("login should succeed");

    assert_eq!(response.user.id, profile.id);
    assert!(response.expires_in > 0);

    // The issued token authenticates back to the same account
    let authenticated = auth.authenticate(&response.token).unwrap();
    assert_eq!(authenticated, profile.id);
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let repo = Arc::new(MockUserRepository::new());
    let (auth, _) = create_test_auth_service(repo);

    auth.register("alice@example.com", "Alice", "password123")
        .await
        .unwrap();

    let wrong_password = auth.login("alice@example.com", "wrong-password").await;
    let unknown_email = auth.login("nobody@example.com", "password123").await;

    // Same error for both, so responses cannot be used to probe which
    // emails have accounts
    assert!(matches!(
        wrong_password,
        Err(DomainError::Auth(AuthError::InvalidCredentials))
    ));
    assert!(matches!(
        unknown_email,
        Err(DomainError::Auth(AuthError::InvalidCredentials))
    ));
}

#[tokio::test]
async fn test_authorize_checks_current_role() {
    let repo = Arc::new(MockUserRepository::new());
    let (auth, _) = create_test_auth_service(Arc::clone(&repo));

    let profile = auth
        .register("alice@example.com", "Alice", "password123")
        .await
        .unwrap();

    let denied = auth.authorize(profile.id, &[Role::Admin]).await;
    assert!(matches!(
        denied,
        Err(DomainError::Auth(AuthError::InsufficientPermissions))
    ));

    let allowed = auth.authorize(profile.id, &[Role::User, Role::Admin]).await;
    assert_eq!(allowed.unwrap().id, profile.id);
}

#[tokio::test]
async fn test_role_change_applies_to_existing_session() {
    let repo = Arc::new(MockUserRepository::new());
    let (auth, _) = create_test_auth_service(Arc::clone(&repo));

    auth.register("alice@example.com", "Alice", "password123")
        .await
        .unwrap();
    let response = auth.login("alice@example.com", "password123").await.unwrap();
    let token = response.token;

    // Not an admin yet
    let denied = auth.require_role(&token, &[Role::Admin]).await;
    assert!(matches!(
        denied,
        Err(DomainError::Auth(AuthError::InsufficientPermissions))
    ));

    // Promote the account; the session token is unchanged
    let mut user = repo.find_by_id(response.user.id).await.unwrap().unwrap();
    user.set_role(Role::Admin);
    repo.update(user).await.unwrap();

    let granted = auth.require_role(&token, &[Role::Admin]).await;
    assert_eq!(granted.unwrap().role, Role::Admin);
}

#[tokio::test]
async fn test_authorize_missing_account_denied() {
    let repo = Arc::new(MockUserRepository::new());
    let (auth, _) = create_test_auth_service(repo);

    let result = auth.authorize(Uuid::new_v4(), &[Role::User]).await;
    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::InsufficientPermissions))
    ));
}

#[tokio::test]
async fn test_require_role_checks_session_before_role() {
    let repo = Arc::new(MockUserRepository::new());
    let (auth, session) = create_test_auth_service(Arc::clone(&repo));

    auth.register("alice@example.com", "Alice", "password123")
        .await
        .unwrap();
    let user = repo.find_by_email("alice@example.com").await.unwrap().unwrap();

    // Expired token for a real account: the session stage must fail
    // first, even though the role check would also fail
    let mut claims = Claims::new(user.id, 24);
    claims.iat = chrono::Utc::now().timestamp() - 7200;
    claims.exp = chrono::Utc::now().timestamp() - 3600;
    let expired = session.encode_jwt(&claims).unwrap();

    let result = auth.require_role(&expired, &[Role::Admin]).await;
    assert!(matches!(
        result,
        Err(DomainError::Session(SessionError::InvalidToken))
    ));
}

#[tokio::test]
async fn test_require_role_valid_session_wrong_role() {
    let repo = Arc::new(MockUserRepository::new());
    let (auth, _) = create_test_auth_service(repo);

    auth.register("alice@example.com", "Alice", "password123")
        .await
        .unwrap();
    let response = auth.login("alice@example.com", "password123").await.unwrap();

    let result = auth.require_role(&response.token, &[Role::Agent]).await;
    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::InsufficientPermissions))
    ));
}
