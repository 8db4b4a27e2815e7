//! Unit tests for the session service

use uuid::Uuid;

use crate::domain::entities::session::Claims;
use crate::errors::{DomainError, SessionError};
use crate::services::session::{SessionService, SessionServiceConfig};

fn create_test_service() -> SessionService {
    SessionService::new(SessionServiceConfig::new("test-secret-for-sessions"))
}

#[test]
fn test_issue_and_authenticate_round_trip() {
    let service = create_test_service();
    let user_id = Uuid::new_v4();

    let token = service.issue_session(user_id).expect("token should be issued");
    let authenticated = service.authenticate(&token).expect("token should verify");

    assert_eq!(authenticated, user_id);
}

#[test]
fn test_token_has_three_segments() {
    let service = create_test_service();
    let token = service.issue_session(Uuid::new_v4()).unwrap();

    assert_eq!(token.split('.').count(), 3);
}

#[test]
fn test_malformed_token_rejected() {
    let service = create_test_service();

    for garbage in ["", "garbage", "a.b", "a.b.c.d", "not a jwt at all"] {
        let result = service.authenticate(garbage);
        assert!(
            matches!(result, Err(DomainError::Session(SessionError::InvalidToken))),
            "expected InvalidToken for {:?}",
            garbage
        );
    }
}

#[test]
fn test_tampered_payload_rejected() {
    let service = create_test_service();
    let token = service.issue_session(Uuid::new_v4()).unwrap();

    // Flip one character inside the payload segment
    let mut parts: Vec<String> = token.split('.').map(str::to_string).collect();
    let payload = &mut parts[1];
    let mid = payload.len() / 2;
    let original = payload.as_bytes()[mid];
    let replacement = if original == b'A' { 'B' } else { 'A' };
    payload.replace_range(mid..mid + 1, &replacement.to_string());
    let tampered = parts.join(".");

    assert_ne!(tampered, token);
    let result = service.authenticate(&tampered);
    assert!(matches!(
        result,
        Err(DomainError::Session(SessionError::InvalidToken))
    ));
}

#[test]
fn test_token_signed_with_other_secret_rejected() {
    let service = create_test_service();
    let other = SessionService::new(SessionServiceConfig::new("completely-different-secret"));

    let token = other.issue_session(Uuid::new_v4()).unwrap();
    let result = service.authenticate(&token);

    assert!(matches!(
        result,
        Err(DomainError::Session(SessionError::InvalidToken))
    ));
}

#[test]
fn test_expired_token_rejected() {
    let service = create_test_service();
    let user_id = Uuid::new_v4();

    let mut claims = Claims::new(user_id, 24);
    claims.iat = chrono::Utc::now().timestamp() - 7200;
    claims.exp = chrono::Utc::now().timestamp() - 3600;
    let expired = service.encode_jwt(&claims).unwrap();

    let result = service.authenticate(&expired);
    assert!(matches!(
        result,
        Err(DomainError::Session(SessionError::InvalidToken))
    ));
}

#[test]
fn test_non_uuid_subject_rejected() {
    let service = create_test_service();

    let mut claims = Claims::new(Uuid::new_v4(), 24);
    claims.sub = "not-a-uuid".to_string();
    let token = service.encode_jwt(&claims).unwrap();

    let result = service.authenticate(&token);
    assert!(matches!(
        result,
        Err(DomainError::Session(SessionError::InvalidToken))
    ));
}

#[test]
fn test_ttl_seconds() {
    let service = create_test_service();
    assert_eq!(service.token_ttl_seconds(), 24 * 3600);
}
