//! Domain error to HTTP response mapping

use std::collections::HashMap;

use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use validator::ValidationErrors;

use crate::dto::error::ErrorResponseExt;

use qd_core::errors::{AuthError, DomainError, SessionError};
use qd_shared::errors::{error_codes, ErrorResponse};

/// Handle domain errors and convert them to appropriate HTTP responses
///
/// Storage and internal failures are logged here and reported with a
/// generic message, so responses never leak query or connection detail.
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    match error {
        DomainError::Validation { message } => HttpResponse::BadRequest()
            .json(ErrorResponse::new(error_codes::VALIDATION_ERROR, message)),

        DomainError::NotFound { resource } => HttpResponse::NotFound().json(ErrorResponse::new(
            error_codes::NOT_FOUND,
            format!("{} not found", resource),
        )),

        DomainError::Database { message } => {
            log::error!("Database error: {}", message);
            HttpResponse::InternalServerError().json(ErrorResponse::new(
                error_codes::DATABASE_ERROR,
                "A storage error occurred",
            ))
        }

        DomainError::Internal { message } => {
            log::error!("Internal error: {}", message);
            HttpResponse::InternalServerError().json(ErrorResponse::new(
                error_codes::INTERNAL_ERROR,
                "An internal error occurred",
            ))
        }

        DomainError::Auth(auth_error) => match auth_error {
            AuthError::InvalidCredentials => HttpResponse::Unauthorized().json(
                ErrorResponse::new(error_codes::INVALID_CREDENTIALS, "Invalid email or password"),
            ),
            AuthError::UserAlreadyExists => HttpResponse::BadRequest().json(ErrorResponse::new(
                error_codes::USER_EXISTS,
                "An account with this email already exists",
            )),
            AuthError::InsufficientPermissions => HttpResponse::Forbidden().json(
                ErrorResponse::new(error_codes::FORBIDDEN, "Insufficient permissions"),
            ),
        },

        DomainError::Session(session_error) => match session_error {
            SessionError::InvalidToken => HttpResponse::Unauthorized().json(ErrorResponse::new(
                error_codes::TOKEN_INVALID,
                "Invalid or expired token",
            )),
            SessionError::TokenGenerationFailed => {
                log::error!("Session token generation failed");
                HttpResponse::InternalServerError().json(ErrorResponse::new(
                    error_codes::INTERNAL_ERROR,
                    "An internal error occurred",
                ))
            }
        },
    }
}

/// Convert request body validation failures into a field-keyed 400 response
pub fn handle_validation_errors(errors: &ValidationErrors) -> HttpResponse {
    let mut details = HashMap::new();
    for (field, field_errors) in errors.field_errors() {
        let messages: Vec<String> = field_errors
            .iter()
            .map(|e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string())
            })
            .collect();
        details.insert(field.to_string(), serde_json::json!(messages));
    }

    log::warn!("Request validation failed: {:?}", details);

    ErrorResponse::with_details(
        error_codes::VALIDATION_ERROR,
        "Invalid request data",
        details,
    )
    .to_response(StatusCode::BAD_REQUEST)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        let response = handle_domain_error(DomainError::NotFound {
            resource: "Ticket".to_string(),
        });
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_invalid_credentials_maps_to_401() {
        let response = handle_domain_error(DomainError::Auth(AuthError::InvalidCredentials));
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_insufficient_permissions_maps_to_403() {
        let response = handle_domain_error(DomainError::Auth(AuthError::InsufficientPermissions));
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_invalid_token_maps_to_401() {
        let response = handle_domain_error(DomainError::Session(SessionError::InvalidToken));
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_database_error_hides_detail() {
        let response = handle_domain_error(DomainError::Database {
            message: "SELECT failed on host db-internal:3306".to_string(),
        });
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
