use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::app::AppState;
use crate::dto::auth::RegisterRequest;
use crate::handlers::error::{handle_domain_error, handle_validation_errors};

use qd_core::repositories::{TicketRepository, UserRepository};
use qd_shared::types::response::ApiResponse;

/// Handler for POST /api/v1/auth/register
///
/// Creates a new account with the default `USER` role. Registration
/// does not log the user in: the response carries the new profile and
/// no session token.
///
/// # Request Body
///
/// ```json
/// {
///     "email": "sam@example.com",
///     "name": "Sam",
///     "password": "at-least-8-chars"
/// }
/// ```
///
/// # Responses
///
/// * `201 Created` - Account created, body carries the profile
/// * `400 Bad Request` - Invalid input, or the email is already registered
pub async fn register<U, T>(
    state: web::Data<AppState<U, T>>,
    request: web::Json<RegisterRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TicketRepository + 'static,
{
    if let Err(errors) = request.validate() {
        return handle_validation_errors(&errors);
    }

    match state
        .auth_service
        .register(&request.email, &request.name, &request.password)
        .await
    {
        Ok(profile) => HttpResponse::Created().json(ApiResponse::success(profile)),
        Err(error) => handle_domain_error(error),
    }
}
