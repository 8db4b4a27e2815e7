use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::app::AppState;
use crate::dto::auth::LoginRequest;
use crate::handlers::error::{handle_domain_error, handle_validation_errors};

use qd_core::repositories::{TicketRepository, UserRepository};
use qd_shared::types::response::ApiResponse;

/// Handler for POST /api/v1/auth/login
///
/// Verifies the credentials and returns a signed session token with
/// the account profile. Unknown email and wrong password produce the
/// same 401, so the endpoint does not reveal which addresses have
/// accounts.
///
/// # Responses
///
/// * `200 OK` - Body carries `token`, `expires_in` and the profile
/// * `401 Unauthorized` - Credentials did not match any account
pub async fn login<U, T>(
    state: web::Data<AppState<U, T>>,
    request: web::Json<LoginRequest>,
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
        .login(&request.email, &request.password)
        .await
    {
        Ok(auth) => HttpResponse::Ok().json(ApiResponse::success(auth)),
        Err(error) => handle_domain_error(error),
    }
}
