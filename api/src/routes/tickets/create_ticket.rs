use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::app::AppState;
use crate::dto::ticket::CreateTicketRequest;
use crate::handlers::error::{handle_domain_error, handle_validation_errors};
use crate::middleware::auth::AuthContext;
use crate::routes::ANY_ROLE;

use qd_core::repositories::{TicketRepository, UserRepository};
use qd_shared::types::response::ApiResponse;

/// Handler for POST /api/v1/tickets
///
/// Files a new ticket for the caller. New tickets start `OPEN` and
/// unassigned.
///
/// # Responses
///
/// * `201 Created` - Body carries the new ticket summary
/// * `400 Bad Request` - Title or description out of bounds
pub async fn create_ticket<U, T>(
    auth: AuthContext,
    state: web::Data<AppState<U, T>>,
    request: web::Json<CreateTicketRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TicketRepository + 'static,
{
    let user = match state.auth_service.authorize(auth.user_id, ANY_ROLE).await {
        Ok(user) => user,
        Err(error) => return handle_domain_error(error),
    };

    if let Err(errors) = request.validate() {
        return handle_validation_errors(&errors);
    }

    match state
        .ticket_service
        .create_ticket(&user, &request.title, &request.description, request.priority)
        .await
    {
        Ok(ticket) => HttpResponse::Created().json(ApiResponse::success(ticket)),
        Err(error) => handle_domain_error(error),
    }
}
