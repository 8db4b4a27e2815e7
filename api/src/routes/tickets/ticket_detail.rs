use actix_web::{web, HttpResponse};
use uuid::Uuid;

use crate::app::AppState;
use crate::handlers::error::handle_domain_error;
use crate::middleware::auth::AuthContext;
use crate::routes::ANY_ROLE;

use qd_core::repositories::{TicketRepository, TicketScope, UserRepository};
use qd_shared::types::response::ApiResponse;

/// Handler for GET /api/v1/tickets/{id}
///
/// Returns one of the caller's tickets with its full comment thread.
/// Tickets created by other accounts answer 404, indistinguishable
/// from an id that does not exist.
pub async fn ticket_detail<U, T>(
    auth: AuthContext,
    path: web::Path<Uuid>,
    state: web::Data<AppState<U, T>>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TicketRepository + 'static,
{
    let user = match state.auth_service.authorize(auth.user_id, ANY_ROLE).await {
        Ok(user) => user,
        Err(error) => return handle_domain_error(error),
    };

    match state
        .ticket_service
        .ticket_detail(TicketScope::CreatedBy(user.id), path.into_inner())
        .await
    {
        Ok(detail) => HttpResponse::Ok().json(ApiResponse::success(detail)),
        Err(error) => handle_domain_error(error),
    }
}
