use actix_web::{web, HttpResponse};
use uuid::Uuid;

use crate::app::AppState;
use crate::dto::ticket::UpdateStatusRequest;
use crate::handlers::error::handle_domain_error;
use crate::middleware::auth::AuthContext;
use crate::routes::AGENT_ONLY;

use qd_core::repositories::{TicketRepository, TicketScope, UserRepository};
use qd_shared::types::response::ApiResponse;

/// Handler for PATCH /api/v1/agent/tickets/{id}/status
///
/// Moves one of the caller's assigned tickets to a new workflow state.
/// The status set is flat: any state can be set from any other.
pub async fn update_ticket_status<U, T>(
    auth: AuthContext,
    path: web::Path<Uuid>,
    state: web::Data<AppState<U, T>>,
    request: web::Json<UpdateStatusRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TicketRepository + 'static,
{
    let user = match state.auth_service.authorize(auth.user_id, AGENT_ONLY).await {
        Ok(user) => user,
        Err(error) => return handle_domain_error(error),
    };

    match state
        .ticket_service
        .update_status(
            TicketScope::AssignedTo(user.id),
            path.into_inner(),
            request.status,
        )
        .await
    {
        Ok(ticket) => HttpResponse::Ok().json(ApiResponse::success(ticket)),
        Err(error) => handle_domain_error(error),
    }
}
