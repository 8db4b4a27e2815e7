use actix_web::{web, HttpResponse};

use crate::app::AppState;
use crate::handlers::error::handle_domain_error;
use crate::middleware::auth::AuthContext;
use crate::routes::AGENT_ONLY;

use qd_core::repositories::{TicketRepository, TicketScope, UserRepository};
use qd_shared::types::response::ApiResponse;

/// Handler for GET /api/v1/agent/stats
///
/// Status breakdown and recent tickets for the calling agent's queue.
pub async fn agent_stats<U, T>(
    auth: AuthContext,
    state: web::Data<AppState<U, T>>,
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
        .queue_stats(TicketScope::AssignedTo(user.id))
        .await
    {
        Ok(stats) => HttpResponse::Ok().json(ApiResponse::success(stats)),
        Err(error) => handle_domain_error(error),
    }
}
