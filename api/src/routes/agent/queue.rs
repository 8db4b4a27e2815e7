use actix_web::{web, HttpResponse};
use uuid::Uuid;

use crate::app::AppState;
use crate::handlers::error::handle_domain_error;
use crate::middleware::auth::AuthContext;
use crate::routes::AGENT_ONLY;

use qd_core::repositories::{TicketRepository, TicketScope, UserRepository};
use qd_shared::types::response::ApiResponse;

/// Handler for GET /api/v1/agent/tickets
///
/// Lists tickets assigned to the calling agent, newest first.
pub async fn agent_queue<U, T>(
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
        .list_tickets(TicketScope::AssignedTo(user.id))
        .await
    {
        Ok(tickets) => HttpResponse::Ok().json(ApiResponse::success(tickets)),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for GET /api/v1/agent/tickets/{id}
///
/// Returns one assigned ticket with its comment thread. Tickets not
/// assigned to the caller answer 404.
pub async fn agent_ticket_detail<U, T>(
    auth: AuthContext,
    path: web::Path<Uuid>,
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
        .ticket_detail(TicketScope::AssignedTo(user.id), path.into_inner())
        .await
    {
        Ok(detail) => HttpResponse::Ok().json(ApiResponse::success(detail)),
        Err(error) => handle_domain_error(error),
    }
}
