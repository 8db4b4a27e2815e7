use actix_web::{web, HttpResponse};
use uuid::Uuid;

use crate::app::AppState;
use crate::dto::ticket::{AssignTicketRequest, UpdateStatusRequest};
use crate::handlers::error::handle_domain_error;
use crate::middleware::auth::AuthContext;
use crate::routes::ADMIN_ONLY;

use qd_core::repositories::{TicketRepository, TicketScope, UserRepository};
use qd_shared::types::response::ApiResponse;

/// Handler for GET /api/v1/admin/tickets/{id}
///
/// Returns any ticket with its full comment thread.
pub async fn admin_ticket_detail<U, T>(
    auth: AuthContext,
    path: web::Path<Uuid>,
    state: web::Data<AppState<U, T>>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TicketRepository + 'static,
{
    if let Err(error) = state.auth_service.authorize(auth.user_id, ADMIN_ONLY).await {
        return handle_domain_error(error);
    }

    match state
        .ticket_service
        .ticket_detail(TicketScope::All, path.into_inner())
        .await
    {
        Ok(detail) => HttpResponse::Ok().json(ApiResponse::success(detail)),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for PATCH /api/v1/admin/tickets/{id}
///
/// Moves any ticket to a new workflow state.
pub async fn admin_update_status<U, T>(
    auth: AuthContext,
    path: web::Path<Uuid>,
    state: web::Data<AppState<U, T>>,
    request: web::Json<UpdateStatusRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TicketRepository + 'static,
{
    if let Err(error) = state.auth_service.authorize(auth.user_id, ADMIN_ONLY).await {
        return handle_domain_error(error);
    }

    match state
        .ticket_service
        .update_status(TicketScope::All, path.into_inner(), request.status)
        .await
    {
        Ok(ticket) => HttpResponse::Ok().json(ApiResponse::success(ticket)),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for POST /api/v1/admin/tickets/{id}/assign
///
/// Assigns a ticket to an agent, moving it to `IN_PROGRESS`, or clears
/// the assignment with a null `agent_id`, reopening the ticket. The
/// assignee must be an existing account holding the `AGENT` role.
pub async fn admin_assign_ticket<U, T>(
    auth: AuthContext,
    path: web::Path<Uuid>,
    state: web::Data<AppState<U, T>>,
    request: web::Json<AssignTicketRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TicketRepository + 'static,
{
    if let Err(error) = state.auth_service.authorize(auth.user_id, ADMIN_ONLY).await {
        return handle_domain_error(error);
    }

    match state
        .ticket_service
        .assign_ticket(path.into_inner(), request.agent_id)
        .await
    {
        Ok(ticket) => HttpResponse::Ok().json(ApiResponse::success(ticket)),
        Err(error) => handle_domain_error(error),
    }
}
