use actix_web::{web, HttpResponse};

use crate::app::AppState;
use crate::handlers::error::handle_domain_error;
use crate::middleware::auth::AuthContext;
use crate::routes::ANY_ROLE;

use qd_core::repositories::{TicketRepository, TicketScope, UserRepository};
use qd_shared::types::response::ApiResponse;

/// Handler for GET /api/v1/tickets
///
/// Lists the caller's own tickets, newest first.
pub async fn list_tickets<U, T>(
    auth: AuthContext,
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
        .list_tickets(TicketScope::CreatedBy(user.id))
        .await
    {
        Ok(tickets) => HttpResponse::Ok().json(ApiResponse::success(tickets)),
        Err(error) => handle_domain_error(error),
    }
}
