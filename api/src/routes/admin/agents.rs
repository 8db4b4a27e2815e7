use actix_web::{web, HttpResponse};

use crate::app::AppState;
use crate::handlers::error::handle_domain_error;
use crate::middleware::auth::AuthContext;
use crate::routes::ADMIN_ONLY;

use qd_core::repositories::{TicketRepository, UserRepository};
use qd_shared::types::response::ApiResponse;

/// Handler for GET /api/v1/admin/agents
///
/// Lists every account holding the `AGENT` role, for the assignment
/// picker.
pub async fn list_agents<U, T>(
    auth: AuthContext,
    state: web::Data<AppState<U, T>>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TicketRepository + 'static,
{
    if let Err(error) = state.auth_service.authorize(auth.user_id, ADMIN_ONLY).await {
        return handle_domain_error(error);
    }

    match state.user_service.list_agents().await {
        Ok(agents) => HttpResponse::Ok().json(ApiResponse::success(agents)),
        Err(error) => handle_domain_error(error),
    }
}
