use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use crate::app::AppState;
use crate::dto::ticket::AddCommentRequest;
use crate::handlers::error::{handle_domain_error, handle_validation_errors};
use crate::middleware::auth::AuthContext;
use crate::routes::AGENT_ONLY;

use qd_core::repositories::{TicketRepository, TicketScope, UserRepository};
use qd_shared::types::response::ApiResponse;

/// Handler for POST /api/v1/agent/tickets/{id}/comments
///
/// Adds a comment to a ticket assigned to the calling agent. Tickets
/// assigned elsewhere answer 404, so agents cannot write into queues
/// that are not theirs.
pub async fn agent_add_comment<U, T>(
    auth: AuthContext,
    path: web::Path<Uuid>,
    state: web::Data<AppState<U, T>>,
    request: web::Json<AddCommentRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TicketRepository + 'static,
{
    let user = match state.auth_service.authorize(auth.user_id, AGENT_ONLY).await {
        Ok(user) => user,
        Err(error) => return handle_domain_error(error),
    };

    if let Err(errors) = request.validate() {
        return handle_validation_errors(&errors);
    }

    match state
        .ticket_service
        .add_comment(
            &user,
            TicketScope::AssignedTo(user.id),
            path.into_inner(),
            &request.content,
        )
        .await
    {
        Ok(comment) => HttpResponse::Created().json(ApiResponse::success(comment)),
        Err(error) => handle_domain_error(error),
    }
}
