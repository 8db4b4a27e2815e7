use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use crate::app::AppState;
use crate::dto::ticket::AddCommentRequest;
use crate::handlers::error::{handle_domain_error, handle_validation_errors};
use crate::middleware::auth::AuthContext;
use crate::routes::ANY_ROLE;

use qd_core::domain::entities::user::{Role, User};
use qd_core::repositories::{TicketRepository, TicketScope, UserRepository};
use qd_shared::types::response::ApiResponse;

/// Maps a caller's role to their comment-visibility scope: admins see
/// every thread, agents the threads of tickets assigned to them, and
/// reporters the threads of tickets they created.
fn visibility_scope(user: &User) -> TicketScope {
    match user.role {
        Role::Admin => TicketScope::All,
        Role::Agent => TicketScope::AssignedTo(user.id),
        Role::User => TicketScope::CreatedBy(user.id),
    }
}

/// Handler for GET /api/v1/tickets/{id}/comments
///
/// Returns the ticket's comment thread in chronological order, oldest
/// first. Tickets outside the caller's scope answer 404.
pub async fn list_comments<U, T>(
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
        .list_comments(visibility_scope(&user), path.into_inner())
        .await
    {
        Ok(comments) => HttpResponse::Ok().json(ApiResponse::success(comments)),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for POST /api/v1/tickets/{id}/comments
///
/// Adds a comment to one of the caller's own tickets.
///
/// # Responses
///
/// * `201 Created` - Body carries the new comment
/// * `400 Bad Request` - Comment empty or too long
/// * `404 Not Found` - Ticket unknown or not created by the caller
pub async fn add_comment<U, T>(
    auth: AuthContext,
    path: web::Path<Uuid>,
    state: web::Data<AppState<U, T>>,
    request: web::Json<AddCommentRequest>,
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
        .add_comment(
            &user,
            TicketScope::CreatedBy(user.id),
            path.into_inner(),
            &request.content,
        )
        .await
    {
        Ok(comment) => HttpResponse::Created().json(ApiResponse::success(comment)),
        Err(error) => handle_domain_error(error),
    }
}
