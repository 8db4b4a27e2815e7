use actix_web::{web, HttpResponse};
use uuid::Uuid;

use crate::app::AppState;
use crate::dto::user::UpdateRoleRequest;
use crate::handlers::error::handle_domain_error;
use crate::middleware::auth::AuthContext;
use crate::routes::ADMIN_ONLY;

use qd_core::repositories::{TicketRepository, UserRepository};
use qd_shared::types::response::ApiResponse;

/// Handler for GET /api/v1/admin/users
///
/// Lists every account, newest first. Profiles carry no password
/// hashes.
pub async fn list_users<U, T>(
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

    match state.user_service.list_users().await {
        Ok(users) => HttpResponse::Ok().json(ApiResponse::success(users)),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for PATCH /api/v1/admin/users/{id}/role
///
/// Changes an account's role. The new role takes effect on the
/// account's next request: sessions carry no role, so nothing needs to
/// be reissued.
pub async fn update_user_role<U, T>(
    auth: AuthContext,
    path: web::Path<Uuid>,
    state: web::Data<AppState<U, T>>,
    request: web::Json<UpdateRoleRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TicketRepository + 'static,
{
    if let Err(error) = state.auth_service.authorize(auth.user_id, ADMIN_ONLY).await {
        return handle_domain_error(error);
    }

    match state
        .user_service
        .update_role(path.into_inner(), request.role)
        .await
    {
        Ok(profile) => HttpResponse::Ok().json(ApiResponse::success(profile)),
        Err(error) => handle_domain_error(error),
    }
}
