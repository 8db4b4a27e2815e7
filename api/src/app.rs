//! Application state and factory
//!
//! This module handles the initialization of the application state
//! and provides the factory for creating the Actix-web application.

use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpResponse};

use crate::middleware::{auth::JwtAuth, cors::create_cors};
use crate::routes::auth::{login::login, register::register};
use crate::routes::tickets::{
    comments::{add_comment, list_comments},
    create_ticket::create_ticket,
    list_tickets::list_tickets,
    ticket_detail::ticket_detail,
    ticket_stats::ticket_stats,
};
use crate::routes::{admin, agent};

use qd_core::repositories::{TicketRepository, UserRepository};
use qd_core::services::auth::AuthService;
use qd_core::services::session::SessionService;
use qd_core::services::tickets::TicketService;
use qd_core::services::users::UserService;

/// Application state that holds shared services
pub struct AppState<U, T>
where
    U: UserRepository,
    T: TicketRepository,
{
    pub auth_service: Arc<AuthService<U>>,
    pub user_service: Arc<UserService<U>>,
    pub ticket_service: Arc<TicketService<T, U>>,
    pub session_service: Arc<SessionService>,
}

/// Create and configure the application with all dependencies
///
/// Route layout:
/// - `/api/v1/auth` is public (registration and login)
/// - `/api/v1/tickets` is the reporter surface, session required
/// - `/api/v1/agent` is the agent queue, session required
/// - `/api/v1/admin` is the admin surface, session required
///
/// The session middleware only authenticates; role checks run inside
/// the handlers against the account's current stored role.
pub fn create_app<U, T>(
    app_state: web::Data<AppState<U, T>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    T: TicketRepository + 'static,
{
    // Configure CORS for the current environment
    let cors = create_cors();

    // Session guard shared by every protected scope
    let session_service = app_state.session_service.clone();

    App::new()
        // Add application state
        .app_data(app_state)
        // Add middleware (order matters: CORS first, then logging)
        .wrap(Logger::default())
        .wrap(cors)
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // API v1 routes
        .service(
            web::scope("/api/v1")
                // Public auth routes
                .service(
                    web::scope("/auth")
                        .route("/register", web::post().to(register::<U, T>))
                        .route("/login", web::post().to(login::<U, T>)),
                )
                // Reporter surface: tickets the caller created.
                // "/stats" is registered before "/{id}" so it is not
                // swallowed by the id matcher.
                .service(
                    web::scope("/tickets")
                        .wrap(JwtAuth::new(session_service.clone()))
                        .route("", web::get().to(list_tickets::<U, T>))
                        .route("", web::post().to(create_ticket::<U, T>))
                        .route("/stats", web::get().to(ticket_stats::<U, T>))
                        .route("/{id}", web::get().to(ticket_detail::<U, T>))
                        .route("/{id}/comments", web::get().to(list_comments::<U, T>))
                        .route("/{id}/comments", web::post().to(add_comment::<U, T>)),
                )
                // Agent surface: tickets assigned to the caller
                .service(
                    web::scope("/agent")
                        .wrap(JwtAuth::new(session_service.clone()))
                        .route("/tickets", web::get().to(agent::queue::agent_queue::<U, T>))
                        .route(
                            "/tickets/{id}",
                            web::get().to(agent::queue::agent_ticket_detail::<U, T>),
                        )
                        .route(
                            "/tickets/{id}/status",
                            web::patch().to(agent::status::update_ticket_status::<U, T>),
                        )
                        .route(
                            "/tickets/{id}/comments",
                            web::post().to(agent::comments::agent_add_comment::<U, T>),
                        )
                        .route("/stats", web::get().to(agent::stats::agent_stats::<U, T>)),
                )
                // Admin surface: every ticket and account
                .service(
                    web::scope("/admin")
                        .wrap(JwtAuth::new(session_service))
                        .route("/users", web::get().to(admin::users::list_users::<U, T>))
                        .route(
                            "/users/{id}/role",
                            web::patch().to(admin::users::update_user_role::<U, T>),
                        )
                        .route("/agents", web::get().to(admin::agents::list_agents::<U, T>))
                        .route(
                            "/tickets/{id}",
                            web::get().to(admin::tickets::admin_ticket_detail::<U, T>),
                        )
                        .route(
                            "/tickets/{id}",
                            web::patch().to(admin::tickets::admin_update_status::<U, T>),
                        )
                        .route(
                            "/tickets/{id}/assign",
                            web::post().to(admin::tickets::admin_assign_ticket::<U, T>),
                        )
                        .route("/stats", web::get().to(admin::stats::admin_stats::<U, T>)),
                ),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "quickdesk-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": "not_found",
        "message": "The requested resource was not found"
    }))
}
