use std::sync::Arc;

use actix_web::{web, HttpServer};
use dotenvy::dotenv;
use log::{error, info};

use qd_api::app::{create_app, AppState};
use qd_core::services::auth::{AuthService, AuthServiceConfig};
use qd_core::services::session::{SessionService, SessionServiceConfig};
use qd_core::services::tickets::TicketService;
use qd_core::services::users::UserService;
use qd_infra::database::{DatabasePool, MySqlTicketRepository, MySqlUserRepository};
use qd_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting QuickDesk API Server");

    // Load configuration. A missing JWT secret is fatal: the server
    // must not boot signing sessions with a guessable key.
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    // Connect to MySQL
    let pool = match DatabasePool::new(config.database.clone()).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("Failed to connect to database: {}", e);
            std::process::exit(1);
        }
    };
    info!("Database connected. {}", pool.get_statistics());

    // Wire repositories and services
    let user_repository = Arc::new(MySqlUserRepository::new(pool.get_pool().clone()));
    let ticket_repository = Arc::new(MySqlTicketRepository::new(pool.get_pool().clone()));

    let session_service = Arc::new(SessionService::new(SessionServiceConfig {
        jwt_secret: config.security.jwt.secret.clone(),
        token_ttl_hours: config.security.jwt.token_ttl_hours,
    }));
    let auth_service = Arc::new(AuthService::new(
        user_repository.clone(),
        session_service.clone(),
        AuthServiceConfig::with_bcrypt_cost(config.security.bcrypt_cost),
    ));
    let user_service = Arc::new(UserService::new(user_repository.clone()));
    let ticket_service = Arc::new(TicketService::new(ticket_repository, user_repository));

    let app_state = web::Data::new(AppState {
        auth_service,
        user_service,
        ticket_service,
        session_service,
    });

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    HttpServer::new(move || create_app(app_state.clone()))
        .bind(&bind_address)?
        .run()
        .await
}
