//! Business services containing domain logic and use cases.

pub mod auth;
pub mod session;
pub mod tickets;
pub mod users;

// Re-export commonly used types
pub use auth::{AuthService, AuthServiceConfig};
pub use session::{SessionService, SessionServiceConfig};
pub use tickets::TicketService;
pub use users::UserService;
