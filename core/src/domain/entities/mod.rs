//! Domain entities representing core business objects.

pub mod session;
pub mod ticket;
pub mod user;

// Re-export commonly used types
pub use session::{Claims, SESSION_TTL_HOURS};
pub use ticket::{Comment, Ticket, TicketPriority, TicketStatus};
pub use user::{Role, User};
