//! Value objects representing immutable domain concepts.

pub mod auth_response;
pub mod ticket_stats;
pub mod ticket_views;
pub mod user_profile;

// Re-export commonly used types
pub use auth_response::AuthResponse;
pub use ticket_stats::{GlobalStats, QueueStats};
pub use ticket_views::{CommentView, TicketDetail, TicketSummary};
pub use user_profile::{UserBrief, UserProfile};
