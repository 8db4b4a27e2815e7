//! MySQL repository implementations

mod ticket_repository_impl;
mod user_repository_impl;

pub use ticket_repository_impl::MySqlTicketRepository;
pub use user_repository_impl::MySqlUserRepository;
