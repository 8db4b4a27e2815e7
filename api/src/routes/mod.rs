//! HTTP route handlers grouped by API surface
//!
//! - `auth` - public registration and login
//! - `tickets` - the reporter surface, scoped to tickets the caller created
//! - `agent` - the agent queue, scoped to tickets assigned to the caller
//! - `admin` - administrative endpoints over every ticket and account

pub mod admin;
pub mod agent;
pub mod auth;
pub mod tickets;

use qd_core::domain::entities::user::Role;

/// Roles allowed on the reporter surface: every authenticated account
pub(crate) const ANY_ROLE: &[Role] = &[Role::User, Role::Agent, Role::Admin];

/// Roles allowed on the agent surface
pub(crate) const AGENT_ONLY: &[Role] = &[Role::Agent];

/// Roles allowed on the admin surface
pub(crate) const ADMIN_ONLY: &[Role] = &[Role::Admin];
