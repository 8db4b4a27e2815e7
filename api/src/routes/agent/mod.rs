//! Agent-facing queue routes
//!
//! Handlers require the `AGENT` role and work inside the `AssignedTo`
//! scope: an agent sees and updates only tickets assigned to them.

pub mod comments;
pub mod queue;
pub mod stats;
pub mod status;
