use serde::{Deserialize, Serialize};

use qd_core::domain::entities::user::Role;

/// Request body for PATCH /api/v1/admin/users/{id}/role
///
/// Unknown role strings are rejected during deserialization, before
/// the handler runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateRoleRequest {
    pub role: Role,
}
