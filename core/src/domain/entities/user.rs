//! User entity representing a registered account in the QuickDesk system.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Access role of a user account
///
/// Roles form a flat set rather than a hierarchy: an `Admin` is not
/// implicitly an `Agent`. Every permission check names the roles it
/// accepts explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// End user who files and follows their own tickets
    User,
    /// Support agent who works tickets assigned to them
    Agent,
    /// Administrator who manages users and the whole ticket queue
    Admin,
}

impl Role {
    /// Canonical string form, as stored in the database
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "USER",
            Role::Agent => "AGENT",
            Role::Admin => "ADMIN",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "USER" => Ok(Role::User),
            "AGENT" => Ok(Role::Agent),
            "ADMIN" => Ok(Role::Admin),
            _ => Err(format!("Invalid role: {}", s)),
        }
    }
}

/// User entity representing a registered account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Email address used as the login identifier
    pub email: String,

    /// Display name
    pub name: String,

    /// bcrypt hash of the user's password. Never serialized to clients;
    /// the API layer exposes users through profile value objects only.
    #[serde(skip_serializing)]
    pub password_hash: String,

    /// Access role of the account
    pub role: Role,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the user was last updated
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new User instance with the default `User` role
    pub fn new(email: String, name: String, password_hash: String) -> Self {
        Self::with_role(email, name, password_hash, Role::User)
    }

    /// Creates a new User instance with an explicit role
    pub fn with_role(email: String, name: String, password_hash: String, role: Role) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email,
            name,
            password_hash,
            role,
            created_at: now,
            updated_at: now,
        }
    }

    /// Changes the account role
    pub fn set_role(&mut self, role: Role) {
        self.role = role;
        self.updated_at = Utc::now();
    }

    /// Checks if the user is an administrator
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Checks if the user is a support agent
    pub fn is_agent(&self) -> bool {
        self.role == Role::Agent
    }

    /// Checks if the account holds one of the given roles
    pub fn has_any_role(&self, roles: &[Role]) -> bool {
        roles.contains(&self.role)
    }
}
