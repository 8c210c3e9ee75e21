/// User model
///
/// Users authenticate against the API and are referenced by nearly every
/// other entity: projects they created, tasks assigned to them, time logs
/// they recorded, and project memberships.
///
/// Emails are unique across all users; the store rejects a duplicate at
/// insert time rather than discovering it later.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Role assigned to a user account
///
/// Admins create projects and tasks; regular users log hours against the
/// tasks assigned to them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Can create projects and tasks and manage members
    Admin,

    /// Can view assigned work and log hours
    User,
}

impl UserRole {
    /// Converts the role to its wire string
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::User => "user",
        }
    }

    /// True for administrator accounts
    pub fn is_admin(&self) -> bool {
        matches!(self, UserRole::Admin)
    }
}

impl Default for UserRole {
    fn default() -> Self {
        UserRole::User
    }
}

/// A user account
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user id, assigned by the store
    pub id: i32,

    /// Email address, unique across all users
    pub email: String,

    /// Display name
    pub name: String,

    /// Account role
    pub role: UserRole,

    /// When the account was created, stamped by the store
    pub created_at: DateTime<Utc>,
}

/// Input for creating a user
///
/// `id` and `created_at` are assigned by the store and never supplied by
/// the caller.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUser {
    /// Email address (must be unique)
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    /// Display name
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    /// Account role (defaults to `user`)
    #[serde(default)]
    pub role: UserRole,
}
