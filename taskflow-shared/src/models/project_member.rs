/// Project member model
///
/// Join entity linking a user to a project. Membership queries usually
/// resolve through to the `User` records rather than returning these rows.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A project membership row
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectMember {
    /// Unique membership id, assigned by the store
    pub id: i32,

    /// Id of the project
    pub project_id: i32,

    /// Id of the member user
    pub user_id: i32,

    /// When the membership was created, stamped by the store
    pub created_at: DateTime<Utc>,
}

/// Input for adding a member to a project
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectMember {
    /// Id of the project
    pub project_id: i32,

    /// Id of the user to add
    pub user_id: i32,
}
