/// Project model
///
/// Projects group tasks and carry a membership list (see
/// [`crate::models::project_member`]). A project is visible to its creator
/// and to every listed member.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A project
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Unique project id, assigned by the store
    pub id: i32,

    /// Project name
    pub name: String,

    /// Optional longer description
    pub description: Option<String>,

    /// Optional due date
    pub due_date: Option<DateTime<Utc>>,

    /// Id of the user who created the project
    pub created_by: i32,

    /// When the project was created, stamped by the store
    pub created_at: DateTime<Utc>,
}

/// Input for creating a project
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateProject {
    /// Project name
    #[validate(length(min = 1, max = 200, message = "Name must be 1-200 characters"))]
    pub name: String,

    /// Optional description
    pub description: Option<String>,

    /// Optional due date
    pub due_date: Option<DateTime<Utc>>,

    /// Id of the creating user
    pub created_by: i32,
}
