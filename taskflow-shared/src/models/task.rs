/// Task model
///
/// Tasks belong to a project, may be assigned to a user, and move through a
/// three-state board: `todo`, `qa`, `done`. The status is the only mutable
/// field; everything else is fixed at creation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

/// Board column a task sits in
///
/// serde rejects any other string at the API boundary, so no undefined
/// status is ever persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    /// Not started
    Todo,

    /// In review
    Qa,

    /// Finished
    Done,
}

impl TaskStatus {
    /// Converts the status to its wire string
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "todo",
            TaskStatus::Qa => "qa",
            TaskStatus::Done => "done",
        }
    }
}

impl Default for TaskStatus {
    fn default() -> Self {
        TaskStatus::Todo
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A task
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique task id, assigned by the store
    pub id: i32,

    /// Task title
    pub title: String,

    /// Optional longer description
    pub description: Option<String>,

    /// Current board status
    pub status: TaskStatus,

    /// Id of the project this task belongs to
    pub project_id: i32,

    /// Id of the assigned user, if any
    pub assigned_to: Option<i32>,

    /// Id of the user who created the task
    pub created_by: i32,

    /// When the task was created, stamped by the store
    pub created_at: DateTime<Utc>,
}

/// Input for creating a task
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTask {
    /// Task title
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,

    /// Optional description
    pub description: Option<String>,

    /// Initial status (defaults to `todo`)
    #[serde(default)]
    pub status: TaskStatus,

    /// Id of the owning project
    pub project_id: i32,

    /// Id of the assigned user, if any
    pub assigned_to: Option<i32>,

    /// Id of the creating user
    pub created_by: i32,
}
