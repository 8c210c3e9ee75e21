/// Subtask model
///
/// A checklist item under a task. The `completed` flag is the only mutable
/// field.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A subtask
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subtask {
    /// Unique subtask id, assigned by the store
    pub id: i32,

    /// Subtask title
    pub title: String,

    /// Whether the item has been checked off
    pub completed: bool,

    /// Id of the parent task
    pub task_id: i32,

    /// When the subtask was created, stamped by the store
    pub created_at: DateTime<Utc>,
}

/// Input for creating a subtask
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateSubtask {
    /// Subtask title
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,

    /// Initial completion state (defaults to false)
    #[serde(default)]
    pub completed: bool,

    /// Id of the parent task
    pub task_id: i32,
}
