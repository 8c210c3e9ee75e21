/// Time log model
///
/// A record of hours worked against a task on a given date. Hours are kept
/// as the text the caller submitted (e.g. "2.5") and only parsed to a number
/// when an aggregation needs to sum them, so no rounding happens at rest.
/// The UI submits half-hour increments between 0.5 and 24; the store does
/// not enforce that range.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A logged block of work
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeLog {
    /// Unique time log id, assigned by the store
    pub id: i32,

    /// Id of the task the hours were worked on
    pub task_id: i32,

    /// Id of the user who logged the hours
    pub user_id: i32,

    /// Hours worked, as submitted (decimal text such as "2.5")
    pub hours: String,

    /// The day the work happened
    pub date: DateTime<Utc>,

    /// Optional free-form notes
    pub notes: Option<String>,

    /// When the log entry was created, stamped by the store
    pub created_at: DateTime<Utc>,
}

/// Input for creating a time log
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTimeLog {
    /// Id of the task worked on
    pub task_id: i32,

    /// Id of the logging user
    pub user_id: i32,

    /// Hours worked, as decimal text
    #[validate(length(min = 1, max = 16, message = "Hours must be 1-16 characters"))]
    pub hours: String,

    /// The day the work happened
    pub date: DateTime<Utc>,

    /// Optional notes
    pub notes: Option<String>,
}
