/// Storage and query layer
///
/// [`Storage`] is the single seam between the API layer and persistence.
/// It owns identity assignment and `created_at` stamping, answers filtered
/// lookups, and computes the derived analytics (summed hours, counts).
/// The API layer never sees how records are laid out.
///
/// The trait is object safe; handlers hold an `Arc<dyn Storage>` constructed
/// once per process (or per test). The shipped backend is the in-memory
/// [`memory::MemStorage`]; a relational backend can replace it without
/// touching callers.
///
/// # Failure semantics
///
/// Lookups and partial updates against an unknown id return `Ok(None)`, and
/// aggregations over an unknown id return an empty list or a zero sum; "not
/// found" is a value here, never an error. Errors are reserved for genuine
/// faults: a duplicate email, a dangling foreign key at write time, or a
/// stored hours value that no longer parses as a number.

pub mod memory;

use crate::models::{
    CreateProject, CreateProjectMember, CreateSubtask, CreateTask, CreateTimeLog, CreateUser,
    Project, ProjectMember, Subtask, Task, TaskStatus, TimeLog, User,
};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Storage error types
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A user with this email already exists
    #[error("a user with email {0} already exists")]
    EmailTaken(String),

    /// A write referenced an entity that does not exist
    #[error("{entity} {id} does not exist")]
    MissingReference {
        /// Entity type the reference points at
        entity: &'static str,
        /// The dangling id
        id: i32,
    },

    /// A stored hours value could not be parsed during aggregation
    #[error("time log {id} has malformed hours value {value:?}")]
    MalformedHours {
        /// Id of the offending time log
        id: i32,
        /// The raw stored text
        value: String,
    },
}

/// Storage result type alias
pub type StorageResult<T> = Result<T, StorageError>;

/// Dashboard snapshot combining four independent counts
///
/// `active_projects` counts every project ever created; projects carry no
/// lifecycle field, so none is ever inactive. The name is kept for wire
/// compatibility with the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectStats {
    /// Total project count
    pub active_projects: usize,

    /// Tasks with status `done`
    pub completed_tasks: usize,

    /// Sum of hours over every time log, system-wide
    pub total_hours: f64,

    /// Total user count
    pub team_members: usize,
}

/// Keyed storage plus multi-entity queries and aggregates
///
/// Every insert assigns the next id for its entity type (monotonically
/// increasing, never reused) and stamps `created_at`. Users and projects are
/// immutable once created; tasks support a status-only update and subtasks a
/// completed-only update. Nothing is ever deleted.
///
/// Foreign keys are checked at write time: inserting a task into a missing
/// project, or a time log against a missing task or user, fails with
/// [`StorageError::MissingReference`].
#[async_trait]
pub trait Storage: Send + Sync {
    // Users

    /// Looks up a user by id
    async fn get_user(&self, id: i32) -> StorageResult<Option<User>>;

    /// Looks up a user by exact email
    async fn get_user_by_email(&self, email: &str) -> StorageResult<Option<User>>;

    /// Lists all users in insertion order
    async fn get_users(&self) -> StorageResult<Vec<User>>;

    /// Creates a user, enforcing email uniqueness
    async fn create_user(&self, user: CreateUser) -> StorageResult<User>;

    // Projects

    /// Looks up a project by id
    async fn get_project(&self, id: i32) -> StorageResult<Option<Project>>;

    /// Lists all projects in insertion order
    async fn get_projects(&self) -> StorageResult<Vec<Project>>;

    /// Lists projects the user created or is a member of
    ///
    /// Union of the two sets, deduplicated by project id: a creator who is
    /// also a listed member sees the project once.
    async fn get_projects_by_user(&self, user_id: i32) -> StorageResult<Vec<Project>>;

    /// Creates a project
    async fn create_project(&self, project: CreateProject) -> StorageResult<Project>;

    // Tasks

    /// Looks up a task by id
    async fn get_task(&self, id: i32) -> StorageResult<Option<Task>>;

    /// Lists all tasks in insertion order
    async fn get_tasks(&self) -> StorageResult<Vec<Task>>;

    /// Lists tasks belonging to a project
    async fn get_tasks_by_project(&self, project_id: i32) -> StorageResult<Vec<Task>>;

    /// Lists tasks assigned to a user
    async fn get_tasks_by_user(&self, user_id: i32) -> StorageResult<Vec<Task>>;

    /// Creates a task
    async fn create_task(&self, task: CreateTask) -> StorageResult<Task>;

    /// Updates a task's status, returning the updated record
    ///
    /// Returns `Ok(None)` if the task does not exist. All other fields,
    /// including `created_at`, are left untouched.
    async fn update_task_status(&self, id: i32, status: TaskStatus)
        -> StorageResult<Option<Task>>;

    // Subtasks

    /// Lists subtasks under a task
    async fn get_subtasks_by_task(&self, task_id: i32) -> StorageResult<Vec<Subtask>>;

    /// Creates a subtask
    async fn create_subtask(&self, subtask: CreateSubtask) -> StorageResult<Subtask>;

    /// Updates a subtask's completed flag, returning the updated record
    async fn update_subtask_status(
        &self,
        id: i32,
        completed: bool,
    ) -> StorageResult<Option<Subtask>>;

    // Time logs

    /// Lists time logs recorded against a task
    async fn get_time_logs_by_task(&self, task_id: i32) -> StorageResult<Vec<TimeLog>>;

    /// Lists time logs recorded by a user
    async fn get_time_logs_by_user(&self, user_id: i32) -> StorageResult<Vec<TimeLog>>;

    /// Creates a time log
    async fn create_time_log(&self, time_log: CreateTimeLog) -> StorageResult<TimeLog>;

    // Project members

    /// Resolves a project's membership rows to the member `User` records
    ///
    /// One user per distinct membership; order is not guaranteed.
    async fn get_project_members(&self, project_id: i32) -> StorageResult<Vec<User>>;

    /// Adds a user to a project
    async fn add_project_member(
        &self,
        member: CreateProjectMember,
    ) -> StorageResult<ProjectMember>;

    // Analytics

    /// Sums hours over every time log against the project's tasks
    async fn hours_by_project(&self, project_id: i32) -> StorageResult<f64>;

    /// Sums hours over every time log recorded by the user
    async fn hours_by_user(&self, user_id: i32) -> StorageResult<f64>;

    /// Computes the dashboard snapshot
    async fn project_stats(&self) -> StorageResult<ProjectStats>;
}
