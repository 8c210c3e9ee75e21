/// Domain models
///
/// Each entity has two shapes: the full record (with `id` and `created_at`,
/// both assigned by the store) and a `Create*` insert shape holding only the
/// caller-supplied fields. All wire types serialize with camelCase field
/// names, matching the JSON contract the UI consumes.

pub mod project;
pub mod project_member;
pub mod subtask;
pub mod task;
pub mod time_log;
pub mod user;

pub use project::{CreateProject, Project};
pub use project_member::{CreateProjectMember, ProjectMember};
pub use subtask::{CreateSubtask, Subtask};
pub use task::{CreateTask, Task, TaskStatus};
pub use time_log::{CreateTimeLog, TimeLog};
pub use user::{CreateUser, User, UserRole};
