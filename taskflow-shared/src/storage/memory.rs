/// In-memory storage backend
///
/// Each entity type lives in its own arena: a `BTreeMap` keyed by id plus a
/// monotonically increasing id counter. Iterating a `BTreeMap` yields rows in
/// id order, which is insertion order, so `list` operations come back in the
/// order records were created.
///
/// A single `tokio::sync::RwLock` guards all collections. That serializes
/// writes (two inserts can never race to the same id) and lets a write check
/// foreign keys against sibling collections atomically. There is no
/// cross-collection transactional requirement beyond that, and concurrent
/// status updates to the same task interleave last-write-wins by design.

use crate::models::{
    CreateProject, CreateProjectMember, CreateSubtask, CreateTask, CreateTimeLog, CreateUser,
    Project, ProjectMember, Subtask, Task, TaskStatus, TimeLog, User,
};
use crate::storage::{ProjectStats, Storage, StorageError, StorageResult};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

/// Id-keyed arena for one entity type
#[derive(Debug)]
struct Table<T> {
    rows: BTreeMap<i32, T>,
    next_id: i32,
}

impl<T: Clone> Table<T> {
    fn new() -> Self {
        Table {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Claims the next id. Ids start at 1 and are never reused.
    fn claim_id(&mut self) -> i32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn get(&self, id: i32) -> Option<T> {
        self.rows.get(&id).cloned()
    }

    fn contains(&self, id: i32) -> bool {
        self.rows.contains_key(&id)
    }

    fn list(&self) -> Vec<T> {
        self.rows.values().cloned().collect()
    }

    fn filter(&self, pred: impl Fn(&T) -> bool) -> Vec<T> {
        self.rows.values().filter(|row| pred(row)).cloned().collect()
    }
}

/// All collections behind the single lock
#[derive(Debug)]
struct Tables {
    users: Table<User>,
    projects: Table<Project>,
    tasks: Table<Task>,
    subtasks: Table<Subtask>,
    time_logs: Table<TimeLog>,
    project_members: Table<ProjectMember>,
}

impl Tables {
    fn new() -> Self {
        Tables {
            users: Table::new(),
            projects: Table::new(),
            tasks: Table::new(),
            subtasks: Table::new(),
            time_logs: Table::new(),
            project_members: Table::new(),
        }
    }

    fn check_user(&self, id: i32) -> StorageResult<()> {
        if self.users.contains(id) {
            Ok(())
        } else {
            Err(StorageError::MissingReference { entity: "user", id })
        }
    }

    fn check_project(&self, id: i32) -> StorageResult<()> {
        if self.projects.contains(id) {
            Ok(())
        } else {
            Err(StorageError::MissingReference {
                entity: "project",
                id,
            })
        }
    }

    fn check_task(&self, id: i32) -> StorageResult<()> {
        if self.tasks.contains(id) {
            Ok(())
        } else {
            Err(StorageError::MissingReference { entity: "task", id })
        }
    }
}

/// Parses a stored hours value for summation
///
/// Hours live as text so nothing is rounded at rest; a value that no longer
/// parses is corrupted data and must surface as a fault, not a silent zero.
fn parse_hours(log: &TimeLog) -> StorageResult<f64> {
    log.hours
        .trim()
        .parse::<f64>()
        .map_err(|_| StorageError::MalformedHours {
            id: log.id,
            value: log.hours.clone(),
        })
}

/// In-memory [`Storage`] implementation
///
/// Construct one per process (or per test) and share it via
/// `Arc<dyn Storage>`.
///
/// # Example
///
/// ```
/// use taskflow_shared::models::{CreateUser, UserRole};
/// use taskflow_shared::storage::{memory::MemStorage, Storage};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let storage = MemStorage::new();
/// let user = storage
///     .create_user(CreateUser {
///         email: "ada@example.com".to_string(),
///         name: "Ada".to_string(),
///         role: UserRole::Admin,
///     })
///     .await?;
/// assert_eq!(user.id, 1);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct MemStorage {
    inner: RwLock<Tables>,
}

impl MemStorage {
    /// Creates an empty store
    pub fn new() -> Self {
        MemStorage {
            inner: RwLock::new(Tables::new()),
        }
    }
}

impl Default for MemStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Storage for MemStorage {
    async fn get_user(&self, id: i32) -> StorageResult<Option<User>> {
        Ok(self.inner.read().await.users.get(id))
    }

    async fn get_user_by_email(&self, email: &str) -> StorageResult<Option<User>> {
        let tables = self.inner.read().await;
        Ok(tables
            .users
            .rows
            .values()
            .find(|user| user.email == email)
            .cloned())
    }

    async fn get_users(&self) -> StorageResult<Vec<User>> {
        Ok(self.inner.read().await.users.list())
    }

    async fn create_user(&self, user: CreateUser) -> StorageResult<User> {
        let mut tables = self.inner.write().await;
        if tables.users.rows.values().any(|u| u.email == user.email) {
            return Err(StorageError::EmailTaken(user.email));
        }
        let id = tables.users.claim_id();
        let record = User {
            id,
            email: user.email,
            name: user.name,
            role: user.role,
            created_at: Utc::now(),
        };
        tables.users.rows.insert(id, record.clone());
        tracing::debug!(user_id = id, "created user");
        Ok(record)
    }

    async fn get_project(&self, id: i32) -> StorageResult<Option<Project>> {
        Ok(self.inner.read().await.projects.get(id))
    }

    async fn get_projects(&self) -> StorageResult<Vec<Project>> {
        Ok(self.inner.read().await.projects.list())
    }

    async fn get_projects_by_user(&self, user_id: i32) -> StorageResult<Vec<Project>> {
        let tables = self.inner.read().await;
        let member_of: Vec<i32> = tables
            .project_members
            .rows
            .values()
            .filter(|pm| pm.user_id == user_id)
            .map(|pm| pm.project_id)
            .collect();

        // Creator ∪ member, deduplicated because each project appears once
        // in the arena regardless of how many clauses match it.
        Ok(tables
            .projects
            .filter(|p| p.created_by == user_id || member_of.contains(&p.id)))
    }

    async fn create_project(&self, project: CreateProject) -> StorageResult<Project> {
        let mut tables = self.inner.write().await;
        tables.check_user(project.created_by)?;
        let id = tables.projects.claim_id();
        let record = Project {
            id,
            name: project.name,
            description: project.description,
            due_date: project.due_date,
            created_by: project.created_by,
            created_at: Utc::now(),
        };
        tables.projects.rows.insert(id, record.clone());
        tracing::debug!(project_id = id, "created project");
        Ok(record)
    }

    async fn get_task(&self, id: i32) -> StorageResult<Option<Task>> {
        Ok(self.inner.read().await.tasks.get(id))
    }

    async fn get_tasks(&self) -> StorageResult<Vec<Task>> {
        Ok(self.inner.read().await.tasks.list())
    }

    async fn get_tasks_by_project(&self, project_id: i32) -> StorageResult<Vec<Task>> {
        let tables = self.inner.read().await;
        Ok(tables.tasks.filter(|task| task.project_id == project_id))
    }

    async fn get_tasks_by_user(&self, user_id: i32) -> StorageResult<Vec<Task>> {
        let tables = self.inner.read().await;
        Ok(tables.tasks.filter(|task| task.assigned_to == Some(user_id)))
    }

    async fn create_task(&self, task: CreateTask) -> StorageResult<Task> {
        let mut tables = self.inner.write().await;
        tables.check_project(task.project_id)?;
        tables.check_user(task.created_by)?;
        if let Some(assignee) = task.assigned_to {
            tables.check_user(assignee)?;
        }
        let id = tables.tasks.claim_id();
        let record = Task {
            id,
            title: task.title,
            description: task.description,
            status: task.status,
            project_id: task.project_id,
            assigned_to: task.assigned_to,
            created_by: task.created_by,
            created_at: Utc::now(),
        };
        tables.tasks.rows.insert(id, record.clone());
        tracing::debug!(task_id = id, project_id = record.project_id, "created task");
        Ok(record)
    }

    async fn update_task_status(
        &self,
        id: i32,
        status: TaskStatus,
    ) -> StorageResult<Option<Task>> {
        let mut tables = self.inner.write().await;
        match tables.tasks.rows.get_mut(&id) {
            Some(task) => {
                task.status = status;
                Ok(Some(task.clone()))
            }
            None => Ok(None),
        }
    }

    async fn get_subtasks_by_task(&self, task_id: i32) -> StorageResult<Vec<Subtask>> {
        let tables = self.inner.read().await;
        Ok(tables.subtasks.filter(|subtask| subtask.task_id == task_id))
    }

    async fn create_subtask(&self, subtask: CreateSubtask) -> StorageResult<Subtask> {
        let mut tables = self.inner.write().await;
        tables.check_task(subtask.task_id)?;
        let id = tables.subtasks.claim_id();
        let record = Subtask {
            id,
            title: subtask.title,
            completed: subtask.completed,
            task_id: subtask.task_id,
            created_at: Utc::now(),
        };
        tables.subtasks.rows.insert(id, record.clone());
        Ok(record)
    }

    async fn update_subtask_status(
        &self,
        id: i32,
        completed: bool,
    ) -> StorageResult<Option<Subtask>> {
        let mut tables = self.inner.write().await;
        match tables.subtasks.rows.get_mut(&id) {
            Some(subtask) => {
                subtask.completed = completed;
                Ok(Some(subtask.clone()))
            }
            None => Ok(None),
        }
    }

    async fn get_time_logs_by_task(&self, task_id: i32) -> StorageResult<Vec<TimeLog>> {
        let tables = self.inner.read().await;
        Ok(tables.time_logs.filter(|log| log.task_id == task_id))
    }

    async fn get_time_logs_by_user(&self, user_id: i32) -> StorageResult<Vec<TimeLog>> {
        let tables = self.inner.read().await;
        Ok(tables.time_logs.filter(|log| log.user_id == user_id))
    }

    async fn create_time_log(&self, time_log: CreateTimeLog) -> StorageResult<TimeLog> {
        let mut tables = self.inner.write().await;
        tables.check_task(time_log.task_id)?;
        tables.check_user(time_log.user_id)?;
        let id = tables.time_logs.claim_id();
        let record = TimeLog {
            id,
            task_id: time_log.task_id,
            user_id: time_log.user_id,
            hours: time_log.hours,
            date: time_log.date,
            notes: time_log.notes,
            created_at: Utc::now(),
        };
        tables.time_logs.rows.insert(id, record.clone());
        Ok(record)
    }

    async fn get_project_members(&self, project_id: i32) -> StorageResult<Vec<User>> {
        let tables = self.inner.read().await;
        let member_ids: Vec<i32> = tables
            .project_members
            .rows
            .values()
            .filter(|pm| pm.project_id == project_id)
            .map(|pm| pm.user_id)
            .collect();

        Ok(tables.users.filter(|user| member_ids.contains(&user.id)))
    }

    async fn add_project_member(
        &self,
        member: CreateProjectMember,
    ) -> StorageResult<ProjectMember> {
        let mut tables = self.inner.write().await;
        tables.check_project(member.project_id)?;
        tables.check_user(member.user_id)?;
        let id = tables.project_members.claim_id();
        let record = ProjectMember {
            id,
            project_id: member.project_id,
            user_id: member.user_id,
            created_at: Utc::now(),
        };
        tables.project_members.rows.insert(id, record.clone());
        Ok(record)
    }

    async fn hours_by_project(&self, project_id: i32) -> StorageResult<f64> {
        let tables = self.inner.read().await;
        let task_ids: Vec<i32> = tables
            .tasks
            .rows
            .values()
            .filter(|task| task.project_id == project_id)
            .map(|task| task.id)
            .collect();

        let mut total = 0.0;
        for log in tables.time_logs.rows.values() {
            if task_ids.contains(&log.task_id) {
                total += parse_hours(log)?;
            }
        }
        Ok(total)
    }

    async fn hours_by_user(&self, user_id: i32) -> StorageResult<f64> {
        let tables = self.inner.read().await;
        let mut total = 0.0;
        for log in tables.time_logs.rows.values() {
            if log.user_id == user_id {
                total += parse_hours(log)?;
            }
        }
        Ok(total)
    }

    async fn project_stats(&self) -> StorageResult<ProjectStats> {
        let tables = self.inner.read().await;

        let completed_tasks = tables
            .tasks
            .rows
            .values()
            .filter(|task| task.status == TaskStatus::Done)
            .count();

        let mut total_hours = 0.0;
        for log in tables.time_logs.rows.values() {
            total_hours += parse_hours(log)?;
        }

        Ok(ProjectStats {
            active_projects: tables.projects.rows.len(),
            completed_tasks,
            total_hours,
            team_members: tables.users.rows.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserRole;

    async fn seed_user(storage: &MemStorage, email: &str) -> User {
        storage
            .create_user(CreateUser {
                email: email.to_string(),
                name: "Test User".to_string(),
                role: UserRole::User,
            })
            .await
            .unwrap()
    }

    async fn seed_project(storage: &MemStorage, name: &str, created_by: i32) -> Project {
        storage
            .create_project(CreateProject {
                name: name.to_string(),
                description: None,
                due_date: None,
                created_by,
            })
            .await
            .unwrap()
    }

    async fn seed_task(storage: &MemStorage, project_id: i32, created_by: i32) -> Task {
        storage
            .create_task(CreateTask {
                title: "Task".to_string(),
                description: None,
                status: TaskStatus::Todo,
                project_id,
                assigned_to: None,
                created_by,
            })
            .await
            .unwrap()
    }

    async fn seed_time_log(storage: &MemStorage, task_id: i32, user_id: i32, hours: &str) {
        storage
            .create_time_log(CreateTimeLog {
                task_id,
                user_id,
                hours: hours.to_string(),
                date: Utc::now(),
                notes: None,
            })
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_ids_are_monotonic_per_type() {
        let storage = MemStorage::new();
        let u1 = seed_user(&storage, "a@example.com").await;
        let u2 = seed_user(&storage, "b@example.com").await;
        let u3 = seed_user(&storage, "c@example.com").await;
        assert_eq!((u1.id, u2.id, u3.id), (1, 2, 3));

        // Id spaces are per-type: the first project is also id 1.
        let p1 = seed_project(&storage, "P1", u1.id).await;
        assert_eq!(p1.id, 1);
    }

    #[tokio::test]
    async fn test_duplicate_email_is_rejected() {
        let storage = MemStorage::new();
        seed_user(&storage, "ada@example.com").await;

        let err = storage
            .create_user(CreateUser {
                email: "ada@example.com".to_string(),
                name: "Imposter".to_string(),
                role: UserRole::Admin,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, StorageError::EmailTaken(_)));
        // The failed insert must not have consumed an id or stored anything.
        assert_eq!(storage.get_users().await.unwrap().len(), 1);
        let next = seed_user(&storage, "b@example.com").await;
        assert_eq!(next.id, 2);
    }

    #[tokio::test]
    async fn test_get_user_by_email() {
        let storage = MemStorage::new();
        let user = seed_user(&storage, "ada@example.com").await;

        let found = storage
            .get_user_by_email("ada@example.com")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.id, user.id);
        assert!(storage
            .get_user_by_email("nobody@example.com")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_projects_by_user_unions_creator_and_membership() {
        let storage = MemStorage::new();
        let ada = seed_user(&storage, "ada@example.com").await;
        let other = seed_user(&storage, "other@example.com").await;

        let p1 = seed_project(&storage, "Created by Ada", ada.id).await;
        let p2 = seed_project(&storage, "Ada is a member", other.id).await;
        let _p3 = seed_project(&storage, "Unrelated", other.id).await;

        storage
            .add_project_member(CreateProjectMember {
                project_id: p2.id,
                user_id: ada.id,
            })
            .await
            .unwrap();
        // Creator listed as a member too: must still appear exactly once.
        storage
            .add_project_member(CreateProjectMember {
                project_id: p1.id,
                user_id: ada.id,
            })
            .await
            .unwrap();

        let mut ids: Vec<i32> = storage
            .get_projects_by_user(ada.id)
            .await
            .unwrap()
            .iter()
            .map(|p| p.id)
            .collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![p1.id, p2.id]);
    }

    #[tokio::test]
    async fn test_project_members_resolve_to_users() {
        let storage = MemStorage::new();
        let ada = seed_user(&storage, "ada@example.com").await;
        let bob = seed_user(&storage, "bob@example.com").await;
        let project = seed_project(&storage, "P", ada.id).await;

        storage
            .add_project_member(CreateProjectMember {
                project_id: project.id,
                user_id: bob.id,
            })
            .await
            .unwrap();

        let members = storage.get_project_members(project.id).await.unwrap();
        assert_eq!(members.len(), 1);
        assert_eq!(members[0].email, "bob@example.com");

        // Unknown project: empty, not an error.
        assert!(storage.get_project_members(999).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_task_status_round_trip_preserves_other_fields() {
        let storage = MemStorage::new();
        let ada = seed_user(&storage, "ada@example.com").await;
        let project = seed_project(&storage, "P", ada.id).await;
        let task = seed_task(&storage, project.id, ada.id).await;

        let updated = storage
            .update_task_status(task.id, TaskStatus::Qa)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.status, TaskStatus::Qa);

        let fetched = storage.get_task(task.id).await.unwrap().unwrap();
        assert_eq!(fetched.status, TaskStatus::Qa);
        assert_eq!(fetched.title, task.title);
        assert_eq!(fetched.created_at, task.created_at);
    }

    #[tokio::test]
    async fn test_not_found_is_a_value_not_an_error() {
        let storage = MemStorage::new();
        assert!(storage.get_user(42).await.unwrap().is_none());
        assert!(storage.get_project(42).await.unwrap().is_none());
        assert!(storage.get_task(42).await.unwrap().is_none());
        assert!(storage
            .update_task_status(42, TaskStatus::Done)
            .await
            .unwrap()
            .is_none());
        assert!(storage
            .update_subtask_status(42, true)
            .await
            .unwrap()
            .is_none());
        // Aggregations over unknown ids are zero sums / empty lists.
        assert_eq!(storage.hours_by_project(42).await.unwrap(), 0.0);
        assert_eq!(storage.hours_by_user(42).await.unwrap(), 0.0);
        assert!(storage.get_tasks_by_project(42).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_referential_integrity_enforced_at_write() {
        let storage = MemStorage::new();
        let ada = seed_user(&storage, "ada@example.com").await;

        let err = storage
            .create_project(CreateProject {
                name: "Orphan".to_string(),
                description: None,
                due_date: None,
                created_by: 99,
            })
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            StorageError::MissingReference { entity: "user", id: 99 }
        ));

        let project = seed_project(&storage, "P", ada.id).await;
        let err = storage
            .create_task(CreateTask {
                title: "T".to_string(),
                description: None,
                status: TaskStatus::Todo,
                project_id: project.id,
                assigned_to: Some(99),
                created_by: ada.id,
            })
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            StorageError::MissingReference { entity: "user", id: 99 }
        ));

        let err = storage
            .create_subtask(CreateSubtask {
                title: "S".to_string(),
                completed: false,
                task_id: 99,
            })
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            StorageError::MissingReference { entity: "task", id: 99 }
        ));
    }

    #[tokio::test]
    async fn test_hours_by_project_sums_decimal_text() {
        let storage = MemStorage::new();
        let ada = seed_user(&storage, "ada@example.com").await;
        let project = seed_project(&storage, "P", ada.id).await;
        let other_project = seed_project(&storage, "Q", ada.id).await;
        let task = seed_task(&storage, project.id, ada.id).await;
        let other_task = seed_task(&storage, other_project.id, ada.id).await;

        seed_time_log(&storage, task.id, ada.id, "2").await;
        seed_time_log(&storage, task.id, ada.id, "2.5").await;
        seed_time_log(&storage, task.id, ada.id, "0.5").await;
        // Belongs to a different project, must not be counted.
        seed_time_log(&storage, other_task.id, ada.id, "8").await;

        assert_eq!(storage.hours_by_project(project.id).await.unwrap(), 5.0);
        assert_eq!(storage.hours_by_user(ada.id).await.unwrap(), 13.0);
    }

    #[tokio::test]
    async fn test_malformed_hours_is_a_fault_not_zero() {
        let storage = MemStorage::new();
        let ada = seed_user(&storage, "ada@example.com").await;
        let project = seed_project(&storage, "P", ada.id).await;
        let task = seed_task(&storage, project.id, ada.id).await;

        seed_time_log(&storage, task.id, ada.id, "2.5").await;
        seed_time_log(&storage, task.id, ada.id, "two and a half").await;

        let err = storage.hours_by_project(project.id).await.unwrap_err();
        assert!(matches!(err, StorageError::MalformedHours { .. }));
        let err = storage.project_stats().await.unwrap_err();
        assert!(matches!(err, StorageError::MalformedHours { .. }));
    }

    #[tokio::test]
    async fn test_project_stats_snapshot() {
        let storage = MemStorage::new();
        let u1 = seed_user(&storage, "a@example.com").await;
        let _u2 = seed_user(&storage, "b@example.com").await;
        let _u3 = seed_user(&storage, "c@example.com").await;

        let p1 = seed_project(&storage, "P1", u1.id).await;
        let p2 = seed_project(&storage, "P2", u1.id).await;

        let mut task_ids = Vec::new();
        for project_id in [p1.id, p1.id, p1.id, p2.id, p2.id] {
            task_ids.push(seed_task(&storage, project_id, u1.id).await.id);
        }
        storage
            .update_task_status(task_ids[0], TaskStatus::Done)
            .await
            .unwrap();
        storage
            .update_task_status(task_ids[3], TaskStatus::Done)
            .await
            .unwrap();

        seed_time_log(&storage, task_ids[0], u1.id, "4").await;
        seed_time_log(&storage, task_ids[1], u1.id, "6").await;
        seed_time_log(&storage, task_ids[4], u1.id, "0.5").await;

        let stats = storage.project_stats().await.unwrap();
        assert_eq!(stats.active_projects, 2);
        assert_eq!(stats.completed_tasks, 2);
        assert_eq!(stats.total_hours, 10.5);
        assert_eq!(stats.team_members, 3);
    }

    #[tokio::test]
    async fn test_subtask_lifecycle() {
        let storage = MemStorage::new();
        let ada = seed_user(&storage, "ada@example.com").await;
        let project = seed_project(&storage, "P", ada.id).await;
        let task = seed_task(&storage, project.id, ada.id).await;

        let subtask = storage
            .create_subtask(CreateSubtask {
                title: "Write docs".to_string(),
                completed: false,
                task_id: task.id,
            })
            .await
            .unwrap();
        assert!(!subtask.completed);

        let updated = storage
            .update_subtask_status(subtask.id, true)
            .await
            .unwrap()
            .unwrap();
        assert!(updated.completed);
        assert_eq!(updated.created_at, subtask.created_at);

        let listed = storage.get_subtasks_by_task(task.id).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert!(listed[0].completed);
    }

    #[tokio::test]
    async fn test_list_order_is_insertion_order() {
        let storage = MemStorage::new();
        let ada = seed_user(&storage, "ada@example.com").await;
        let project = seed_project(&storage, "P", ada.id).await;
        for title in ["first", "second", "third"] {
            storage
                .create_task(CreateTask {
                    title: title.to_string(),
                    description: None,
                    status: TaskStatus::Todo,
                    project_id: project.id,
                    assigned_to: None,
                    created_by: ada.id,
                })
                .await
                .unwrap();
        }
        let titles: Vec<String> = storage
            .get_tasks()
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.title)
            .collect();
        assert_eq!(titles, vec!["first", "second", "third"]);
    }

    #[tokio::test]
    async fn test_tasks_by_user_filters_on_assignee() {
        let storage = MemStorage::new();
        let ada = seed_user(&storage, "ada@example.com").await;
        let bob = seed_user(&storage, "bob@example.com").await;
        let project = seed_project(&storage, "P", ada.id).await;

        storage
            .create_task(CreateTask {
                title: "Ada's task".to_string(),
                description: None,
                status: TaskStatus::Todo,
                project_id: project.id,
                assigned_to: Some(ada.id),
                created_by: ada.id,
            })
            .await
            .unwrap();
        storage
            .create_task(CreateTask {
                title: "Unassigned".to_string(),
                description: None,
                status: TaskStatus::Todo,
                project_id: project.id,
                assigned_to: None,
                created_by: bob.id,
            })
            .await
            .unwrap();

        let ada_tasks = storage.get_tasks_by_user(ada.id).await.unwrap();
        assert_eq!(ada_tasks.len(), 1);
        assert_eq!(ada_tasks[0].title, "Ada's task");
        assert!(storage.get_tasks_by_user(bob.id).await.unwrap().is_empty());
    }
}
