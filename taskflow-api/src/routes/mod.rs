/// API route handlers
///
/// This module contains all route handlers organized by resource:
///
/// - `health`: Health check endpoint
/// - `users`: Account lookup and creation
/// - `projects`: Project CRUD and per-user listing
/// - `tasks`: Task CRUD and status updates
/// - `subtasks`: Checklist items under tasks
/// - `time_logs`: Logged hours
/// - `project_members`: Project membership
/// - `analytics`: Derived aggregates (hours, dashboard stats)
/// - `ai`: AI suggestion endpoints

pub mod ai;
pub mod analytics;
pub mod health;
pub mod project_members;
pub mod projects;
pub mod subtasks;
pub mod tasks;
pub mod time_logs;
pub mod users;
