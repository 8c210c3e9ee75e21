/// Task endpoints
///
/// # Endpoints
///
/// - `GET /api/tasks` - List all tasks
/// - `GET /api/tasks/project/:projectId` - Tasks in a project
/// - `GET /api/tasks/user/:userId` - Tasks assigned to a user
/// - `POST /api/tasks` - Create a task
/// - `PATCH /api/tasks/:id/status` - Move a task between board columns

use crate::{
    app::AppState,
    error::{ApiError, ApiJson, ApiResult},
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use taskflow_shared::models::{CreateTask, Task, TaskStatus};
use validator::Validate;

/// Body for `PATCH /api/tasks/:id/status`
///
/// serde rejects anything outside `todo`/`qa`/`done` before the store is
/// touched.
#[derive(Debug, Deserialize)]
pub struct UpdateTaskStatusRequest {
    /// New board status
    pub status: TaskStatus,
}

/// Lists every task in insertion order
pub async fn list_tasks(State(state): State<AppState>) -> ApiResult<Json<Vec<Task>>> {
    let tasks = state.storage.get_tasks().await?;
    Ok(Json(tasks))
}

/// Lists tasks in a project
pub async fn list_tasks_by_project(
    State(state): State<AppState>,
    Path(project_id): Path<i32>,
) -> ApiResult<Json<Vec<Task>>> {
    let tasks = state.storage.get_tasks_by_project(project_id).await?;
    Ok(Json(tasks))
}

/// Lists tasks assigned to a user
pub async fn list_tasks_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> ApiResult<Json<Vec<Task>>> {
    let tasks = state.storage.get_tasks_by_user(user_id).await?;
    Ok(Json(tasks))
}

/// Creates a task
///
/// # Errors
///
/// - `400 Bad Request`: Malformed body, validation failure, or a dangling
///   project/user reference
pub async fn create_task(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CreateTask>,
) -> ApiResult<(StatusCode, Json<Task>)> {
    req.validate()?;
    let task = state.storage.create_task(req).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

/// Updates a task's status
///
/// # Errors
///
/// - `404 Not Found`: No task with that id
pub async fn update_task_status(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ApiJson(req): ApiJson<UpdateTaskStatusRequest>,
) -> ApiResult<Json<Task>> {
    let task = state
        .storage
        .update_task_status(id, req.status)
        .await?
        .ok_or_else(|| ApiError::NotFound("Task not found".to_string()))?;
    Ok(Json(task))
}
