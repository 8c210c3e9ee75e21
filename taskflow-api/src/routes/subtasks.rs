/// Subtask endpoints
///
/// # Endpoints
///
/// - `GET /api/subtasks/task/:taskId` - Subtasks under a task
/// - `POST /api/subtasks` - Create a subtask
/// - `PATCH /api/subtasks/:id/status` - Check or uncheck a subtask

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
use taskflow_shared::models::{CreateSubtask, Subtask};
use validator::Validate;

/// Body for `PATCH /api/subtasks/:id/status`
#[derive(Debug, Deserialize)]
pub struct UpdateSubtaskStatusRequest {
    /// New completion state
    pub completed: bool,
}

/// Lists subtasks under a task
pub async fn list_subtasks_by_task(
    State(state): State<AppState>,
    Path(task_id): Path<i32>,
) -> ApiResult<Json<Vec<Subtask>>> {
    let subtasks = state.storage.get_subtasks_by_task(task_id).await?;
    Ok(Json(subtasks))
}

/// Creates a subtask
pub async fn create_subtask(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CreateSubtask>,
) -> ApiResult<(StatusCode, Json<Subtask>)> {
    req.validate()?;
    let subtask = state.storage.create_subtask(req).await?;
    Ok((StatusCode::CREATED, Json(subtask)))
}

/// Checks or unchecks a subtask
///
/// # Errors
///
/// - `404 Not Found`: No subtask with that id
pub async fn update_subtask_status(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ApiJson(req): ApiJson<UpdateSubtaskStatusRequest>,
) -> ApiResult<Json<Subtask>> {
    let subtask = state
        .storage
        .update_subtask_status(id, req.completed)
        .await?
        .ok_or_else(|| ApiError::NotFound("Subtask not found".to_string()))?;
    Ok(Json(subtask))
}
