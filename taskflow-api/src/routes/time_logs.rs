/// Time log endpoints
///
/// # Endpoints
///
/// - `GET /api/time-logs/task/:taskId` - Logs against a task
/// - `GET /api/time-logs/user/:userId` - Logs recorded by a user
/// - `POST /api/time-logs` - Record hours
///
/// Hours travel as decimal text (e.g. "2.5") and are stored verbatim; only
/// the analytics endpoints parse them.

use crate::{
    app::AppState,
    error::{ApiJson, ApiResult},
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use taskflow_shared::models::{CreateTimeLog, TimeLog};
use validator::Validate;

/// Lists time logs recorded against a task
pub async fn list_time_logs_by_task(
    State(state): State<AppState>,
    Path(task_id): Path<i32>,
) -> ApiResult<Json<Vec<TimeLog>>> {
    let logs = state.storage.get_time_logs_by_task(task_id).await?;
    Ok(Json(logs))
}

/// Lists time logs recorded by a user
pub async fn list_time_logs_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> ApiResult<Json<Vec<TimeLog>>> {
    let logs = state.storage.get_time_logs_by_user(user_id).await?;
    Ok(Json(logs))
}

/// Records hours against a task
///
/// # Errors
///
/// - `400 Bad Request`: Malformed body or a dangling task/user reference
pub async fn create_time_log(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CreateTimeLog>,
) -> ApiResult<(StatusCode, Json<TimeLog>)> {
    req.validate()?;
    let log = state.storage.create_time_log(req).await?;
    Ok((StatusCode::CREATED, Json(log)))
}
