/// AI suggestion endpoints
///
/// The only two places the API calls out to the external text-generation
/// service. Both endpoints are read-only with respect to the store: an
/// adapter failure can never corrupt or mutate task state, and the UI falls
/// back to manual entry.
///
/// # Endpoints
///
/// - `POST /api/ai/suggest-log` - Suggest a work-log entry for a task title
/// - `POST /api/ai/generate-subtasks` - Generate subtask titles for a project

use crate::{
    ai::SubtaskSuggestion,
    app::AppState,
    error::{ApiJson, ApiResult},
};
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request for `POST /api/ai/suggest-log`
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SuggestLogRequest {
    /// Title of the task to describe
    #[validate(length(min = 1, max = 200, message = "Task title must be 1-200 characters"))]
    pub task_title: String,
}

/// Response for `POST /api/ai/suggest-log`
#[derive(Debug, Serialize, Deserialize)]
pub struct SuggestLogResponse {
    /// Suggested log entry text
    pub suggestion: String,
}

/// Request for `POST /api/ai/generate-subtasks`
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GenerateSubtasksRequest {
    /// Project name
    #[validate(length(min = 1, max = 200, message = "Project name must be 1-200 characters"))]
    pub project_name: String,

    /// Optional project description for more specific suggestions
    pub project_description: Option<String>,
}

/// Response for `POST /api/ai/generate-subtasks`
#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateSubtasksResponse {
    /// Suggested subtasks
    pub subtasks: Vec<SubtaskSuggestion>,
}

/// Suggests a work-log entry for a task title
///
/// # Errors
///
/// - `400 Bad Request`: Missing or empty task title
/// - `500 Internal Server Error`: Adapter failure (code `ai_error`)
pub async fn suggest_log(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<SuggestLogRequest>,
) -> ApiResult<Json<SuggestLogResponse>> {
    req.validate()?;
    tracing::debug!(provider = state.ai.name(), "requesting log suggestion");
    let suggestion = state.ai.suggest_log_entry(&req.task_title).await?;
    Ok(Json(SuggestLogResponse { suggestion }))
}

/// Generates subtask titles for a project
///
/// # Errors
///
/// - `400 Bad Request`: Missing or empty project name
/// - `500 Internal Server Error`: Adapter failure (code `ai_error`)
pub async fn generate_subtasks(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<GenerateSubtasksRequest>,
) -> ApiResult<Json<GenerateSubtasksResponse>> {
    req.validate()?;
    tracing::debug!(provider = state.ai.name(), "requesting subtask suggestions");
    let subtasks = state
        .ai
        .generate_subtasks(&req.project_name, req.project_description.as_deref())
        .await?;
    Ok(Json(GenerateSubtasksResponse { subtasks }))
}
