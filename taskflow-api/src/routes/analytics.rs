/// Analytics endpoints
///
/// Derived aggregates over the store. Unknown ids produce zero sums, never
/// a 404; a stored hours value that fails to parse is a genuine fault and
/// surfaces as a 500.
///
/// # Endpoints
///
/// - `GET /api/analytics/project/:projectId/hours` - `{hours}` for a project
/// - `GET /api/analytics/user/:userId/hours` - `{hours}` for a user
/// - `GET /api/analytics/stats` - Dashboard snapshot

use crate::{app::AppState, error::ApiResult};
use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use taskflow_shared::storage::ProjectStats;

/// Hours aggregate response
#[derive(Debug, Serialize, Deserialize)]
pub struct HoursResponse {
    /// Summed hours
    pub hours: f64,
}

/// Sums hours logged against a project's tasks
pub async fn project_hours(
    State(state): State<AppState>,
    Path(project_id): Path<i32>,
) -> ApiResult<Json<HoursResponse>> {
    let hours = state.storage.hours_by_project(project_id).await?;
    Ok(Json(HoursResponse { hours }))
}

/// Sums hours logged by a user across all projects
pub async fn user_hours(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> ApiResult<Json<HoursResponse>> {
    let hours = state.storage.hours_by_user(user_id).await?;
    Ok(Json(HoursResponse { hours }))
}

/// Returns the dashboard snapshot
///
/// ```json
/// {
///   "activeProjects": 2,
///   "completedTasks": 2,
///   "totalHours": 10.5,
///   "teamMembers": 3
/// }
/// ```
pub async fn stats(State(state): State<AppState>) -> ApiResult<Json<ProjectStats>> {
    let stats = state.storage.project_stats().await?;
    Ok(Json(stats))
}
