/// Project membership endpoints
///
/// # Endpoints
///
/// - `GET /api/project-members/:projectId` - Member users of a project
/// - `POST /api/project-members` - Add a user to a project

use crate::{
    app::AppState,
    error::{ApiJson, ApiResult},
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use taskflow_shared::models::{CreateProjectMember, ProjectMember, User};

/// Lists a project's members as `User` records
///
/// The join rows stay internal; callers get the resolved users.
pub async fn list_project_members(
    State(state): State<AppState>,
    Path(project_id): Path<i32>,
) -> ApiResult<Json<Vec<User>>> {
    let members = state.storage.get_project_members(project_id).await?;
    Ok(Json(members))
}

/// Adds a user to a project
///
/// # Errors
///
/// - `400 Bad Request`: Unknown project or user id
pub async fn add_project_member(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CreateProjectMember>,
) -> ApiResult<(StatusCode, Json<ProjectMember>)> {
    let member = state.storage.add_project_member(req).await?;
    Ok((StatusCode::CREATED, Json(member)))
}
