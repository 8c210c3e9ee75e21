/// Project endpoints
///
/// # Endpoints
///
/// - `GET /api/projects` - List all projects
/// - `GET /api/projects/:id` - Get a project by id
/// - `GET /api/projects/user/:userId` - Projects a user created or belongs to
/// - `POST /api/projects` - Create a project

use crate::{
    app::AppState,
    error::{ApiError, ApiJson, ApiResult},
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use taskflow_shared::models::{CreateProject, Project};
use validator::Validate;

/// Lists every project in insertion order
pub async fn list_projects(State(state): State<AppState>) -> ApiResult<Json<Vec<Project>>> {
    let projects = state.storage.get_projects().await?;
    Ok(Json(projects))
}

/// Gets a project by id
pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<Project>> {
    let project = state
        .storage
        .get_project(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Project not found".to_string()))?;
    Ok(Json(project))
}

/// Lists projects the user created or is a member of
///
/// An unknown user id yields an empty list, not a 404; no authorization is
/// applied here.
pub async fn list_projects_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> ApiResult<Json<Vec<Project>>> {
    let projects = state.storage.get_projects_by_user(user_id).await?;
    Ok(Json(projects))
}

/// Creates a project
///
/// # Errors
///
/// - `400 Bad Request`: Malformed body, validation failure, or unknown
///   `createdBy` user
pub async fn create_project(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CreateProject>,
) -> ApiResult<(StatusCode, Json<Project>)> {
    req.validate()?;
    let project = state.storage.create_project(req).await?;
    Ok((StatusCode::CREATED, Json(project)))
}
