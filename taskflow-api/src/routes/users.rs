/// User endpoints
///
/// # Endpoints
///
/// - `GET /api/users` - List all users
/// - `GET /api/users/:id` - Get a user by id
/// - `GET /api/users/email/:email` - Get a user by email
/// - `POST /api/users` - Create a user

use crate::{
    app::AppState,
    error::{ApiError, ApiJson, ApiResult},
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use taskflow_shared::models::{CreateUser, User};
use validator::Validate;

/// Lists every user in insertion order
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Json<Vec<User>>> {
    let users = state.storage.get_users().await?;
    Ok(Json(users))
}

/// Gets a user by id
///
/// # Errors
///
/// - `404 Not Found`: No user with that id
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<User>> {
    let user = state
        .storage
        .get_user(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;
    Ok(Json(user))
}

/// Gets a user by exact email
pub async fn get_user_by_email(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> ApiResult<Json<User>> {
    let user = state
        .storage
        .get_user_by_email(&email)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;
    Ok(Json(user))
}

/// Creates a user
///
/// # Endpoint
///
/// ```text
/// POST /api/users
/// Content-Type: application/json
///
/// {
///   "email": "ada@example.com",
///   "name": "Ada Lovelace",
///   "role": "admin"
/// }
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: Malformed body or validation failure
/// - `409 Conflict`: Email already exists
pub async fn create_user(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CreateUser>,
) -> ApiResult<(StatusCode, Json<User>)> {
    req.validate()?;
    let user = state.storage.create_user(req).await?;
    Ok((StatusCode::CREATED, Json(user)))
}
