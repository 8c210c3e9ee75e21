/// Error handling for the API server
///
/// This module provides a unified error type that maps to HTTP responses.
/// All handlers return `Result<T, ApiError>` which converts to the
/// appropriate HTTP status code and a `{error, message}` JSON body.
///
/// Store-level "not found" is a normal `None` return, not an error; handlers
/// decide where a missing id becomes a 404. Validation failures are rejected
/// before any store access. Internal faults are logged server-side and
/// surfaced as an opaque 500.

use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::fmt;
use taskflow_shared::storage::StorageError;

use crate::ai::AiError;

/// API result type alias
pub type ApiResult<T> = Result<T, ApiError>;

/// Unified API error type
#[derive(Debug)]
pub enum ApiError {
    /// Bad request (400) - malformed body or a dangling reference
    BadRequest(String),

    /// Bad request (400) - field-level validation failures
    ValidationError(Vec<ValidationErrorDetail>),

    /// Not found (404)
    NotFound(String),

    /// Conflict (409) - e.g., duplicate email
    Conflict(String),

    /// Internal server error (500)
    InternalError(String),

    /// Internal server error (500) from the AI suggestion adapter
    ///
    /// Kept separate so the response carries a distinguishing error code and
    /// the UI can offer a retry or fall back to manual entry.
    AiFailure(String),
}

/// Validation error detail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationErrorDetail {
    /// Field that failed validation
    pub field: String,

    /// Error message
    pub message: String,
}

/// Error response format
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code (e.g., "bad_request", "not_found")
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// Optional validation errors
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<ValidationErrorDetail>>,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            ApiError::ValidationError(errors) => {
                write!(f, "Validation failed: {} errors", errors.len())
            }
            ApiError::NotFound(msg) => write!(f, "Not found: {}", msg),
            ApiError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            ApiError::InternalError(msg) => write!(f, "Internal error: {}", msg),
            ApiError::AiFailure(msg) => write!(f, "AI failure: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code, message, details) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg, None),
            ApiError::ValidationError(errors) => (
                StatusCode::BAD_REQUEST,
                "validation_error",
                "Request validation failed".to_string(),
                Some(errors),
            ),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg, None),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, "conflict", msg, None),
            ApiError::InternalError(msg) => {
                // Log internal errors but don't expose details to clients
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An internal error occurred".to_string(),
                    None,
                )
            }
            ApiError::AiFailure(msg) => {
                tracing::error!("AI adapter error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "ai_error", msg, None)
            }
        };

        let body = Json(ErrorResponse {
            error: error_code.to_string(),
            message,
            details,
        });

        (status, body).into_response()
    }
}

/// Convert storage errors to API errors
impl From<StorageError> for ApiError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::EmailTaken(_) => {
                ApiError::Conflict("A user with this email already exists".to_string())
            }
            StorageError::MissingReference { entity, id } => {
                ApiError::BadRequest(format!("{} {} does not exist", entity, id))
            }
            StorageError::MalformedHours { id, value } => ApiError::InternalError(format!(
                "time log {} has malformed hours value {:?}",
                id, value
            )),
        }
    }
}

/// Convert AI adapter errors to API errors
///
/// Messages are rewritten here so raw client errors (URLs, connection
/// details) never reach the response body.
impl From<AiError> for ApiError {
    fn from(err: AiError) -> Self {
        let message = match &err {
            AiError::NotConfigured => "AI assistant is not configured".to_string(),
            AiError::Timeout => "AI request timed out".to_string(),
            AiError::UpstreamStatus(status) => {
                format!("AI service returned status {}", status)
            }
            AiError::Request(_) => "AI service is unreachable".to_string(),
            AiError::MalformedResponse(_) => {
                "AI service returned an unusable response".to_string()
            }
        };
        tracing::error!("AI adapter error: {}", err);
        ApiError::AiFailure(message)
    }
}

/// Convert validator failures to API errors
impl From<validator::ValidationErrors> for ApiError {
    fn from(err: validator::ValidationErrors) -> Self {
        let errors: Vec<ValidationErrorDetail> = err
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |error| ValidationErrorDetail {
                    field: field.to_string(),
                    message: error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| "Validation failed".to_string()),
                })
            })
            .collect();
        ApiError::ValidationError(errors)
    }
}

/// JSON extractor that rejects malformed bodies with a 400
///
/// Axum's stock `Json` rejection answers shape mismatches with 422; this API
/// reports every malformed POST body as 400 with the usual error envelope.
pub struct ApiJson<T>(pub T);

#[async_trait::async_trait]
impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|err: JsonRejection| ApiError::BadRequest(err.body_text()))?;
        Ok(ApiJson(value))
    }
}
