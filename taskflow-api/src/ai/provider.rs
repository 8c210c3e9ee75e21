/// AI provider trait and types
///
/// All providers must:
/// 1. Implement the `AiProvider` trait (async)
/// 2. Bound every call with a timeout and fail cleanly rather than hang
/// 3. Report failures as `AiError`, never panic
///
/// A provider failure must leave the rest of the system untouched: the
/// endpoints that call providers perform no store writes.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// AI adapter error types
#[derive(Debug, thiserror::Error)]
pub enum AiError {
    /// No API key configured
    #[error("AI provider is not configured")]
    NotConfigured,

    /// The request exceeded the configured timeout
    #[error("AI request timed out")]
    Timeout,

    /// The service answered with a non-success status
    #[error("AI service returned status {0}")]
    UpstreamStatus(u16),

    /// The request could not be sent or the connection failed
    #[error("AI request failed: {0}")]
    Request(String),

    /// The service answered but the body was not usable
    #[error("could not parse AI response: {0}")]
    MalformedResponse(String),
}

/// AI result type alias
pub type AiResult<T> = Result<T, AiError>;

/// One suggested subtask
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubtaskSuggestion {
    /// Suggested subtask title
    pub title: String,
}

/// Contract for the external text-generation service
#[async_trait]
pub trait AiProvider: Send + Sync {
    /// Provider name, for logging
    fn name(&self) -> &str;

    /// Suggests a short professional work-log entry for a task title
    async fn suggest_log_entry(&self, task_title: &str) -> AiResult<String>;

    /// Generates 3-6 concise subtask titles for a project
    async fn generate_subtasks(
        &self,
        project_name: &str,
        project_description: Option<&str>,
    ) -> AiResult<Vec<SubtaskSuggestion>>;
}
