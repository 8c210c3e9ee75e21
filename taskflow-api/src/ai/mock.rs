/// Mock AI provider for tests
///
/// Returns deterministic suggestions without any network traffic, and can
/// be switched into a failing mode to exercise the adapter-error path
/// (unreachable service, 500 response, failure isolation).

use crate::ai::provider::{AiError, AiProvider, AiResult, SubtaskSuggestion};
use async_trait::async_trait;

/// Deterministic [`AiProvider`] implementation
#[derive(Debug, Clone, Default)]
pub struct MockAiProvider {
    fail: bool,
}

impl MockAiProvider {
    /// Creates a provider that answers every call
    pub fn new() -> Self {
        MockAiProvider { fail: false }
    }

    /// Creates a provider that fails every call, simulating an unreachable
    /// upstream service
    pub fn failing() -> Self {
        MockAiProvider { fail: true }
    }
}

#[async_trait]
impl AiProvider for MockAiProvider {
    fn name(&self) -> &str {
        "mock"
    }

    async fn suggest_log_entry(&self, task_title: &str) -> AiResult<String> {
        if self.fail {
            return Err(AiError::Request("mock upstream unreachable".to_string()));
        }
        Ok(format!(
            "Worked on {}: implemented the main changes, verified behavior locally, \
             and updated related documentation.",
            task_title
        ))
    }

    async fn generate_subtasks(
        &self,
        project_name: &str,
        _project_description: Option<&str>,
    ) -> AiResult<Vec<SubtaskSuggestion>> {
        if self.fail {
            return Err(AiError::Request("mock upstream unreachable".to_string()));
        }
        Ok(vec![
            SubtaskSuggestion {
                title: format!("Define requirements for {}", project_name),
            },
            SubtaskSuggestion {
                title: "Implement core functionality".to_string(),
            },
            SubtaskSuggestion {
                title: "Write tests and documentation".to_string(),
            },
        ])
    }
}
