/// OpenAI-backed AI provider
///
/// Calls the chat-completions endpoint of an OpenAI-compatible service.
/// The timeout from [`crate::config::AiConfig`] is set on the HTTP client,
/// so a stalled upstream fails the one request instead of hanging it; no
/// other request is affected while one is waiting here.
///
/// Subtask generation asks for a JSON-object response and expects a body of
/// the form `{"subtasks": [{"title": "..."}]}`.

use crate::ai::provider::{AiError, AiProvider, AiResult, SubtaskSuggestion};
use crate::config::AiConfig;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const SUGGEST_LOG_SYSTEM_PROMPT: &str = "You are a helpful assistant that generates professional \
    work log entries based on task titles. Generate a concise, professional log entry that \
    describes typical work done for the given task. Keep it under 100 words and focus on \
    concrete actions.";

const GENERATE_SUBTASKS_SYSTEM_PROMPT: &str = "You are a project management assistant. Generate \
    a list of 3-6 realistic subtasks for a software project based on the project name and \
    description. Return the response as a JSON object with a 'subtasks' array containing \
    objects with 'title' properties. Keep titles concise and actionable.";

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormat>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: String,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

/// Expected shape of the JSON-object completion for subtask generation
#[derive(Debug, Deserialize)]
struct SubtasksPayload {
    #[serde(default)]
    subtasks: Vec<SubtaskSuggestion>,
}

/// Production [`AiProvider`] against an OpenAI-compatible API
pub struct OpenAiProvider {
    client: reqwest::Client,
    config: AiConfig,
}

impl OpenAiProvider {
    /// Creates a provider from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: AiConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(OpenAiProvider { client, config })
    }

    /// Sends one chat completion and returns the first choice's content
    async fn chat(&self, request: ChatRequest<'_>) -> AiResult<String> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(AiError::NotConfigured)?;

        let url = format!(
            "{}/v1/chat/completions",
            self.config.base_url.trim_end_matches('/')
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .map_err(|err| {
                if err.is_timeout() {
                    AiError::Timeout
                } else {
                    AiError::Request(err.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(AiError::UpstreamStatus(status.as_u16()));
        }

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|err| AiError::MalformedResponse(err.to_string()))?;

        body.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or_else(|| AiError::MalformedResponse("empty completion".to_string()))
    }
}

#[async_trait]
impl AiProvider for OpenAiProvider {
    fn name(&self) -> &str {
        "openai"
    }

    async fn suggest_log_entry(&self, task_title: &str) -> AiResult<String> {
        let request = ChatRequest {
            model: &self.config.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SUGGEST_LOG_SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: format!("Generate a work log entry for this task: {:?}", task_title),
                },
            ],
            max_tokens: Some(150),
            response_format: None,
        };

        let suggestion = self.chat(request).await?;
        Ok(suggestion.trim().to_string())
    }

    async fn generate_subtasks(
        &self,
        project_name: &str,
        project_description: Option<&str>,
    ) -> AiResult<Vec<SubtaskSuggestion>> {
        let description = project_description
            .filter(|d| !d.trim().is_empty())
            .unwrap_or("No description provided");

        let request = ChatRequest {
            model: &self.config.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: GENERATE_SUBTASKS_SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: format!(
                        "Project: {}\n\nDescription: {}\n\nGenerate subtasks for this project.",
                        project_name, description
                    ),
                },
            ],
            max_tokens: None,
            response_format: Some(ResponseFormat {
                kind: "json_object",
            }),
        };

        let content = self.chat(request).await?;
        let payload: SubtasksPayload = serde_json::from_str(&content)
            .map_err(|err| AiError::MalformedResponse(err.to_string()))?;
        Ok(payload.subtasks)
    }
}
