/// Common test utilities for integration tests
///
/// This module provides shared infrastructure for integration tests:
/// - Router construction over a fresh in-memory store
/// - Mock AI provider wiring (answering or failing)
/// - JSON request/response helpers

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use std::sync::Arc;
use taskflow_api::ai::MockAiProvider;
use taskflow_api::app::{build_router, AppState};
use taskflow_api::config::{AiConfig, ApiConfig, Config};
use taskflow_shared::storage::memory::MemStorage;
use tower::Service as _;

/// Test context wrapping a router over a fresh in-memory store
pub struct TestContext {
    pub app: Router,
}

impl TestContext {
    /// Creates a context with a fresh store and an answering AI provider
    pub fn new() -> Self {
        Self::with_ai(MockAiProvider::new())
    }

    /// Creates a context whose AI provider fails every call
    pub fn with_failing_ai() -> Self {
        Self::with_ai(MockAiProvider::failing())
    }

    fn with_ai(ai: MockAiProvider) -> Self {
        let config = Config {
            api: ApiConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                cors_origins: vec!["*".to_string()],
            },
            ai: AiConfig {
                api_key: None,
                base_url: "https://api.openai.com".to_string(),
                model: "gpt-4o".to_string(),
                timeout_secs: 5,
            },
        };

        let storage = Arc::new(MemStorage::new());
        let state = AppState::new(storage, Arc::new(ai), config);

        TestContext {
            app: build_router(state),
        }
    }

    /// Sends a request with an optional JSON body, returning status and
    /// parsed JSON response
    pub async fn request(
        &self,
        method: &str,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => {
                builder = builder.header("content-type", "application/json");
                builder.body(Body::from(json.to_string())).unwrap()
            }
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.app.clone().call(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, json)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.request("GET", uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request("POST", uri, Some(body)).await
    }

    pub async fn patch(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request("PATCH", uri, Some(body)).await
    }
}

/// Creates a user through the API and returns its id
pub async fn create_user(ctx: &TestContext, email: &str, role: &str) -> i32 {
    let (status, body) = ctx
        .post(
            "/api/users",
            serde_json::json!({
                "email": email,
                "name": "Test User",
                "role": role,
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "create_user failed: {}", body);
    body["id"].as_i64().unwrap() as i32
}

/// Creates a project through the API and returns its id
pub async fn create_project(ctx: &TestContext, name: &str, created_by: i32) -> i32 {
    let (status, body) = ctx
        .post(
            "/api/projects",
            serde_json::json!({
                "name": name,
                "createdBy": created_by,
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "create_project failed: {}", body);
    body["id"].as_i64().unwrap() as i32
}

/// Creates a task through the API and returns its id
pub async fn create_task(ctx: &TestContext, project_id: i32, created_by: i32) -> i32 {
    let (status, body) = ctx
        .post(
            "/api/tasks",
            serde_json::json!({
                "title": "Test Task",
                "projectId": project_id,
                "createdBy": created_by,
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "create_task failed: {}", body);
    body["id"].as_i64().unwrap() as i32
}

/// Records hours against a task through the API
pub async fn log_hours(ctx: &TestContext, task_id: i32, user_id: i32, hours: &str) {
    let (status, body) = ctx
        .post(
            "/api/time-logs",
            serde_json::json!({
                "taskId": task_id,
                "userId": user_id,
                "hours": hours,
                "date": "2025-06-01T00:00:00Z",
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "log_hours failed: {}", body);
}
