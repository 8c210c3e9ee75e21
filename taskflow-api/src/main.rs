//! # TaskFlow API Server
//!
//! REST/JSON backend for the TaskFlow project/task management application:
//! users, projects, tasks, subtasks, time logs, project membership, derived
//! analytics, and AI-assisted suggestions.
//!
//! ## Usage
//!
//! ```bash
//! cargo run -p taskflow-api
//! ```

use std::sync::Arc;
use taskflow_api::ai::OpenAiProvider;
use taskflow_api::app::{build_router, AppState};
use taskflow_api::config::Config;
use taskflow_shared::storage::memory::MemStorage;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "taskflow_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        "TaskFlow API Server v{} starting...",
        env!("CARGO_PKG_VERSION")
    );

    let config = Config::from_env()?;

    if config.ai.api_key.is_none() {
        tracing::warn!(
            "OPENAI_API_KEY is not set; AI suggestion endpoints will return an adapter error"
        );
    }

    let storage = Arc::new(MemStorage::new());
    let ai = Arc::new(OpenAiProvider::new(config.ai.clone())?);
    let state = AppState::new(storage, ai, config.clone());

    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    tracing::info!("Server listening on http://{}", config.bind_address());

    axum::serve(listener, app).await?;

    Ok(())
}
