/// Application state and router builder
///
/// This module defines the shared application state and provides
/// a function to build the Axum router with all routes and middleware.
///
/// # Architecture
///
/// ```text
/// /
/// ├── /health                        # Health check (public)
/// └── /api/
///     ├── /users                     # Accounts
///     ├── /projects                  # Projects
///     ├── /tasks                     # Tasks + status updates
///     ├── /subtasks                  # Checklist items
///     ├── /time-logs                 # Logged hours
///     ├── /project-members           # Membership
///     ├── /analytics                 # Derived aggregates
///     └── /ai                        # AI suggestion endpoints
/// ```
///
/// # Middleware Stack
///
/// Applied in order (bottom to top):
/// 1. Logging (tower-http TraceLayer)
/// 2. CORS (tower-http CorsLayer)

use crate::{ai::AiProvider, config::Config, routes};
use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, patch, post},
    Router,
};
use std::sync::Arc;
use taskflow_shared::storage::Storage;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

/// Shared application state
///
/// This is cloned for each request handler via Axum's `State` extractor.
/// Uses Arc internally for cheap cloning. The storage handle is the only
/// way handlers reach persisted data; there are no ambient globals.
#[derive(Clone)]
pub struct AppState {
    /// Entity store and query layer
    pub storage: Arc<dyn Storage>,

    /// AI suggestion adapter
    pub ai: Arc<dyn AiProvider>,

    /// Application configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates new application state
    pub fn new(storage: Arc<dyn Storage>, ai: Arc<dyn AiProvider>, config: Config) -> Self {
        Self {
            storage,
            ai,
            config: Arc::new(config),
        }
    }
}

/// Builds the complete Axum router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    // Health check (public, no auth)
    let health_routes = Router::new().route("/health", get(routes::health::health_check));

    let user_routes = Router::new()
        .route("/", get(routes::users::list_users))
        .route("/", post(routes::users::create_user))
        .route("/email/:email", get(routes::users::get_user_by_email))
        .route("/:id", get(routes::users::get_user));

    let project_routes = Router::new()
        .route("/", get(routes::projects::list_projects))
        .route("/", post(routes::projects::create_project))
        .route("/user/:user_id", get(routes::projects::list_projects_by_user))
        .route("/:id", get(routes::projects::get_project));

    let task_routes = Router::new()
        .route("/", get(routes::tasks::list_tasks))
        .route("/", post(routes::tasks::create_task))
        .route("/project/:project_id", get(routes::tasks::list_tasks_by_project))
        .route("/user/:user_id", get(routes::tasks::list_tasks_by_user))
        .route("/:id/status", patch(routes::tasks::update_task_status));

    let subtask_routes = Router::new()
        .route("/", post(routes::subtasks::create_subtask))
        .route("/task/:task_id", get(routes::subtasks::list_subtasks_by_task))
        .route("/:id/status", patch(routes::subtasks::update_subtask_status));

    let time_log_routes = Router::new()
        .route("/", post(routes::time_logs::create_time_log))
        .route("/task/:task_id", get(routes::time_logs::list_time_logs_by_task))
        .route("/user/:user_id", get(routes::time_logs::list_time_logs_by_user));

    let project_member_routes = Router::new()
        .route("/", post(routes::project_members::add_project_member))
        .route("/:project_id", get(routes::project_members::list_project_members));

    let analytics_routes = Router::new()
        .route(
            "/project/:project_id/hours",
            get(routes::analytics::project_hours),
        )
        .route("/user/:user_id/hours", get(routes::analytics::user_hours))
        .route("/stats", get(routes::analytics::stats));

    let ai_routes = Router::new()
        .route("/suggest-log", post(routes::ai::suggest_log))
        .route("/generate-subtasks", post(routes::ai::generate_subtasks));

    let api_routes = Router::new()
        .nest("/users", user_routes)
        .nest("/projects", project_routes)
        .nest("/tasks", task_routes)
        .nest("/subtasks", subtask_routes)
        .nest("/time-logs", time_log_routes)
        .nest("/project-members", project_member_routes)
        .nest("/analytics", analytics_routes)
        .nest("/ai", ai_routes);

    // Configure CORS based on environment
    let cors = if state.config.api.cors_origins.contains(&"*".to_string()) {
        // Development mode: permissive CORS
        CorsLayer::permissive()
    } else {
        // Production mode: configure allowed origins
        let origins: Vec<HeaderValue> = state
            .config
            .api
            .cors_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PATCH,
                Method::OPTIONS,
            ])
            .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
            .allow_credentials(true)
            .max_age(std::time::Duration::from_secs(3600))
    };

    Router::new()
        .merge(health_routes)
        .nest("/api", api_routes)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors)
        .with_state(state)
}
