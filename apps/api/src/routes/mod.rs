pub mod health;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::editor::handlers;
use crate::errors::AppError;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {uri}"))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/resume",
            get(handlers::handle_get_resume).put(handlers::handle_replace_resume),
        )
        .route(
            "/api/v1/resume/commands",
            post(handlers::handle_apply_command),
        )
        .route("/api/v1/resume/preview", get(handlers::handle_preview))
        .route("/api/v1/resume/reset", post(handlers::handle_reset))
        .route("/api/v1/resume/theme", get(handlers::handle_theme_options))
        .fallback(not_found)
        .with_state(state)
}
