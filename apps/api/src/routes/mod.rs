pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::assistant::handlers as assistant;
use crate::editor::handlers as editor;
use crate::export::handlers as export;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Resume editing
        .route("/api/v1/resumes/sample", get(editor::handle_sample))
        .route("/api/v1/resumes/blank", get(editor::handle_blank))
        .route(
            "/api/v1/resumes/completeness",
            post(editor::handle_completeness),
        )
        .route("/api/v1/resumes/edit", post(editor::handle_edit))
        // Writing assistant
        .route(
            "/api/v1/ai/bullet-points",
            post(assistant::handle_bullet_points),
        )
        .route("/api/v1/ai/summary", post(assistant::handle_summary))
        .route(
            "/api/v1/ai/cover-letter",
            post(assistant::handle_cover_letter),
        )
        .route("/api/v1/ai/ats", post(assistant::handle_ats))
        // Templates and export
        .route("/api/v1/templates", get(export::handle_templates))
        .route("/api/v1/export", post(export::handle_export))
        .with_state(state)
}
