pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::render::handlers as render_handlers;
use crate::state::AppState;
use crate::suggest::handlers as suggest_handlers;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Render API — the engine behind the editor's preview and export
        .route("/api/v1/render", post(render_handlers::handle_render))
        .route("/api/v1/export", post(render_handlers::handle_export))
        .route(
            "/api/v1/portfolio/sample",
            get(render_handlers::handle_sample),
        )
        // Suggestion API — rewrites a single text field before the editor stores it
        .route(
            "/api/v1/suggest/bio",
            post(suggest_handlers::handle_suggest_bio),
        )
        .route(
            "/api/v1/suggest/project",
            post(suggest_handlers::handle_suggest_project),
        )
        .with_state(state)
}
