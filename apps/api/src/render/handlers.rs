//! Axum route handlers for the Render API.
//!
//! The preview surface POSTs a snapshot and feeds the returned document into
//! its sandboxed iframe; export returns the same bytes with an attachment
//! disposition so the browser saves `index.html`.

use axum::http::header;
use axum::response::{Html, IntoResponse};
use axum::Json;
use tracing::debug;

use crate::models::portfolio::PortfolioState;
use crate::render::render_portfolio;

/// POST /api/v1/render
///
/// Body: one complete portfolio snapshot. Response: the standalone HTML
/// document, `text/html; charset=utf-8`.
pub async fn handle_render(Json(state): Json<PortfolioState>) -> Html<String> {
    let html = render_portfolio(&state);
    debug!(
        layout = state.theme.layout.as_str(),
        bytes = html.len(),
        "rendered portfolio document"
    );
    Html(html)
}

/// POST /api/v1/export
///
/// Same rendering path as /render, delivered as a file download.
pub async fn handle_export(Json(state): Json<PortfolioState>) -> impl IntoResponse {
    let html = render_portfolio(&state);
    (
        [
            (header::CONTENT_TYPE, "text/html; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"index.html\"",
            ),
        ],
        html,
    )
}

/// GET /api/v1/portfolio/sample
///
/// The default snapshot the editor boots from.
pub async fn handle_sample() -> Json<PortfolioState> {
    Json(PortfolioState::sample())
}
