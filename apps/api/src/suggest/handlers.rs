//! Axum route handlers for the Suggestion API.
//!
//! These sit entirely outside the rendering path: a failed suggestion is an
//! editor concern, and the stored field keeps its previous value.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct SuggestBioRequest {
    pub name: String,
    pub title: String,
    #[serde(default)]
    pub current_bio: String,
}

#[derive(Debug, Deserialize)]
pub struct SuggestProjectRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Serialize)]
pub struct SuggestResponse {
    pub text: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/suggest/bio
///
/// Returns a replacement bio string. The editor decides whether to store it.
pub async fn handle_suggest_bio(
    State(state): State<AppState>,
    Json(request): Json<SuggestBioRequest>,
) -> Result<Json<SuggestResponse>, AppError> {
    if request.name.trim().is_empty() {
        return Err(AppError::Validation("name cannot be empty".to_string()));
    }

    let text = state
        .suggester
        .suggest_bio(&request.name, &request.title, &request.current_bio)
        .await?;

    Ok(Json(SuggestResponse { text }))
}

/// POST /api/v1/suggest/project
///
/// Returns a replacement project description string.
pub async fn handle_suggest_project(
    State(state): State<AppState>,
    Json(request): Json<SuggestProjectRequest>,
) -> Result<Json<SuggestResponse>, AppError> {
    if request.title.trim().is_empty() {
        return Err(AppError::Validation("title cannot be empty".to_string()));
    }

    let text = state
        .suggester
        .suggest_project(&request.title, &request.description)
        .await?;

    Ok(Json(SuggestResponse { text }))
}
