#![allow(dead_code)]

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::suggest::SuggestError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// The rendering engine never produces one of these — it is total for any
/// well-typed snapshot. Errors here come from request validation and the
/// suggestion collaborator only.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Suggestion error: {0}")]
    Suggest(#[from] SuggestError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Suggest(SuggestError::MissingApiKey) => (
                StatusCode::SERVICE_UNAVAILABLE,
                "SUGGESTIONS_UNAVAILABLE",
                "Text suggestions are not configured on this server".to_string(),
            ),
            AppError::Suggest(e) => {
                tracing::error!("Suggestion error: {e}");
                (
                    StatusCode::BAD_GATEWAY,
                    "SUGGESTION_ERROR",
                    "The text suggestion service failed".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_api_key_maps_to_service_unavailable() {
        let response = AppError::Suggest(SuggestError::MissingApiKey).into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_validation_maps_to_bad_request() {
        let response = AppError::Validation("name cannot be empty".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
