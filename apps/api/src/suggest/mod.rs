/// Text suggestion — the single point of entry for all generative-text calls
/// in Folio.
///
/// ARCHITECTURAL RULE: no other module may call the Gemini API directly, and
/// the rendering engine must never be reachable from a suggestion failure —
/// it only ever consumes strings the editor has already finalized.
///
/// Model: gemini-3-flash-preview (hardcoded — do not make configurable to
/// prevent drift)
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

pub mod handlers;
pub mod prompts;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
/// The model used for all suggestion calls in Folio.
/// This is intentionally hardcoded to prevent accidental drift.
pub const MODEL: &str = "gemini-3-flash-preview";
const MAX_RETRIES: u32 = 3;

#[derive(Debug, Error)]
pub enum SuggestError {
    #[error("Suggestion service is not configured (missing API key)")]
    MissingApiKey,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Rate limited after {retries} retries")]
    RateLimited { retries: u32 },

    #[error("Model returned empty content")]
    EmptyContent,
}

#[derive(Debug, Serialize)]
struct GeminiRequest<'a> {
    contents: Vec<GeminiContent<'a>>,
}

#[derive(Debug, Serialize)]
struct GeminiContent<'a> {
    parts: Vec<GeminiPart<'a>>,
}

#[derive(Debug, Serialize)]
struct GeminiPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl GeminiResponse {
    /// Extracts the text of the first candidate's first text part.
    fn text(&self) -> Option<&str> {
        self.candidates
            .first()
            .and_then(|c| c.content.parts.iter().find_map(|p| p.text.as_deref()))
    }
}

/// Rewrites a single text field of the portfolio. The engine treats the
/// returned string as any other — the seam exists so handlers can be tested
/// with a deterministic stub.
#[async_trait]
pub trait TextSuggester: Send + Sync {
    /// Suggests a short professional bio for a person and role, optionally
    /// seeded with the user's current draft.
    async fn suggest_bio(
        &self,
        name: &str,
        title: &str,
        current_bio: &str,
    ) -> Result<String, SuggestError>;

    /// Rewrites a project description to be more impactful.
    async fn suggest_project(
        &self,
        title: &str,
        description: &str,
    ) -> Result<String, SuggestError>;
}

/// The Gemini-backed suggester used in production.
/// Wraps the generateContent API with retry logic.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
}

impl GeminiClient {
    /// An empty `api_key` produces a client whose calls fail with
    /// `MissingApiKey` — the service still boots and renders.
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(120))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
        }
    }

    /// Makes a raw generateContent call, returning the first candidate text.
    /// Retries on 429 (rate limit) and 5xx errors with exponential backoff.
    async fn call(&self, prompt: &str) -> Result<String, SuggestError> {
        if self.api_key.is_empty() {
            return Err(SuggestError::MissingApiKey);
        }

        let request_body = GeminiRequest {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart { text: prompt }],
            }],
        };

        let url = format!("{GEMINI_API_BASE}/{MODEL}:generateContent");
        let mut last_error: Option<SuggestError> = None;

        for attempt in 0..MAX_RETRIES {
            if attempt > 0 {
                // Exponential backoff: 1s, 2s, 4s
                let delay = std::time::Duration::from_millis(1000 * (1 << (attempt - 1)));
                warn!(
                    "Suggestion call attempt {} failed, retrying after {}ms...",
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let response = self
                .client
                .post(&url)
                .header("x-goog-api-key", &self.api_key)
                .header("content-type", "application/json")
                .json(&request_body)
                .send()
                .await;

            let response = match response {
                Ok(r) => r,
                Err(e) => {
                    last_error = Some(SuggestError::Http(e));
                    continue;
                }
            };

            let status = response.status();

            if status.as_u16() == 429 || status.is_server_error() {
                let body = response.text().await.unwrap_or_default();
                warn!("Gemini API returned {}: {}", status, body);
                last_error = Some(SuggestError::Api {
                    status: status.as_u16(),
                    message: body,
                });
                continue;
            }

            if !status.is_success() {
                let message = response.text().await.unwrap_or_default();
                return Err(SuggestError::Api {
                    status: status.as_u16(),
                    message,
                });
            }

            let gemini_response: GeminiResponse = response.json().await?;

            let text = gemini_response
                .text()
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty())
                .ok_or(SuggestError::EmptyContent)?;

            debug!("Suggestion call succeeded: {} chars", text.len());

            return Ok(text);
        }

        Err(last_error.unwrap_or(SuggestError::RateLimited {
            retries: MAX_RETRIES,
        }))
    }
}

#[async_trait]
impl TextSuggester for GeminiClient {
    async fn suggest_bio(
        &self,
        name: &str,
        title: &str,
        current_bio: &str,
    ) -> Result<String, SuggestError> {
        self.call(&prompts::build_bio_prompt(name, title, current_bio))
            .await
    }

    async fn suggest_project(
        &self,
        title: &str,
        description: &str,
    ) -> Result<String, SuggestError> {
        self.call(&prompts::build_project_prompt(title, description))
            .await
    }
}
