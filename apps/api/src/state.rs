use std::sync::Arc;

use crate::config::Config;
use crate::suggest::TextSuggester;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// There is deliberately nothing else here: the service holds no portfolio
/// state between requests — every render starts from the snapshot in the
/// request body.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable text suggester. Production uses GeminiClient; tests stub it.
    pub suggester: Arc<dyn TextSuggester>,
    /// Kept for handlers that need ports/keys later; nothing reads it yet.
    #[allow(dead_code)]
    pub config: Config,
}
