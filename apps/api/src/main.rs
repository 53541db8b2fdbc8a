mod config;
mod errors;
mod models;
mod render;
mod routes;
mod state;
mod suggest;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;
use crate::suggest::GeminiClient;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("folio_api={}", &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Folio API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize the suggestion client. An absent API key still boots the
    // service — only the suggestion routes report unavailability.
    if config.gemini_api_key.is_none() {
        info!("GEMINI_API_KEY not set — suggestion routes will return 503");
    }
    let suggester = Arc::new(GeminiClient::new(
        config.gemini_api_key.clone().unwrap_or_default(),
    ));
    info!("Suggestion client initialized (model: {})", suggest::MODEL);

    let state = AppState {
        suggester,
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // the editor runs on a different origin in dev

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
