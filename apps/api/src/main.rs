mod analysis;
mod assets;
mod config;
mod errors;
mod llm_client;
mod models;
mod routes;
mod state;
mod store;
mod wizard;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::{ContentGenerator, LlmContentGenerator};
use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::{open_backend, PersistentStore};
use crate::wizard::Workspace;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed values)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Catalyst API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize persistence (degrades to in-memory state on failure)
    let backend = open_backend(&config);
    let workspace = Workspace::new(PersistentStore::new(backend));

    // Initialize generative backend
    let generator = build_generator(&config);

    info!(
        "Phase transitions apply after {}ms",
        config.transition_delay_ms
    );

    let state = AppState::new(workspace, generator, config.clone());

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict CORS to the UI origin once it has a fixed host

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Builds the generative backend, or `None` when no API key is configured.
fn build_generator(config: &Config) -> Option<Arc<dyn ContentGenerator>> {
    let Some(api_key) = config.anthropic_api_key.clone() else {
        warn!("ANTHROPIC_API_KEY not set; analysis endpoint disabled");
        return None;
    };
    match LlmClient::new(config, api_key) {
        Ok(client) => {
            info!(
                "LLM client initialized (model: {}, up to {} attempts per call)",
                client.model(),
                config.llm_max_attempts
            );
            Some(Arc::new(LlmContentGenerator(client)))
        }
        Err(e) => {
            warn!("Failed to build LLM client ({e}); analysis endpoint disabled");
            None
        }
    }
}
