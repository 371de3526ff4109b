//! The resolve HTTP server.
//!
//! Provides two endpoints:
//! - `POST /resolve` - coordinates in, structured address out
//! - `GET /health` - service identity and liveness
//!
//! The server owns the resolver chain; widget deployments point their
//! [`HttpResolverClient`](crate::widget::HttpResolverClient) at it.

mod handlers;
mod types;

use std::sync::Arc;
use std::time::Instant;

use axum::routing::{get, post};
use axum::Router;

use crate::config::Config;
use crate::geocode::ResolverChain;
use crate::initialization::init_client;
use handlers::{health_handler, resolve_handler};
pub use types::{
    EchoedCoordinates, HealthResponse, ResolveFailure, ResolveRequest, ResolveResponse,
};

/// Shared state behind the resolve endpoints.
#[derive(Clone)]
pub struct AppState {
    /// The provider chain answering resolve requests.
    pub chain: Arc<ResolverChain>,
    /// Language applied when a request does not name one.
    pub default_language: String,
    /// Deployment environment label for the health endpoint.
    pub environment: String,
    /// When this server started, for uptime reporting.
    pub started_at: Arc<Instant>,
}

/// Builds the router with both endpoints wired to `state`.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/resolve", post(resolve_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}

/// Creates and starts the resolve server.
///
/// Runs until the process is stopped or the listener fails.
pub async fn run_server(config: Config) -> Result<(), anyhow::Error> {
    let client = init_client()?;
    let chain = ResolverChain::from_config(&config, client)?;
    log::info!(
        "resolver chain: {}",
        chain.provider_names().join(" -> ")
    );

    let state = AppState {
        chain: Arc::new(chain),
        default_language: config.language.clone(),
        environment: config.environment_label(),
        started_at: Arc::new(Instant::now()),
    };
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port))
        .await
        .map_err(|e| {
            anyhow::anyhow!(
                "Failed to bind server to {}:{}: {}",
                config.host,
                config.port,
                e
            )
        })?;

    log::info!(
        "resolve server listening on http://{}:{}/",
        config.host,
        config.port
    );
    log::info!(
        "  - Resolve: POST http://{}:{}/resolve",
        config.host,
        config.port
    );
    log::info!(
        "  - Health: GET http://{}:{}/health",
        config.host,
        config.port
    );

    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    Ok(())
}
