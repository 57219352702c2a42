//! Pramana API /v1: REST endpoints
//!
//! | Route | Body | Answer |
//! |---|---|---|
//! | `GET /v1/health` | | service status |
//! | `POST /v1/validate/{kind}` | `{ "value": .. }` | `{ "kind", "valid" }` |
//! | `POST /v1/info/{kind}` | `{ "value": .. }` | metadata for the kind |
//! | `POST /v1/deep-verify/{type}` | `{ "value": .. }` | `{ "type", "valid" }` |
//! | `POST /v1/scrub` | `{ "text", "options"? }` | `{ "text" }` |
//! | `GET /metrics` | | Prometheus text format |
pub mod config;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod middleware;

pub use config::ApiConfig;
pub use error::ApiError;

use anyhow::Context;
use axum::{
    routing::{get, post},
    Router,
};
use pramana_privacy::ScrubOptions;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Shared, read-only state handed to every handler.
pub struct AppState {
    /// Options used when a scrub request carries none
    pub scrub_defaults: ScrubOptions,
    pub metrics: metrics::Metrics,
}

impl AppState {
    pub fn new(scrub_defaults: ScrubOptions) -> Result<Self, prometheus::Error> {
        Ok(Self {
            scrub_defaults,
            metrics: metrics::Metrics::new()?,
        })
    }
}

pub fn create_app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/v1/validate/{kind}", post(handlers::validate))
        .route("/v1/info/{kind}", post(handlers::info))
        .route("/v1/deep-verify/{kind}", post(handlers::deep_verify))
        .route("/v1/scrub", post(handlers::scrub))
        .route("/v1/health", get(handlers::health))
        .route("/metrics", get(handlers::metrics))
        .layer(middleware::cors())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(config: ApiConfig) -> anyhow::Result<()> {
    let scrub_defaults = config
        .scrub_options()
        .context("failed to load scrub profile")?;
    let state = AppState::new(scrub_defaults).context("failed to register metrics")?;
    let app = create_app(Arc::new(state));

    let listener = tokio::net::TcpListener::bind(&config.addr)
        .await
        .with_context(|| format!("failed to bind {}", config.addr))?;

    tracing::info!("Pramana API listening on {}", config.addr);
    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
