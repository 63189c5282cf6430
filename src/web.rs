//! Server assembly: router, CORS, static assets, listener

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::api::{self, AppState};
use crate::config::AppConfig;
use crate::rand_source::ThreadRandom;

/// Identifying User-Agent, required by the geocoding provider
const USER_AGENT: &str = concat!("climadex/", env!("CARGO_PKG_VERSION"));

/// Build the full application router for the given state.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .nest("/api", api::router())
        .fallback_service(ServeDir::new(&state.config.static_dir))
        .layer(cors)
        .with_state(state)
}

/// Build the shared state for a configuration.
///
/// No outbound timeout is configured; a hanging upstream hangs the request.
pub fn state(config: AppConfig) -> Result<AppState> {
    let http = reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .context("Failed to create HTTP client")?;

    Ok(AppState {
        http,
        config: Arc::new(config),
        rand: Arc::new(ThreadRandom),
    })
}

/// Bind and serve until the process is stopped.
pub async fn run(config: AppConfig) -> Result<()> {
    let port = config.port;
    let app = app(state(config)?);

    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Web server running at http://localhost:{port}");
    axum::serve(listener, app).await.context("Server error")
}
