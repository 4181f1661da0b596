// src/api/mod.rs — HTTP boundary for the chat bot

pub mod handlers;
pub mod types;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::core::orchestrator::Orchestrator;
use crate::infra::config::Config;

/// Shared state for API handlers.
#[derive(Clone)]
pub struct ApiState {
    pub bot: Arc<Orchestrator>,
}

/// Build the axum router with all API routes.
pub fn build_router(state: ApiState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods(tower_http::cors::Any)
        .allow_headers(tower_http::cors::Any);

    Router::new()
        .route("/api/v1/chat", post(handlers::chat))
        .route("/api/v1/coins", post(handlers::add_coin))
        .route("/api/v1/coins/{id}", get(handlers::coin_advice))
        .route("/api/v1/health", get(handlers::health))
        .layer(cors)
        .with_state(state)
}

/// Start the API server on the configured port (blocking).
pub async fn start_server(config: &Config, state: ApiState) -> anyhow::Result<()> {
    let addr = format!("127.0.0.1:{}", config.server.port);
    let router = build_router(state);

    tracing::info!("chat API listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).await?;
    Ok(())
}
