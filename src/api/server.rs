// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::{Context, Result};
use axum::{extract::DefaultBodyLimit, middleware, routing::post, Router};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use super::embed::{embed_handler, encode_preflight};
use super::middleware::{authenticate, cors};
use super::summarize::summarize_handler;
use crate::config::AppConfig;
use crate::gemini::LanguageService;

/// Shared handler state
///
/// Read-only after startup; cloning only bumps the `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<dyn LanguageService>,
}

impl AppState {
    pub fn new(service: Arc<dyn LanguageService>) -> Self {
        Self { service }
    }
}

/// Builds the router:
///
/// | Method  | Path        | Chain                    |
/// |---------|-------------|--------------------------|
/// | POST    | /summarize  | authenticate → summarize |
/// | POST    | /api/encode | authenticate → embed     |
/// | OPTIONS | /api/encode | 200, empty body          |
///
/// CORS wraps every route and answers any OPTIONS request itself. Request
/// bodies are not size-limited.
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route(
            "/summarize",
            post(summarize_handler).route_layer(middleware::from_fn(authenticate)),
        )
        .route(
            "/api/encode",
            post(embed_handler)
                .route_layer(middleware::from_fn(authenticate))
                .options(encode_preflight),
        )
        .layer(DefaultBodyLimit::disable())
        .layer(middleware::from_fn(cors))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serves the app on an already bound listener until Ctrl-C.
pub async fn serve(listener: TcpListener, state: AppState) -> Result<()> {
    let app = create_app(state);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("Server stopped");
    Ok(())
}

/// Binds `0.0.0.0:{SERVER_PORT}` and serves. A bind failure is returned to
/// the caller, which treats it as fatal.
pub async fn start_server(config: &AppConfig, service: Arc<dyn LanguageService>) -> Result<()> {
    let addr = config.listen_addr()?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    info!("Server started at {}", listener.local_addr()?);

    serve(listener, AppState::new(service)).await
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            warn!("Unable to listen for Ctrl-C ({}); running until killed", e);
            std::future::pending::<()>().await;
        }
    }
}
