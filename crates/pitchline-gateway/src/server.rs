// SPDX-FileCopyrightText: 2026 Pitchline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Suggestion HTTP server built on axum.
//!
//! Sets up routes, middleware, and shared state for the service.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use pitchline_core::{PitchlineError, SuggestionProvider, SuggestionStore};

use crate::handlers::{self, FailureResponse, GENERIC_ERROR_MESSAGE};

/// Shared state for axum request handlers.
#[derive(Clone)]
pub struct AppState {
    /// The configured suggestion backend.
    pub provider: Arc<dyn SuggestionProvider>,
    /// Store for delivered suggestions.
    pub store: Arc<dyn SuggestionStore>,
    /// Process start time for uptime calculation.
    pub start_time: Instant,
}

/// Server configuration (mirrors `ServerConfig` from pitchline-config to
/// avoid a dependency on the config crate from the gateway crate).
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host address to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
}

/// Build the service router.
///
/// Routes:
/// - POST /v1/suggestions
/// - GET /v1/suggestions
/// - GET /health
///
/// A panic anywhere in a handler is converted into the same generic 500
/// body that provider and storage failures produce.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/v1/suggestions",
            post(handlers::post_suggestions).get(handlers::get_suggestions),
        )
        .route("/health", get(handlers::get_health))
        .with_state(state)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Start the suggestion HTTP server.
///
/// Binds to the configured host:port and serves until the process exits.
pub async fn start_server(config: &ServerConfig, state: AppState) -> Result<(), PitchlineError> {
    let app = build_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| PitchlineError::Internal(format!("failed to bind server to {addr}: {e}")))?;

    tracing::info!("Suggestion server listening on {addr}");

    axum::serve(listener, app)
        .await
        .map_err(|e| PitchlineError::Internal(format!("server error: {e}")))?;

    Ok(())
}

fn handle_panic(err: Box<dyn std::any::Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "panic with non-string payload".to_string()
    };

    tracing::error!(detail = %detail, "request handler panicked");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(FailureResponse {
            error: GENERIC_ERROR_MESSAGE.to_string(),
            message: detail,
        }),
    )
        .into_response()
}
