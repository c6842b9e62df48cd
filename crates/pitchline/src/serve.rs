// SPDX-FileCopyrightText: 2026 Pitchline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `pitchline serve` command implementation.
//!
//! Starts the suggestion service: SQLite storage, the configured
//! generative-language backend, and the axum HTTP boundary. The backend is
//! selected at runtime via `provider.backend`; both backends are compiled
//! in and present the same `SuggestionProvider` interface.

use std::sync::Arc;
use std::time::Instant;

use tracing::{error, info};

use pitchline_config::PitchlineConfig;
use pitchline_core::{PitchlineError, PluginAdapter, SuggestionProvider, SuggestionStore};
use pitchline_gateway::{AppState, ServerConfig, start_server};
use pitchline_gemini::GeminiProvider;
use pitchline_openai::OpenAiProvider;
use pitchline_storage::SqliteStore;

/// Runs the `pitchline serve` command.
///
/// Initializes storage and the configured provider, then serves HTTP until
/// the process receives a shutdown signal. A missing API key or an
/// unusable database is fatal before the listener binds. On shutdown the
/// adapters are released in order, which checkpoints the SQLite WAL.
pub async fn run_serve(config: PitchlineConfig) -> Result<(), PitchlineError> {
    init_tracing(&config.service.log_level);

    info!("starting pitchline serve");

    // Initialize storage.
    let store = {
        let store = SqliteStore::new(config.storage.clone());
        store.initialize().await.map_err(|e| {
            error!(error = %e, "failed to initialize storage");
            eprintln!(
                "error: could not open the database at {}",
                config.storage.database_path
            );
            e
        })?;
        Arc::new(store)
    };

    // Initialize the configured suggestion backend.
    let provider: Arc<dyn SuggestionProvider> = match config.provider.backend.as_str() {
        "gemini" => {
            let p = GeminiProvider::new(&config).map_err(|e| {
                error!(error = %e, "failed to initialize Gemini provider");
                eprintln!(
                    "error: Gemini API key required. Set gemini.api_key in config or the \
                     GEMINI_API_KEY environment variable."
                );
                e
            })?;
            Arc::new(p)
        }
        "openai" => {
            let p = OpenAiProvider::new(&config).map_err(|e| {
                error!(error = %e, "failed to initialize OpenAI provider");
                eprintln!(
                    "error: OpenAI API key required. Set openai.api_key in config or the \
                     OPENAI_API_KEY environment variable."
                );
                e
            })?;
            Arc::new(p)
        }
        other => {
            return Err(PitchlineError::Config(format!(
                "unknown provider backend: {other}"
            )));
        }
    };

    let server_config = ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
    };

    let state = AppState {
        provider: provider.clone(),
        store: store.clone() as Arc<dyn SuggestionStore>,
        start_time: Instant::now(),
    };

    info!(
        backend = config.provider.backend.as_str(),
        host = config.server.host.as_str(),
        port = config.server.port,
        "suggestion service initialized"
    );

    tokio::select! {
        result = start_server(&server_config, state) => {
            result?;
        }
        _ = tokio::signal::ctrl_c() => {
            info!("shutdown signal received");
        }
    }

    provider.shutdown().await?;
    store.shutdown().await?;

    info!("pitchline serve shutdown complete");
    Ok(())
}

/// Initializes the tracing subscriber with the given log level.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("pitchline={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(false)
        .init();
}
