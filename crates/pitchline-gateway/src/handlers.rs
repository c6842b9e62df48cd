// SPDX-FileCopyrightText: 2026 Pitchline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP request handlers for the suggestion REST API.
//!
//! Handles POST /v1/suggestions, GET /v1/suggestions, GET /health.

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use pitchline_core::{PitchlineError, Suggestion, SuggestionOutcome, SuggestionRecord};

use crate::server::AppState;
use crate::validate;

/// Generic message for 500 responses; detail travels in the `message` field.
pub const GENERIC_ERROR_MESSAGE: &str = "An unexpected error occurred.";

/// Default number of records returned by GET /v1/suggestions.
pub const DEFAULT_LIST_LIMIT: u32 = 20;

/// Response body for a successful POST /v1/suggestions.
#[derive(Debug, Serialize)]
pub struct SuggestionResponse {
    /// Exactly three suggestions, in model order.
    pub suggestions: Vec<Suggestion>,
    /// The topic that was asked, echoed back.
    pub prompt: String,
}

/// Response body for a 400: validation failure or model-issued rejection.
#[derive(Debug, Serialize)]
pub struct RejectionResponse {
    /// The validation message or the model's own rejection message.
    pub error: String,
    /// Whatever the caller sent as `prompt`, echoed back unmodified.
    pub prompt: serde_json::Value,
}

/// Response body for a 500.
#[derive(Debug, Serialize)]
pub struct FailureResponse {
    /// Always [`GENERIC_ERROR_MESSAGE`].
    pub error: String,
    /// Diagnostic detail for the caller's logs.
    pub message: String,
}

/// Response body for GET /v1/suggestions.
#[derive(Debug, Serialize)]
pub struct SuggestionListResponse {
    /// Persisted records, newest first.
    pub suggestions: Vec<SuggestionRecord>,
}

/// Query parameters for GET /v1/suggestions.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    /// Maximum number of records to return.
    #[serde(default = "default_limit")]
    pub limit: u32,
}

fn default_limit() -> u32 {
    DEFAULT_LIST_LIMIT
}

/// Response body for GET /health.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Health status string.
    pub status: String,
    /// Binary version.
    pub version: String,
    /// Seconds since the server started.
    pub uptime_secs: u64,
}

/// POST /v1/suggestions
///
/// Validates the topic, asks the configured provider for suggestions,
/// persists a successful reply, and maps the outcome to a status code.
/// The provider is never invoked for a topic that fails validation.
pub async fn post_suggestions(
    State(state): State<AppState>,
    Json(body): Json<serde_json::Value>,
) -> Response {
    let request_id = uuid::Uuid::new_v4().to_string();

    let topic = match validate::validate_topic(&body) {
        Ok(topic) => topic,
        Err(message) => {
            let echoed = body
                .get("prompt")
                .cloned()
                .unwrap_or(serde_json::Value::Null);
            tracing::info!(
                request_id = %request_id,
                reason = %message,
                "suggestion request failed validation"
            );
            return (
                StatusCode::BAD_REQUEST,
                Json(RejectionResponse {
                    error: message,
                    prompt: echoed,
                }),
            )
                .into_response();
        }
    };

    tracing::info!(
        request_id = %request_id,
        topic_chars = topic.chars().count(),
        "requesting suggestions"
    );

    match state.provider.suggest(&topic).await {
        Ok(SuggestionOutcome::Suggestions(suggestions)) => {
            if let Err(e) = state.store.insert(&topic, &suggestions).await {
                tracing::error!(
                    request_id = %request_id,
                    error = %e,
                    "failed to persist suggestions"
                );
                return failure_response(&e);
            }
            tracing::info!(request_id = %request_id, "suggestions delivered");
            (
                StatusCode::OK,
                Json(SuggestionResponse {
                    suggestions,
                    prompt: topic,
                }),
            )
                .into_response()
        }
        Ok(SuggestionOutcome::RejectedTopic(message)) => {
            tracing::info!(request_id = %request_id, "topic rejected by the model");
            (
                StatusCode::BAD_REQUEST,
                Json(RejectionResponse {
                    error: message,
                    prompt: serde_json::Value::String(topic),
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(request_id = %request_id, error = %e, "suggestion request failed");
            failure_response(&e)
        }
    }
}

/// GET /v1/suggestions
///
/// Returns the most recently persisted records, newest first.
pub async fn get_suggestions(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Response {
    match state.store.recent(params.limit).await {
        Ok(records) => (
            StatusCode::OK,
            Json(SuggestionListResponse {
                suggestions: records,
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "failed to list suggestions");
            failure_response(&e)
        }
    }
}

/// GET /health
///
/// Returns status, version, and uptime of the server.
pub async fn get_health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: state.start_time.elapsed().as_secs(),
    })
}

fn failure_response(e: &PitchlineError) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(FailureResponse {
            error: GENERIC_ERROR_MESSAGE.to_string(),
            message: e.to_string(),
        }),
    )
        .into_response()
}
