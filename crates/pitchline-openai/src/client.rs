// SPDX-FileCopyrightText: 2026 Pitchline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Minimal HTTP client for the OpenAI Chat Completions endpoint.
//!
//! One request per suggestion attempt, bearer authentication via a
//! default header. The body of a 2xx is returned raw for
//! classification; everything else surfaces as a `Network` failure.

use std::time::Duration;

use pitchline_core::{FailureKind, PitchlineError};
use reqwest::header::{HeaderMap, HeaderValue};
use tracing::{debug, warn};

use crate::types::{ChatCompletionRequest, error_message_from_body};

const API_BASE_URL: &str = "https://api.openai.com";

/// HTTP client for the OpenAI API.
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    client: reqwest::Client,
    base_url: String,
}

impl OpenAiClient {
    /// Creates a new client with bearer authentication.
    pub fn new(api_key: String, timeout: Duration) -> Result<Self, PitchlineError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            "authorization",
            HeaderValue::from_str(&format!("Bearer {api_key}")).map_err(|e| {
                PitchlineError::Config(format!("invalid API key header value: {e}"))
            })?,
        );
        headers.insert("content-type", HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|e| PitchlineError::Internal(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: API_BASE_URL.to_string(),
        })
    }

    /// Overrides the base URL (for tests against a local mock server).
    #[cfg(test)]
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    /// Sends one chat completion request and returns the raw 2xx body.
    ///
    /// Exactly one attempt is made; a failed call is reported to the
    /// caller rather than retried.
    pub async fn chat(&self, request: &ChatCompletionRequest) -> Result<String, PitchlineError> {
        let url = format!("{}/v1/chat/completions", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                PitchlineError::upstream(
                    FailureKind::Network,
                    format!("error communicating with the OpenAI API: {e}"),
                )
            })?;

        let status = response.status();
        debug!(status = %status, model = %request.model, "chat completion response received");

        let body = response.text().await.map_err(|e| {
            PitchlineError::upstream(
                FailureKind::Network,
                format!("error reading the OpenAI API response: {e}"),
            )
        })?;

        if status.is_success() {
            return Ok(body);
        }

        warn!(status = %status, "OpenAI request failed");
        let detail = match error_message_from_body(&body) {
            Some(message) => format!("the OpenAI API returned {status}: {message}"),
            None => format!("the OpenAI API returned {status}"),
        };
        Err(PitchlineError::upstream(FailureKind::Network, detail))
    }
}
