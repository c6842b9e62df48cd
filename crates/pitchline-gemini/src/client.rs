// SPDX-FileCopyrightText: 2026 Pitchline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Minimal HTTP client for the Gemini `generateContent` endpoint.
//!
//! One request per suggestion attempt. Transport failures and non-2xx
//! statuses surface as `Network` failures so the caller can map them
//! uniformly; the body of a 2xx is returned raw for classification.

use std::time::Duration;

use pitchline_core::{FailureKind, PitchlineError};
use reqwest::header::{HeaderMap, HeaderValue};
use tracing::{debug, warn};

use crate::types::{GenerateContentRequest, error_message_from_body};

const API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Client for Google's Generative Language API.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiClient {
    /// Creates a new client. The key is sent as a query parameter, so
    /// no authentication header is configured here.
    pub fn new(api_key: String, model: String, timeout: Duration) -> Result<Self, PitchlineError> {
        let mut headers = HeaderMap::new();
        headers.insert("content-type", HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|e| PitchlineError::Internal(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key,
            model,
            base_url: API_BASE_URL.to_string(),
        })
    }

    /// Overrides the base URL (for tests against a local mock server).
    #[cfg(test)]
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    /// Sends one `generateContent` request and returns the raw 2xx body.
    ///
    /// Exactly one attempt is made; a failed call is reported to the
    /// caller rather than retried.
    pub async fn generate(&self, request: &GenerateContentRequest) -> Result<String, PitchlineError> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                PitchlineError::upstream(
                    FailureKind::Network,
                    format!("error communicating with the Gemini API: {e}"),
                )
            })?;

        let status = response.status();
        debug!(status = %status, model = %self.model, "generateContent response received");

        let body = response.text().await.map_err(|e| {
            PitchlineError::upstream(
                FailureKind::Network,
                format!("error reading the Gemini API response: {e}"),
            )
        })?;

        if status.is_success() {
            return Ok(body);
        }

        warn!(status = %status, "Gemini request failed");
        let detail = match error_message_from_body(&body) {
            Some(message) => format!("the Gemini API returned {status}: {message}"),
            None => format!("the Gemini API returned {status}"),
        };
        Err(PitchlineError::upstream(FailureKind::Network, detail))
    }
}
