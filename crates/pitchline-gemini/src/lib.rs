// SPDX-FileCopyrightText: 2026 Pitchline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Google Gemini provider adapter for the Pitchline suggestion service.
//!
//! This crate implements [`SuggestionProvider`] on top of the Gemini
//! `generateContent` API: it renders the prompt template, makes exactly
//! one API call, and normalizes the response body into a
//! [`SuggestionOutcome`] or a classified upstream failure.

pub mod client;
pub mod normalize;
pub mod prompt;
pub mod types;

use std::time::Duration;

use async_trait::async_trait;
use pitchline_config::PitchlineConfig;
use pitchline_core::{
    AdapterType, HealthStatus, PitchlineError, PluginAdapter, SuggestionOutcome,
    SuggestionProvider, render_prompt,
};
use tracing::{debug, info};

use crate::client::GeminiClient;
use crate::normalize::normalize_response;
use crate::prompt::DEFAULT_PROMPT_TEMPLATE;
use crate::types::GenerateContentRequest;

/// Gemini provider implementing [`SuggestionProvider`].
///
/// API key resolution order: config -> `GEMINI_API_KEY` env var -> error.
pub struct GeminiProvider {
    client: GeminiClient,
    prompt_template: String,
}

impl GeminiProvider {
    /// Creates a new Gemini provider from the given configuration.
    ///
    /// # API Key Resolution
    /// 1. `config.gemini.api_key` if set and non-empty
    /// 2. `GEMINI_API_KEY` environment variable
    /// 3. Returns error if neither is available
    pub fn new(config: &PitchlineConfig) -> Result<Self, PitchlineError> {
        let api_key = resolve_api_key(&config.gemini.api_key)?;
        let prompt_template = config
            .gemini
            .prompt_template
            .clone()
            .unwrap_or_else(|| DEFAULT_PROMPT_TEMPLATE.to_string());

        let client = GeminiClient::new(
            api_key,
            config.gemini.model.clone(),
            Duration::from_secs(config.provider.timeout_secs),
        )?;

        info!(model = config.gemini.model, "Gemini provider initialized");

        Ok(Self {
            client,
            prompt_template,
        })
    }

    /// Creates a provider with an existing client (for testing).
    #[cfg(test)]
    fn with_client(client: GeminiClient, prompt_template: String) -> Self {
        Self {
            client,
            prompt_template,
        }
    }
}

#[async_trait]
impl PluginAdapter for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Provider
    }

    async fn health_check(&self) -> Result<HealthStatus, PitchlineError> {
        // A full check would make a lightweight API call, but we avoid
        // consuming quota on health checks.
        Ok(HealthStatus::Healthy)
    }

    async fn shutdown(&self) -> Result<(), PitchlineError> {
        debug!("Gemini provider shutting down");
        Ok(())
    }
}

#[async_trait]
impl SuggestionProvider for GeminiProvider {
    async fn suggest(&self, topic: &str) -> Result<SuggestionOutcome, PitchlineError> {
        let prompt = render_prompt(&self.prompt_template, topic);
        let request = GenerateContentRequest::for_prompt(&prompt);

        debug!(topic_chars = topic.chars().count(), "requesting suggestions");
        let raw = self.client.generate(&request).await?;
        normalize_response(&raw)
    }
}

/// Resolves the API key from config or environment.
fn resolve_api_key(config_key: &Option<String>) -> Result<String, PitchlineError> {
    if let Some(key) = config_key {
        if !key.is_empty() {
            return Ok(key.clone());
        }
    }

    std::env::var("GEMINI_API_KEY").map_err(|_| {
        PitchlineError::Config(
            "Gemini API key not found. Set gemini.api_key in config or GEMINI_API_KEY environment variable.".into(),
        )
    })
}
