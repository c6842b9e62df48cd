// SPDX-FileCopyrightText: 2026 Pitchline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! OpenAI provider adapter for the Pitchline suggestion service.
//!
//! This crate implements [`SuggestionProvider`] on top of the Chat
//! Completions API, behind the same trait as the Gemini backend so the
//! two are interchangeable via the `provider.backend` setting.

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

use crate::client::OpenAiClient;
use crate::normalize::normalize_response;
use crate::prompt::DEFAULT_PROMPT_TEMPLATE;
use crate::types::ChatCompletionRequest;

/// OpenAI provider implementing [`SuggestionProvider`].
///
/// API key resolution order: config -> `OPENAI_API_KEY` env var -> error.
pub struct OpenAiProvider {
    client: OpenAiClient,
    model: String,
    prompt_template: String,
}

impl OpenAiProvider {
    /// Creates a new OpenAI provider from the given configuration.
    ///
    /// # API Key Resolution
    /// 1. `config.openai.api_key` if set and non-empty
    /// 2. `OPENAI_API_KEY` environment variable
    /// 3. Returns error if neither is available
    pub fn new(config: &PitchlineConfig) -> Result<Self, PitchlineError> {
        let api_key = resolve_api_key(&config.openai.api_key)?;
        let prompt_template = config
            .openai
            .prompt_template
            .clone()
            .unwrap_or_else(|| DEFAULT_PROMPT_TEMPLATE.to_string());

        let client = OpenAiClient::new(
            api_key,
            Duration::from_secs(config.provider.timeout_secs),
        )?;

        info!(model = config.openai.model, "OpenAI provider initialized");

        Ok(Self {
            client,
            model: config.openai.model.clone(),
            prompt_template,
        })
    }

    /// Creates a provider with an existing client (for testing).
    #[cfg(test)]
    fn with_client(client: OpenAiClient, model: String, prompt_template: String) -> Self {
        Self {
            client,
            model,
            prompt_template,
        }
    }
}

#[async_trait]
impl PluginAdapter for OpenAiProvider {
    fn name(&self) -> &str {
        "openai"
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
        debug!("OpenAI provider shutting down");
        Ok(())
    }
}

#[async_trait]
impl SuggestionProvider for OpenAiProvider {
    async fn suggest(&self, topic: &str) -> Result<SuggestionOutcome, PitchlineError> {
        let prompt = render_prompt(&self.prompt_template, topic);
        let request = ChatCompletionRequest::for_prompt(&self.model, &prompt);

        debug!(topic_chars = topic.chars().count(), "requesting suggestions");
        let raw = self.client.chat(&request).await?;
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

    std::env::var("OPENAI_API_KEY").map_err(|_| {
        PitchlineError::Config(
            "OpenAI API key not found. Set openai.api_key in config or OPENAI_API_KEY environment variable.".into(),
        )
    })
}
