// SPDX-FileCopyrightText: 2026 Pitchline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock suggestion provider for deterministic testing.
//!
//! `MockProvider` implements `SuggestionProvider` with scripted
//! outcomes, enabling fast, CI-runnable tests without upstream calls.

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use pitchline_core::{
    AdapterType, HealthStatus, PitchlineError, PluginAdapter, Suggestion, SuggestionOutcome,
    SuggestionProvider,
};

/// A mock provider that returns scripted outcomes.
///
/// Outcomes are popped from a FIFO queue; when the queue is empty a
/// canned three-suggestion reply is returned. Every call records its
/// topic, so tests can assert both what was asked and how often.
pub struct MockProvider {
    outcomes: Arc<Mutex<VecDeque<Result<SuggestionOutcome, PitchlineError>>>>,
    topics: Arc<Mutex<Vec<String>>>,
}

impl MockProvider {
    /// Create a new mock provider with an empty outcome queue.
    pub fn new() -> Self {
        Self {
            outcomes: Arc::new(Mutex::new(VecDeque::new())),
            topics: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a mock provider pre-loaded with the given outcomes.
    pub fn with_outcomes(outcomes: Vec<Result<SuggestionOutcome, PitchlineError>>) -> Self {
        Self {
            outcomes: Arc::new(Mutex::new(VecDeque::from(outcomes))),
            topics: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Add an outcome to the end of the queue.
    pub async fn add_outcome(&self, outcome: Result<SuggestionOutcome, PitchlineError>) {
        self.outcomes.lock().await.push_back(outcome);
    }

    /// Topics received so far, in call order.
    pub async fn topics(&self) -> Vec<String> {
        self.topics.lock().await.clone()
    }

    /// Number of times `suggest` was invoked.
    pub async fn call_count(&self) -> usize {
        self.topics.lock().await.len()
    }

    /// The canned reply used when the queue is empty.
    pub fn canned_suggestions() -> SuggestionOutcome {
        SuggestionOutcome::Suggestions(vec![
            Suggestion {
                title: "Mock angle one".to_string(),
                content: "First canned suggestion.".to_string(),
            },
            Suggestion {
                title: "Mock angle two".to_string(),
                content: "Second canned suggestion.".to_string(),
            },
            Suggestion {
                title: "Mock angle three".to_string(),
                content: "Third canned suggestion.".to_string(),
            },
        ])
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PluginAdapter for MockProvider {
    fn name(&self) -> &str {
        "mock-provider"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Provider
    }

    async fn health_check(&self) -> Result<HealthStatus, PitchlineError> {
        Ok(HealthStatus::Healthy)
    }

    async fn shutdown(&self) -> Result<(), PitchlineError> {
        Ok(())
    }
}

#[async_trait]
impl SuggestionProvider for MockProvider {
    async fn suggest(&self, topic: &str) -> Result<SuggestionOutcome, PitchlineError> {
        self.topics.lock().await.push(topic.to_string());
        self.outcomes
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| Ok(Self::canned_suggestions()))
    }
}
