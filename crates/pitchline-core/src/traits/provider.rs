// SPDX-FileCopyrightText: 2026 Pitchline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Provider adapter trait for generative-language backends (Gemini, OpenAI).

use async_trait::async_trait;

use crate::error::PitchlineError;
use crate::traits::adapter::PluginAdapter;
use crate::types::SuggestionOutcome;

/// Adapter for generative-language backends.
///
/// A provider renders its prompt template around the topic, performs exactly
/// one upstream call, and normalizes whatever comes back into a
/// [`SuggestionOutcome`] or a classified upstream failure. Implementations
/// must not retry: a transport failure surfaces immediately as
/// [`FailureKind::Network`](crate::error::FailureKind).
#[async_trait]
pub trait SuggestionProvider: PluginAdapter {
    /// Requests suggestions for the given topic.
    ///
    /// The topic is assumed to be validated by the caller; providers do not
    /// re-check its length.
    async fn suggest(&self, topic: &str) -> Result<SuggestionOutcome, PitchlineError>;
}
