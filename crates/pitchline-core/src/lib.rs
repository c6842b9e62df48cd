// SPDX-FileCopyrightText: 2026 Pitchline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Pitchline suggestion service.
//!
//! This crate provides the foundational trait definitions, error types, and
//! domain types used throughout the Pitchline workspace, plus the
//! vendor-independent half of the response normalizer. The vendor backends
//! and the storage engine implement traits defined here.

pub mod error;
pub mod normalize;
pub mod prompt;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::{FailureKind, PitchlineError};
pub use normalize::parse_model_reply;
pub use prompt::{TOPIC_PLACEHOLDER, render_prompt};
pub use types::{
    AdapterType, HealthStatus, SUGGESTION_COUNT, Suggestion, SuggestionOutcome, SuggestionRecord,
};

// Re-export the adapter traits at crate root.
pub use traits::{PluginAdapter, SuggestionProvider, SuggestionStore};
