// SPDX-FileCopyrightText: 2026 Pitchline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types used across adapter traits and the Pitchline service.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Number of suggestions a successful model reply must contain.
pub const SUGGESTION_COUNT: usize = 3;

/// A single journalistic content suggestion produced by the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Short headline for the suggested piece.
    pub title: String,
    /// Detailed explanation of the suggested angle.
    pub content: String,
}

/// A usable reply from the model, after normalization.
///
/// Exactly one of these is produced per upstream call; everything else
/// surfaces as [`PitchlineError::Upstream`](crate::error::PitchlineError)
/// with a [`FailureKind`](crate::error::FailureKind).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuggestionOutcome {
    /// The model produced exactly [`SUGGESTION_COUNT`] suggestions,
    /// in the order the model emitted them.
    Suggestions(Vec<Suggestion>),
    /// The model judged the topic non-journalistic and supplied its own
    /// rejection message, in the language it detected.
    RejectedTopic(String),
}

/// A persisted suggestion row, as read back from the store.
///
/// Rows are append-only: a record exists iff a caller received a 200
/// response carrying the suggestions it holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionRecord {
    /// Auto-assigned row id.
    pub id: i64,
    /// The topic the caller submitted.
    pub topic: String,
    /// The serialized JSON array of the three suggestions.
    pub suggestions: String,
    /// RFC 3339 UTC timestamp assigned at insert time.
    pub created_at: String,
}

/// Health status reported by adapter health checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthStatus {
    /// Adapter is fully operational.
    Healthy,
    /// Adapter is operational but experiencing issues.
    Degraded(String),
    /// Adapter is not operational.
    Unhealthy(String),
}

/// Identifies the type of adapter behind a trait object.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
pub enum AdapterType {
    Provider,
    Storage,
}
