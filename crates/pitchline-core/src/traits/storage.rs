// SPDX-FileCopyrightText: 2026 Pitchline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Storage adapter trait for the append-only suggestion log.

use async_trait::async_trait;

use crate::error::PitchlineError;
use crate::traits::adapter::PluginAdapter;
use crate::types::{Suggestion, SuggestionRecord};

/// Adapter for persisting delivered suggestions.
///
/// The log is append-only: records are inserted when a caller receives a
/// 200 response and are never updated or deleted afterwards. Implementations
/// serialize their own writes; callers never coordinate concurrent inserts.
#[async_trait]
pub trait SuggestionStore: PluginAdapter {
    /// Prepares the store for use (opens the database, runs migrations).
    async fn initialize(&self) -> Result<(), PitchlineError>;

    /// Appends one record and returns its row id.
    ///
    /// The suggestions are stored as a serialized JSON array, exactly as
    /// they were delivered to the caller.
    async fn insert(
        &self,
        topic: &str,
        suggestions: &[Suggestion],
    ) -> Result<i64, PitchlineError>;

    /// Returns up to `limit` records, newest first.
    async fn recent(&self, limit: u32) -> Result<Vec<SuggestionRecord>, PitchlineError>;

    /// Returns the total number of persisted records.
    async fn count(&self) -> Result<i64, PitchlineError>;
}
