// SPDX-FileCopyrightText: 2026 Pitchline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory suggestion store for deterministic testing.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};
use tokio::sync::Mutex;

use pitchline_core::{
    AdapterType, HealthStatus, PitchlineError, PluginAdapter, Suggestion, SuggestionRecord,
    SuggestionStore,
};

/// An in-memory store that mirrors the SQLite adapter's behavior.
///
/// Rows get ascending ids and RFC 3339 timestamps; `recent` returns
/// newest first. Insert failures can be injected to exercise the
/// gateway's persistence error path.
pub struct MemoryStore {
    records: Arc<Mutex<Vec<SuggestionRecord>>>,
    fail_inserts: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            records: Arc::new(Mutex::new(Vec::new())),
            fail_inserts: AtomicBool::new(false),
        }
    }

    /// When set, every subsequent insert fails with a storage error.
    pub fn set_fail_inserts(&self, fail: bool) {
        self.fail_inserts.store(fail, Ordering::SeqCst);
    }

    /// All stored records, oldest first.
    pub async fn records(&self) -> Vec<SuggestionRecord> {
        self.records.lock().await.clone()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PluginAdapter for MemoryStore {
    fn name(&self) -> &str {
        "memory"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Storage
    }

    async fn health_check(&self) -> Result<HealthStatus, PitchlineError> {
        Ok(HealthStatus::Healthy)
    }

    async fn shutdown(&self) -> Result<(), PitchlineError> {
        Ok(())
    }
}

#[async_trait]
impl SuggestionStore for MemoryStore {
    async fn initialize(&self) -> Result<(), PitchlineError> {
        Ok(())
    }

    async fn insert(
        &self,
        topic: &str,
        suggestions: &[Suggestion],
    ) -> Result<i64, PitchlineError> {
        if self.fail_inserts.load(Ordering::SeqCst) {
            return Err(PitchlineError::Storage {
                source: "scripted insert failure".into(),
            });
        }

        let json = serde_json::to_string(suggestions).map_err(|e| PitchlineError::Storage {
            source: Box::new(e),
        })?;

        let mut records = self.records.lock().await;
        let id = records.len() as i64 + 1;
        records.push(SuggestionRecord {
            id,
            topic: topic.to_string(),
            suggestions: json,
            created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        });
        Ok(id)
    }

    async fn recent(&self, limit: u32) -> Result<Vec<SuggestionRecord>, PitchlineError> {
        let records = self.records.lock().await;
        Ok(records.iter().rev().take(limit as usize).cloned().collect())
    }

    async fn count(&self) -> Result<i64, PitchlineError> {
        Ok(self.records.lock().await.len() as i64)
    }
}
