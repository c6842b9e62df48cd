// SPDX-FileCopyrightText: 2026 Pitchline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SQLite implementation of the SuggestionStore trait.

use async_trait::async_trait;
use tokio::sync::OnceCell;
use tracing::debug;

use pitchline_config::model::StorageConfig;
use pitchline_core::{
    AdapterType, HealthStatus, PitchlineError, PluginAdapter, Suggestion, SuggestionRecord,
    SuggestionStore,
};

use crate::database::Database;
use crate::queries;

/// SQLite-backed suggestion store.
///
/// Wraps a [`Database`] handle and delegates query operations to the
/// typed query module. The database is lazily opened on the first call
/// to [`SuggestionStore::initialize`].
pub struct SqliteStore {
    config: StorageConfig,
    db: OnceCell<Database>,
}

impl SqliteStore {
    /// Create a new SqliteStore with the given configuration.
    ///
    /// The database connection is not opened until [`initialize`] is called.
    ///
    /// [`initialize`]: SuggestionStore::initialize
    pub fn new(config: StorageConfig) -> Self {
        Self {
            config,
            db: OnceCell::new(),
        }
    }

    /// Returns the underlying Database, or an error if not initialized.
    fn db(&self) -> Result<&Database, PitchlineError> {
        self.db.get().ok_or_else(|| PitchlineError::Internal(
            "storage not initialized, call initialize() first".to_string(),
        ))
    }
}

#[async_trait]
impl PluginAdapter for SqliteStore {
    fn name(&self) -> &str {
        "sqlite"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Storage
    }

    async fn health_check(&self) -> Result<HealthStatus, PitchlineError> {
        let db = self.db()?;
        db.connection()
            .call(|conn| {
                conn.execute_batch("SELECT 1;")?;
                Ok(())
            })
            .await
            .map_err(crate::database::map_tr_err)?;
        Ok(HealthStatus::Healthy)
    }

    async fn shutdown(&self) -> Result<(), PitchlineError> {
        // Checkpoint the WAL if the DB was ever opened.
        if let Some(db) = self.db.get() {
            db.connection()
                .call(|conn| {
                    conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
                    Ok(())
                })
                .await
                .map_err(crate::database::map_tr_err)?;
            debug!("shutdown: WAL checkpoint complete");
        }
        Ok(())
    }
}

#[async_trait]
impl SuggestionStore for SqliteStore {
    async fn initialize(&self) -> Result<(), PitchlineError> {
        let db = Database::open(&self.config.database_path, self.config.wal_mode).await?;
        self.db.set(db).map_err(|_| {
            PitchlineError::Internal("storage already initialized".to_string())
        })?;
        debug!(path = %self.config.database_path, "SQLite store initialized");
        Ok(())
    }

    async fn insert(
        &self,
        topic: &str,
        suggestions: &[Suggestion],
    ) -> Result<i64, PitchlineError> {
        let json = serde_json::to_string(suggestions).map_err(|e| PitchlineError::Storage {
            source: Box::new(e),
        })?;
        queries::records::insert_record(self.db()?, topic, &json).await
    }

    async fn recent(&self, limit: u32) -> Result<Vec<SuggestionRecord>, PitchlineError> {
        queries::records::list_recent(self.db()?, limit).await
    }

    async fn count(&self) -> Result<i64, PitchlineError> {
        queries::records::count_records(self.db()?).await
    }
}
