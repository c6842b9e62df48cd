// SPDX-FileCopyrightText: 2026 Pitchline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Database connection management with PRAGMA setup, WAL mode, and lifecycle.
//!
//! All writes are serialized through tokio-rusqlite's single background thread.
//! Do NOT create additional Connection instances for writes.

use std::path::Path;

use pitchline_core::PitchlineError;
use tokio_rusqlite::Connection;
use tracing::debug;

/// Handle to the service database.
///
/// Opening runs all pending migrations. The handle is the single writer;
/// query modules accept `&Database` and go through [`Database::connection`].
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Opens (creating if needed) the database at `path` and migrates it.
    ///
    /// Parent directories are created first, so a fresh XDG data path
    /// works without any setup step.
    pub async fn open(path: &str, wal_mode: bool) -> Result<Self, PitchlineError> {
        if let Some(parent) = Path::new(path).parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|e| PitchlineError::Storage {
                        source: Box::new(e),
                    })?;
            }
        }

        let conn = Connection::open(path)
            .await
            .map_err(|e| map_tr_err(e.into()))?;

        conn.call(move |conn| {
            if wal_mode {
                conn.execute_batch(
                    "PRAGMA journal_mode=WAL;
                     PRAGMA synchronous=NORMAL;",
                )?;
            }
            conn.execute_batch(
                "PRAGMA foreign_keys=ON;
                 PRAGMA busy_timeout=5000;",
            )?;
            Ok(())
        })
        .await
        .map_err(map_tr_err)?;

        conn.call(|conn| crate::migrations::run_migrations(conn))
            .await
            .map_err(|e| PitchlineError::Storage {
                source: format!("migrations failed: {e}").into(),
            })?;

        debug!(path, wal_mode, "database opened and migrated");
        Ok(Self { conn })
    }

    /// Returns the underlying serialized connection handle.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Checkpoints the WAL; the connection handle is dropped on return.
    pub async fn close(self) -> Result<(), PitchlineError> {
        self.conn
            .call(|conn| {
                conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
                Ok(())
            })
            .await
            .map_err(map_tr_err)?;
        debug!("database closed");
        Ok(())
    }
}

/// Maps a tokio-rusqlite error into the service error type.
pub fn map_tr_err(e: tokio_rusqlite::Error) -> PitchlineError {
    PitchlineError::Storage {
        source: Box::new(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn open_creates_file_and_schema() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("open.db");

        let db = Database::open(db_path.to_str().unwrap(), true).await.unwrap();
        assert!(db_path.exists());

        // The migrated table is queryable.
        let count: i64 = db
            .connection()
            .call(|conn| {
                let n = conn.query_row("SELECT COUNT(*) FROM suggestions", [], |row| row.get(0))?;
                Ok::<_, rusqlite::Error>(n)
            })
            .await
            .unwrap();
        assert_eq!(count, 0);

        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn open_creates_missing_parent_directories() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("nested").join("deeper").join("data.db");

        let db = Database::open(db_path.to_str().unwrap(), true).await.unwrap();
        assert!(db_path.exists());
        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn reopen_is_idempotent_and_preserves_rows() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("reopen.db");
        let path = db_path.to_str().unwrap().to_string();

        let db = Database::open(&path, true).await.unwrap();
        db.connection()
            .call(|conn| {
                conn.execute(
                    "INSERT INTO suggestions (topic, suggestions) VALUES (?1, ?2)",
                    rusqlite::params!["t", "[]"],
                )?;
                Ok::<_, rusqlite::Error>(())
            })
            .await
            .unwrap();
        db.close().await.unwrap();

        // Second open must not re-run V1 against the existing schema.
        let db = Database::open(&path, true).await.unwrap();
        let count: i64 = db
            .connection()
            .call(|conn| {
                let n = conn.query_row("SELECT COUNT(*) FROM suggestions", [], |row| row.get(0))?;
                Ok::<_, rusqlite::Error>(n)
            })
            .await
            .unwrap();
        assert_eq!(count, 1);
        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn open_without_wal_mode_still_works() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("rollback.db");

        let db = Database::open(db_path.to_str().unwrap(), false).await.unwrap();
        let mode: String = db
            .connection()
            .call(|conn| {
                let m = conn.query_row("PRAGMA journal_mode", [], |row| row.get(0))?;
                Ok::<_, rusqlite::Error>(m)
            })
            .await
            .unwrap();
        assert_ne!(mode.to_lowercase(), "wal");
        db.close().await.unwrap();
    }
}
