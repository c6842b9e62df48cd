// SPDX-FileCopyrightText: 2026 Pitchline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Suggestion log operations.
//!
//! The log is append-only: rows are inserted after a successful
//! suggestion response and never updated or deleted.

use pitchline_core::PitchlineError;
use rusqlite::params;

use crate::database::Database;
use crate::models::SuggestionRecord;

/// Insert a suggestion row and return its id.
///
/// `suggestions_json` is the serialized three-item array exactly as it
/// was returned to the caller; `created_at` is assigned by the schema
/// default at insert time.
pub async fn insert_record(
    db: &Database,
    topic: &str,
    suggestions_json: &str,
) -> Result<i64, PitchlineError> {
    let topic = topic.to_string();
    let suggestions_json = suggestions_json.to_string();
    db.connection()
        .call(move |conn| {
            conn.execute(
                "INSERT INTO suggestions (topic, suggestions) VALUES (?1, ?2)",
                params![topic, suggestions_json],
            )?;
            Ok(conn.last_insert_rowid())
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// Most recent suggestion rows, newest first.
pub async fn list_recent(db: &Database, limit: u32) -> Result<Vec<SuggestionRecord>, PitchlineError> {
    db.connection()
        .call(move |conn| {
            let mut stmt = conn.prepare(
                "SELECT id, topic, suggestions, created_at
                 FROM suggestions
                 ORDER BY id DESC LIMIT ?1",
            )?;
            let rows = stmt.query_map(params![limit], |row| {
                Ok(SuggestionRecord {
                    id: row.get(0)?,
                    topic: row.get(1)?,
                    suggestions: row.get(2)?,
                    created_at: row.get(3)?,
                })
            })?;
            let mut records = Vec::new();
            for row in rows {
                records.push(row?);
            }
            Ok(records)
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// Total number of stored suggestion rows.
pub async fn count_records(db: &Database) -> Result<i64, PitchlineError> {
    db.connection()
        .call(|conn| {
            let count = conn.query_row("SELECT COUNT(*) FROM suggestions", [], |row| row.get(0))?;
            Ok(count)
        })
        .await
        .map_err(crate::database::map_tr_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    async fn setup_db() -> (Database, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("records.db");
        let db = Database::open(db_path.to_str().unwrap(), true).await.unwrap();
        (db, dir)
    }

    #[tokio::test]
    async fn insert_returns_ascending_ids() {
        let (db, _dir) = setup_db().await;

        let first = insert_record(&db, "local elections", "[]").await.unwrap();
        let second = insert_record(&db, "river pollution", "[]").await.unwrap();

        assert!(first > 0);
        assert!(second > first);

        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn list_recent_orders_newest_first() {
        let (db, _dir) = setup_db().await;

        insert_record(&db, "first", "[]").await.unwrap();
        insert_record(&db, "second", "[]").await.unwrap();
        insert_record(&db, "third", "[]").await.unwrap();

        let records = list_recent(&db, 10).await.unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].topic, "third");
        assert_eq!(records[1].topic, "second");
        assert_eq!(records[2].topic, "first");

        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn list_recent_respects_limit() {
        let (db, _dir) = setup_db().await;

        for i in 0..5 {
            insert_record(&db, &format!("topic {i}"), "[]").await.unwrap();
        }

        let records = list_recent(&db, 2).await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].topic, "topic 4");
        assert_eq!(records[1].topic, "topic 3");

        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn stored_json_and_timestamp_survive_readback() {
        let (db, _dir) = setup_db().await;

        let json = r#"[{"title":"A","content":"a"},{"title":"B","content":"b"},{"title":"C","content":"c"}]"#;
        let id = insert_record(&db, "archivo histórico", json).await.unwrap();

        let records = list_recent(&db, 1).await.unwrap();
        assert_eq!(records[0].id, id);
        assert_eq!(records[0].topic, "archivo histórico");
        assert_eq!(records[0].suggestions, json);
        // Schema default produces an RFC 3339 UTC timestamp.
        assert!(records[0].created_at.contains('T'));
        assert!(records[0].created_at.ends_with('Z'));

        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn count_tracks_inserts() {
        let (db, _dir) = setup_db().await;

        assert_eq!(count_records(&db).await.unwrap(), 0);
        insert_record(&db, "a", "[]").await.unwrap();
        insert_record(&db, "b", "[]").await.unwrap();
        assert_eq!(count_records(&db).await.unwrap(), 2);

        db.close().await.unwrap();
    }
}
