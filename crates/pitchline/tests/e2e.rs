// SPDX-FileCopyrightText: 2026 Pitchline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end integration tests for the complete suggestion pipeline.
//!
//! Each test wires the real axum router to a real SQLite store on a temp
//! directory, with a scripted mock provider standing in for the upstream
//! vendor. Tests are independent and order-insensitive.

use std::sync::Arc;
use std::time::Instant;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use pitchline_config::model::StorageConfig;
use pitchline_core::{
    FailureKind, PitchlineError, PluginAdapter, SuggestionOutcome, SuggestionStore,
};
use pitchline_gateway::{AppState, build_router};
use pitchline_storage::SqliteStore;
use pitchline_test_utils::MockProvider;

async fn open_store(dir: &tempfile::TempDir) -> Arc<SqliteStore> {
    let store = SqliteStore::new(StorageConfig {
        database_path: dir.path().join("e2e.db").to_string_lossy().to_string(),
        wal_mode: true,
    });
    store.initialize().await.unwrap();
    Arc::new(store)
}

fn router(provider: Arc<MockProvider>, store: Arc<SqliteStore>) -> Router {
    build_router(AppState {
        provider,
        store,
        start_time: Instant::now(),
    })
}

fn post_topic(topic: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/v1/suggestions")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::json!({ "prompt": topic }).to_string(),
        ))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

// ---- Test 1: Suggestion round trip ----

#[tokio::test]
async fn suggestion_round_trip_persists_to_sqlite() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let store = open_store(&temp_dir).await;
    let provider = Arc::new(MockProvider::new());
    let app = router(Arc::clone(&provider), Arc::clone(&store));

    let response = app
        .clone()
        .oneshot(post_topic("City transit budgets"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["suggestions"].as_array().unwrap().len(), 3);
    assert_eq!(json["prompt"], "City transit budgets");

    // The delivered suggestions are on disk, as a JSON array.
    assert_eq!(store.count().await.unwrap(), 1);
    let records = store.recent(10).await.unwrap();
    assert_eq!(records[0].topic, "City transit budgets");
    let stored: serde_json::Value = serde_json::from_str(&records[0].suggestions).unwrap();
    assert_eq!(stored.as_array().unwrap().len(), 3);

    // And visible through the read endpoint.
    let response = app
        .oneshot(
            Request::builder()
                .uri("/v1/suggestions")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let json = body_json(response).await;
    assert_eq!(json["suggestions"][0]["topic"], "City transit budgets");
}

// ---- Test 2: Model rejection ----

#[tokio::test]
async fn rejected_topic_returns_400_and_persists_nothing() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let store = open_store(&temp_dir).await;
    let provider = Arc::new(MockProvider::with_outcomes(vec![Ok(
        SuggestionOutcome::RejectedTopic("El tema no es periodístico.".to_string()),
    )]));
    let app = router(provider, Arc::clone(&store));

    let response = app.oneshot(post_topic("qwerty")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "El tema no es periodístico.");
    assert_eq!(store.count().await.unwrap(), 0);
}

// ---- Test 3: Upstream failures ----

#[tokio::test]
async fn prompt_block_surfaces_the_block_reason() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let store = open_store(&temp_dir).await;
    let provider = Arc::new(MockProvider::with_outcomes(vec![Err(
        PitchlineError::upstream(
            FailureKind::PromptBlocked,
            "the Gemini API blocked the prompt. Reason: SAFETY. Safety ratings: N/A",
        ),
    )]));
    let app = router(provider, Arc::clone(&store));

    let response = app.oneshot(post_topic("blocked topic")).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["error"], "An unexpected error occurred.");
    assert!(json["message"].as_str().unwrap().contains("Reason: SAFETY"));
    assert_eq!(store.count().await.unwrap(), 0);
}

#[tokio::test]
async fn bad_model_json_returns_500_and_persists_nothing() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let store = open_store(&temp_dir).await;
    let provider = Arc::new(MockProvider::with_outcomes(vec![Err(
        PitchlineError::upstream(FailureKind::BadModelJson, "expected value at line 1"),
    )]));
    let app = router(provider, Arc::clone(&store));

    let response = app.oneshot(post_topic("Energy markets")).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(store.count().await.unwrap(), 0);
}

// ---- Test 4: Validation happens before the provider ----

#[tokio::test]
async fn out_of_bounds_topics_never_invoke_the_provider() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let store = open_store(&temp_dir).await;
    let provider = Arc::new(MockProvider::new());

    let long_topic = "a".repeat(256);
    for topic in ["", "ab", long_topic.as_str()] {
        let app = router(Arc::clone(&provider), Arc::clone(&store));
        let response = app.oneshot(post_topic(topic)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    assert_eq!(provider.call_count().await, 0);
    assert_eq!(store.count().await.unwrap(), 0);
}

// ---- Test 5: Durability across restart ----

#[tokio::test]
async fn persisted_suggestions_survive_a_store_restart() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let store = open_store(&temp_dir).await;
    let app = router(Arc::new(MockProvider::new()), Arc::clone(&store));

    let response = app.oneshot(post_topic("Harbor expansion")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // Checkpoint and reopen the same file, as a process restart would.
    store.shutdown().await.unwrap();
    let reopened = open_store(&temp_dir).await;

    let records = reopened.recent(10).await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].topic, "Harbor expansion");
}
