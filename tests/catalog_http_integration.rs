//! Integration tests for group, word, study activity and health endpoints.

mod common;

use axum::http::StatusCode;
use serde_json::json;

use lang_portal::adapters::Database;
use lang_portal::config::DatabaseConfig;

use common::{get, post_json, router, seeded_database};

#[tokio::test]
async fn get_group_returns_seeded_group() {
    let db = seeded_database().await;

    let (status, body) = get(router(&db), "/api/groups/1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"id": 1, "name": "Test Group", "words_count": 0}));
}

#[tokio::test]
async fn get_unknown_group_is_404() {
    let db = seeded_database().await;

    let (status, body) = get(router(&db), "/api/groups/99999").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Group not found"}));
}

#[tokio::test]
async fn list_groups_clamps_per_page() {
    let db = seeded_database().await;
    for name in ["Verbs", "Nouns"] {
        sqlx::query("INSERT INTO groups (name, words_count) VALUES (?, 3)")
            .bind(name)
            .execute(db.pool())
            .await
            .unwrap();
    }

    let (status, body) = get(router(&db), "/api/groups?per_page=500").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["items"].as_array().unwrap().len(), 3);
    assert_eq!(body["items"][1]["name"], "Verbs");
    assert_eq!(body["pagination"]["items_per_page"], 100);
    assert_eq!(body["pagination"]["total_pages"], 1);
}

async fn seed_words(db: &Database) {
    sqlx::query(
        "INSERT INTO words (id, english, portuguese, parts) VALUES \
         (1, 'to speak', 'falar', 'verb'), (2, 'house', 'casa', 'noun'), (3, 'to eat', 'comer', 'verb')",
    )
    .execute(db.pool())
    .await
    .unwrap();
    sqlx::query("INSERT INTO words_groups (word_id, group_id) VALUES (1, 1), (3, 1)")
        .execute(db.pool())
        .await
        .unwrap();
}

#[tokio::test]
async fn words_list_and_get() {
    let db = seeded_database().await;
    seed_words(&db).await;

    let (status, body) = get(router(&db), "/api/words?per_page=2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["items"].as_array().unwrap().len(), 2);
    assert_eq!(body["pagination"]["total_items"], 3);
    assert_eq!(body["pagination"]["total_pages"], 2);

    let (status, body) = get(router(&db), "/api/words/2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"id": 2, "english": "house", "portuguese": "casa", "parts": "noun"})
    );

    let (status, body) = get(router(&db), "/api/words/404").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Word not found"}));

    let (status, body) = get(router(&db), "/api/words/first").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid word ID");
}

#[tokio::test]
async fn group_words_follow_membership() {
    let db = seeded_database().await;
    seed_words(&db).await;

    let (status, body) = get(router(&db), "/api/groups/1/words").await;
    assert_eq!(status, StatusCode::OK);
    let portuguese: Vec<&str> = body["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|w| w["portuguese"].as_str().unwrap())
        .collect();
    assert_eq!(portuguese, vec!["falar", "comer"]);
    assert_eq!(body["pagination"]["total_items"], 2);

    let (status, body) = get(router(&db), "/api/groups/99/words").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Group not found");
}

#[tokio::test]
async fn study_activities_list_and_get() {
    let db = seeded_database().await;

    let (status, body) = get(router(&db), "/api/study-activities").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["items"],
        json!([{
            "id": 1,
            "name": "Test Activity",
            "url": "http://test.com",
            "preview_url": "http://test.com/preview"
        }])
    );

    let (status, body) = get(router(&db), "/api/study-activities/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Test Activity");

    let (status, body) = get(router(&db), "/api/study-activities/99999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Study activity not found");
}

#[tokio::test]
async fn health_reflects_database_state() {
    let db = seeded_database().await;

    let (status, body) = get(router(&db), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "healthy", "database": "connected"}));

    db.close().await;
    let (status, body) = get(router(&db), "/health").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["database"], "disconnected");
}

#[tokio::test]
async fn file_backed_database_survives_reconnect() {
    let dir = tempfile::tempdir().unwrap();
    let config = DatabaseConfig {
        url: format!("sqlite://{}", dir.path().join("words.db").display()),
        ..Default::default()
    };

    let db = Database::connect(&config).await.unwrap();
    sqlx::query("INSERT INTO groups (name) VALUES ('Persistent')")
        .execute(db.pool())
        .await
        .unwrap();
    sqlx::query("INSERT INTO study_activities (name, url) VALUES ('Quiz', 'http://quiz')")
        .execute(db.pool())
        .await
        .unwrap();
    let (status, created) = post_json(
        router(&db),
        "/api/study-sessions",
        json!({"group_id": 1, "study_activity_id": 1}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    db.close().await;

    let reopened = Database::connect(&config).await.unwrap();
    let (status, fetched) = get(
        router(&reopened),
        &format!("/api/study-sessions/{}", created["id"]),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
    reopened.close().await;
}
