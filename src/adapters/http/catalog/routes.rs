//! Axum router configuration for catalog endpoints.

use axum::{routing::get, Router};

use crate::adapters::http::AppState;

use super::handlers::{
    get_group, get_study_activity, get_word, list_group_words, list_groups, list_study_activities,
    list_words,
};

/// Routes mounted at `/api/groups`.
pub fn group_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_groups))
        .route("/:id", get(get_group))
        .route("/:id/words", get(list_group_words))
}

/// Routes mounted at `/api/words`.
pub fn word_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_words))
        .route("/:id", get(get_word))
}

/// Routes mounted at `/api/study-activities`.
pub fn study_activity_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_study_activities))
        .route("/:id", get(get_study_activity))
}
