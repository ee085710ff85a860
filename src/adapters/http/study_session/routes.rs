//! Axum router configuration for study session endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use crate::adapters::http::AppState;

use super::handlers::{
    create_study_session, get_study_session, list_session_reviews, list_study_sessions,
    record_word_review,
};

/// Create the study session API router.
///
/// # Routes
///
/// - `POST /` - Start a session
/// - `GET /` - List sessions (paginated, newest first)
/// - `GET /:id` - Get one session
/// - `GET /:id/reviews` - List a session's word reviews
/// - `POST /:id/review` - Record a word review
pub fn study_session_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_study_session).get(list_study_sessions))
        .route("/:id", get(get_study_session))
        .route("/:id/reviews", get(list_session_reviews))
        .route("/:id/review", post(record_word_review))
}
