//! HTTP handlers for study session endpoints.
//!
//! These handlers connect Axum routes to application layer command/query handlers.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::Value;
use tracing::error;

use crate::adapters::http::dto::{ErrorResponse, ItemsResponse, PaginatedResponse, PaginationParams};
use crate::adapters::http::request::{command_metadata, invalid_query, object_body, parse_id};
use crate::adapters::http::AppState;
use crate::application::handlers::study_session::{
    CreateStudySessionCommand, GetStudySessionQuery, ListSessionReviewsQuery,
    ListStudySessionsQuery, RecordWordReviewCommand,
};
use crate::domain::foundation::StudySessionId;
use crate::domain::study_session::StudySessionError;

use super::dto::{
    CreateStudySessionRequest, RecordWordReviewRequest, StudySessionResponse, WordReviewResponse,
};

const INVALID_SESSION_ID: &str = "Invalid study session ID";

// ════════════════════════════════════════════════════════════════════════════════
// Command Handlers (POST endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/study-sessions - Start a study session
pub async fn create_study_session(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<Value>, JsonRejection>,
) -> Response {
    let request: CreateStudySessionRequest = match object_body(payload) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let cmd = match CreateStudySessionCommand::from_parts(
        request.group_id,
        request.study_activity_id,
    ) {
        Ok(cmd) => cmd,
        Err(e) => return StudySessionApiError::from(e).into_response(),
    };

    let handler = state.create_study_session_handler();
    match handler.handle(cmd, command_metadata(&headers)).await {
        Ok(view) => (
            StatusCode::CREATED,
            Json(StudySessionResponse::from(view)),
        )
            .into_response(),
        Err(e) => StudySessionApiError::from(e).into_response(),
    }
}

/// POST /api/study-sessions/:id/review - Record one answer
pub async fn record_word_review(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    headers: HeaderMap,
    payload: Result<Json<Value>, JsonRejection>,
) -> Response {
    let session_id: StudySessionId = match parse_id(&session_id, INVALID_SESSION_ID) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let request: RecordWordReviewRequest = match object_body(payload) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let cmd = match RecordWordReviewCommand::from_parts(session_id, request.word_id, request.correct)
    {
        Ok(cmd) => cmd,
        Err(e) => return StudySessionApiError::from(e).into_response(),
    };

    let handler = state.record_word_review_handler();
    match handler.handle(cmd, command_metadata(&headers)).await {
        Ok(item) => (StatusCode::CREATED, Json(WordReviewResponse::from(item))).into_response(),
        Err(e) => StudySessionApiError::from(e).into_response(),
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Query Handlers (GET endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/study-sessions - Paginated sessions, newest first
pub async fn list_study_sessions(
    State(state): State<AppState>,
    params: Result<Query<PaginationParams>, QueryRejection>,
) -> Response {
    let Query(params) = match params {
        Ok(params) => params,
        Err(rejection) => return invalid_query(rejection),
    };

    let query = ListStudySessionsQuery {
        page: params.page,
        per_page: params.per_page,
    };
    match state.list_study_sessions_handler().handle(query).await {
        Ok(page) => {
            Json(PaginatedResponse::<StudySessionResponse>::from_page(page)).into_response()
        }
        Err(e) => StudySessionApiError::from(e).into_response(),
    }
}

/// GET /api/study-sessions/:id - One session view
pub async fn get_study_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Response {
    let session_id = match parse_id(&session_id, INVALID_SESSION_ID) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let query = GetStudySessionQuery { session_id };
    match state.get_study_session_handler().handle(query).await {
        Ok(view) => Json(StudySessionResponse::from(view)).into_response(),
        Err(e) => StudySessionApiError::from(e).into_response(),
    }
}

/// GET /api/study-sessions/:id/reviews - Reviews recorded in a session
pub async fn list_session_reviews(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Response {
    let session_id = match parse_id(&session_id, INVALID_SESSION_ID) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let query = ListSessionReviewsQuery { session_id };
    match state.list_session_reviews_handler().handle(query).await {
        Ok(items) => Json(ItemsResponse::<WordReviewResponse>::from_items(items)).into_response(),
        Err(e) => StudySessionApiError::from(e).into_response(),
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error wrapper for study session errors.
#[derive(Debug)]
pub struct StudySessionApiError(StudySessionError);

impl From<StudySessionError> for StudySessionApiError {
    fn from(err: StudySessionError) -> Self {
        Self(err)
    }
}

impl IntoResponse for StudySessionApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            StudySessionError::MissingFields => (StatusCode::BAD_REQUEST, self.0.message()),
            StudySessionError::GroupNotFound(_)
            | StudySessionError::ActivityNotFound(_)
            | StudySessionError::SessionNotFound(_) => (StatusCode::NOT_FOUND, self.0.message()),
            StudySessionError::Infrastructure(detail) => {
                error!(code = %self.0.code(), "Study session request failed: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}
