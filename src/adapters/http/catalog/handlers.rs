//! HTTP handlers for the read-only catalog (groups, words and study activities).

use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::error;

use crate::adapters::http::dto::{ErrorResponse, ItemsResponse, PaginatedResponse, PaginationParams};
use crate::adapters::http::request::{invalid_query, parse_id};
use crate::adapters::http::AppState;
use crate::application::handlers::catalog::{
    GetGroupQuery, GetStudyActivityQuery, GetWordQuery, ListGroupWordsQuery, ListGroupsQuery,
    ListWordsQuery,
};
use crate::domain::catalog::CatalogError;

use super::dto::{GroupResponse, StudyActivityResponse, WordResponse};

/// GET /api/groups - Paginated groups
pub async fn list_groups(
    State(state): State<AppState>,
    params: Result<Query<PaginationParams>, QueryRejection>,
) -> Response {
    let Query(params) = match params {
        Ok(params) => params,
        Err(rejection) => return invalid_query(rejection),
    };

    let query = ListGroupsQuery {
        page: params.page,
        per_page: params.per_page,
    };
    match state.list_groups_handler().handle(query).await {
        Ok(page) => Json(PaginatedResponse::<GroupResponse>::from_page(page)).into_response(),
        Err(e) => CatalogApiError::from(e).into_response(),
    }
}

/// GET /api/groups/:id
pub async fn get_group(State(state): State<AppState>, Path(group_id): Path<String>) -> Response {
    let group_id = match parse_id(&group_id, "Invalid group ID") {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state.get_group_handler().handle(GetGroupQuery { group_id }).await {
        Ok(group) => Json(GroupResponse::from(group)).into_response(),
        Err(e) => CatalogApiError::from(e).into_response(),
    }
}

/// GET /api/groups/:id/words - Paginated words of one group
pub async fn list_group_words(
    State(state): State<AppState>,
    Path(group_id): Path<String>,
    params: Result<Query<PaginationParams>, QueryRejection>,
) -> Response {
    let group_id = match parse_id(&group_id, "Invalid group ID") {
        Ok(id) => id,
        Err(response) => return response,
    };
    let Query(params) = match params {
        Ok(params) => params,
        Err(rejection) => return invalid_query(rejection),
    };

    let query = ListGroupWordsQuery {
        group_id,
        page: params.page,
        per_page: params.per_page,
    };
    match state.list_group_words_handler().handle(query).await {
        Ok(page) => Json(PaginatedResponse::<WordResponse>::from_page(page)).into_response(),
        Err(e) => CatalogApiError::from(e).into_response(),
    }
}

/// GET /api/words - Paginated words
pub async fn list_words(
    State(state): State<AppState>,
    params: Result<Query<PaginationParams>, QueryRejection>,
) -> Response {
    let Query(params) = match params {
        Ok(params) => params,
        Err(rejection) => return invalid_query(rejection),
    };

    let query = ListWordsQuery {
        page: params.page,
        per_page: params.per_page,
    };
    match state.list_words_handler().handle(query).await {
        Ok(page) => Json(PaginatedResponse::<WordResponse>::from_page(page)).into_response(),
        Err(e) => CatalogApiError::from(e).into_response(),
    }
}

/// GET /api/words/:id
pub async fn get_word(State(state): State<AppState>, Path(word_id): Path<String>) -> Response {
    let word_id = match parse_id(&word_id, "Invalid word ID") {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state.get_word_handler().handle(GetWordQuery { word_id }).await {
        Ok(word) => Json(WordResponse::from(word)).into_response(),
        Err(e) => CatalogApiError::from(e).into_response(),
    }
}

/// GET /api/study-activities - All activities
pub async fn list_study_activities(State(state): State<AppState>) -> Response {
    match state.list_study_activities_handler().handle().await {
        Ok(activities) => {
            Json(ItemsResponse::<StudyActivityResponse>::from_items(activities)).into_response()
        }
        Err(e) => CatalogApiError::from(e).into_response(),
    }
}

/// GET /api/study-activities/:id
pub async fn get_study_activity(
    State(state): State<AppState>,
    Path(activity_id): Path<String>,
) -> Response {
    let activity_id = match parse_id(&activity_id, "Invalid study activity ID") {
        Ok(id) => id,
        Err(response) => return response,
    };

    let query = GetStudyActivityQuery { activity_id };
    match state.get_study_activity_handler().handle(query).await {
        Ok(activity) => Json(StudyActivityResponse::from(activity)).into_response(),
        Err(e) => CatalogApiError::from(e).into_response(),
    }
}

/// API error wrapper for catalog errors.
#[derive(Debug)]
pub struct CatalogApiError(CatalogError);

impl From<CatalogError> for CatalogApiError {
    fn from(err: CatalogError) -> Self {
        Self(err)
    }
}

impl IntoResponse for CatalogApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            CatalogError::GroupNotFound(_)
            | CatalogError::ActivityNotFound(_)
            | CatalogError::WordNotFound(_) => (StatusCode::NOT_FOUND, self.0.message()),
            CatalogError::Infrastructure(detail) => {
                error!(code = %self.0.code(), "Catalog request failed: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}
