//! Application state, health check and the assembled router.

use std::sync::Arc;

use axum::extract::State;
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::adapters::sqlite::{
    Database, SqliteGroupReader, SqliteStudyActivityReader, SqliteStudySessionReader,
    SqliteStudySessionRepository, SqliteWordReader, SqliteWordReviewRepository,
};
use crate::application::handlers::catalog::{
    GetGroupHandler, GetStudyActivityHandler, GetWordHandler, ListGroupWordsHandler,
    ListGroupsHandler, ListStudyActivitiesHandler, ListWordsHandler,
};
use crate::application::handlers::study_session::{
    CreateStudySessionHandler, GetStudySessionHandler, ListSessionReviewsHandler,
    ListStudySessionsHandler, RecordWordReviewHandler,
};
use crate::config::ServerConfig;
use crate::ports::{
    GroupReader, StudyActivityReader, StudySessionReader, StudySessionRepository, WordReader,
    WordReviewRepository,
};

use super::catalog::{group_routes, study_activity_routes, word_routes};
use super::study_session::study_session_routes;

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing all dependencies.
///
/// Cloned per request; every port is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub database: Database,
    pub group_reader: Arc<dyn GroupReader>,
    pub word_reader: Arc<dyn WordReader>,
    pub study_activity_reader: Arc<dyn StudyActivityReader>,
    pub study_session_repository: Arc<dyn StudySessionRepository>,
    pub study_session_reader: Arc<dyn StudySessionReader>,
    pub word_review_repository: Arc<dyn WordReviewRepository>,
}

impl AppState {
    /// Wires every port to its SQLite adapter.
    pub fn from_database(database: Database) -> Self {
        let pool = database.pool().clone();
        Self {
            group_reader: Arc::new(SqliteGroupReader::new(pool.clone())),
            word_reader: Arc::new(SqliteWordReader::new(pool.clone())),
            study_activity_reader: Arc::new(SqliteStudyActivityReader::new(pool.clone())),
            study_session_repository: Arc::new(SqliteStudySessionRepository::new(pool.clone())),
            study_session_reader: Arc::new(SqliteStudySessionReader::new(pool.clone())),
            word_review_repository: Arc::new(SqliteWordReviewRepository::new(pool)),
            database,
        }
    }

    pub fn create_study_session_handler(&self) -> CreateStudySessionHandler {
        CreateStudySessionHandler::new(self.study_session_repository.clone())
    }

    pub fn get_study_session_handler(&self) -> GetStudySessionHandler {
        GetStudySessionHandler::new(self.study_session_reader.clone())
    }

    pub fn list_study_sessions_handler(&self) -> ListStudySessionsHandler {
        ListStudySessionsHandler::new(self.study_session_reader.clone())
    }

    pub fn record_word_review_handler(&self) -> RecordWordReviewHandler {
        RecordWordReviewHandler::new(self.word_review_repository.clone())
    }

    pub fn list_session_reviews_handler(&self) -> ListSessionReviewsHandler {
        ListSessionReviewsHandler::new(
            self.study_session_reader.clone(),
            self.word_review_repository.clone(),
        )
    }

    pub fn get_group_handler(&self) -> GetGroupHandler {
        GetGroupHandler::new(self.group_reader.clone())
    }

    pub fn list_groups_handler(&self) -> ListGroupsHandler {
        ListGroupsHandler::new(self.group_reader.clone())
    }

    pub fn get_word_handler(&self) -> GetWordHandler {
        GetWordHandler::new(self.word_reader.clone())
    }

    pub fn list_words_handler(&self) -> ListWordsHandler {
        ListWordsHandler::new(self.word_reader.clone())
    }

    pub fn list_group_words_handler(&self) -> ListGroupWordsHandler {
        ListGroupWordsHandler::new(self.group_reader.clone(), self.word_reader.clone())
    }

    pub fn get_study_activity_handler(&self) -> GetStudyActivityHandler {
        GetStudyActivityHandler::new(self.study_activity_reader.clone())
    }

    pub fn list_study_activities_handler(&self) -> ListStudyActivitiesHandler {
        ListStudyActivitiesHandler::new(self.study_activity_reader.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Health
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthResponse {
    pub status: String,
    pub database: String,
}

/// GET /health - Liveness plus a database round trip
pub async fn health_check(State(state): State<AppState>) -> Response {
    match state.database.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "healthy".to_string(),
                database: "connected".to_string(),
            }),
        )
            .into_response(),
        Err(e) => {
            warn!("Health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "unhealthy".to_string(),
                    database: "disconnected".to_string(),
                }),
            )
                .into_response()
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Router
// ════════════════════════════════════════════════════════════════════════════════

/// All routes, without middleware.
pub fn api_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .nest("/api/study-sessions", study_session_routes())
        .nest("/api/groups", group_routes())
        .nest("/api/words", word_routes())
        .nest("/api/study-activities", study_activity_routes())
}

/// The full application: routes, state and the tower-http middleware stack.
pub fn app(state: AppState, config: &ServerConfig) -> Router {
    api_router()
        .with_state(state)
        .layer(CompressionLayer::new())
        .layer(cors_layer(config))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TimeoutLayer::new(config.request_timeout()))
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}

fn cors_layer(config: &ServerConfig) -> CorsLayer {
    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    let origins: Vec<HeaderValue> = config
        .cors_origins_list()
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("CORS: ignoring invalid origin {:?}", origin);
                None
            }
        })
        .collect();

    if origins.is_empty() {
        if config.is_production() {
            warn!("CORS: allowing all origins in production; set cors_origins");
        }
        cors.allow_origin(Any)
    } else {
        info!("CORS: allowing origins {:?}", origins);
        cors.allow_origin(AllowOrigin::list(origins))
    }
}
