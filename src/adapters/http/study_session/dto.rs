//! HTTP DTOs for study session endpoints.
//!
//! Request fields are optional so that absent or null values reach the
//! presence check and produce "Missing required fields" instead of a
//! generic body rejection.

use serde::{Deserialize, Serialize};

use crate::domain::study_session::{StudySessionView, WordReviewItem};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Body of `POST /api/study-sessions`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateStudySessionRequest {
    #[serde(default)]
    pub group_id: Option<i64>,
    #[serde(default)]
    pub study_activity_id: Option<i64>,
}

/// Body of `POST /api/study-sessions/:id/review`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecordWordReviewRequest {
    #[serde(default)]
    pub word_id: Option<i64>,
    #[serde(default)]
    pub correct: Option<bool>,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Denormalized study session.
///
/// Note the response names the activity `activity_id` while the create
/// request calls it `study_activity_id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StudySessionResponse {
    pub id: i64,
    pub group_id: i64,
    pub activity_id: i64,
    pub group_name: String,
    pub activity_name: String,
    pub start_time: String,
    pub end_time: String,
    pub review_items_count: u64,
}

impl From<StudySessionView> for StudySessionResponse {
    fn from(view: StudySessionView) -> Self {
        Self {
            id: view.id.as_i64(),
            group_id: view.group_id.as_i64(),
            activity_id: view.activity_id.as_i64(),
            group_name: view.group_name,
            activity_name: view.activity_name,
            start_time: view.start_time.to_rfc3339(),
            end_time: view.end_time.to_rfc3339(),
            review_items_count: view.review_items_count,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WordReviewResponse {
    pub id: i64,
    pub study_session_id: i64,
    pub word_id: i64,
    pub correct: bool,
    pub created_at: String,
}

impl From<WordReviewItem> for WordReviewResponse {
    fn from(item: WordReviewItem) -> Self {
        Self {
            id: item.id.as_i64(),
            study_session_id: item.study_session_id.as_i64(),
            word_id: item.word_id.as_i64(),
            correct: item.correct,
            created_at: item.created_at.to_rfc3339(),
        }
    }
}
