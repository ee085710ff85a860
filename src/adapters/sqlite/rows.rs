//! Row types shared by the SQLite adapters.

use chrono::{DateTime, Utc};

use crate::domain::catalog::{Group, StudyActivity, Word};
use crate::domain::foundation::{
    DomainError, ErrorCode, GroupId, StudyActivityId, StudySessionId, Timestamp, WordId,
    WordReviewItemId,
};
use crate::domain::study_session::{StudySessionView, WordReviewItem};

#[derive(Debug, sqlx::FromRow)]
pub(super) struct GroupRow {
    pub id: i64,
    pub name: String,
    pub words_count: i64,
}

impl TryFrom<GroupRow> for Group {
    type Error = DomainError;

    fn try_from(row: GroupRow) -> Result<Self, Self::Error> {
        Group::from_row(row.id, row.name, row.words_count).map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Invalid group row: {}", e))
        })
    }
}

#[derive(Debug, sqlx::FromRow)]
pub(super) struct StudyActivityRow {
    pub id: i64,
    pub name: String,
    pub url: String,
    pub preview_url: Option<String>,
}

impl From<StudyActivityRow> for StudyActivity {
    fn from(row: StudyActivityRow) -> Self {
        StudyActivity::new(
            StudyActivityId::new(row.id),
            row.name,
            row.url,
            row.preview_url,
        )
    }
}

#[derive(Debug, sqlx::FromRow)]
pub(super) struct WordRow {
    pub id: i64,
    pub english: String,
    pub portuguese: String,
    pub parts: String,
}

impl From<WordRow> for Word {
    fn from(row: WordRow) -> Self {
        Word::new(WordId::new(row.id), row.english, row.portuguese, row.parts)
    }
}

/// Joined session row with aggregate review data.
#[derive(Debug, sqlx::FromRow)]
pub(super) struct StudySessionViewRow {
    pub id: i64,
    pub group_id: i64,
    pub activity_id: i64,
    pub group_name: String,
    pub activity_name: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub review_items_count: i64,
}

impl TryFrom<StudySessionViewRow> for StudySessionView {
    type Error = DomainError;

    fn try_from(row: StudySessionViewRow) -> Result<Self, Self::Error> {
        let review_items_count = u64::try_from(row.review_items_count).map_err(|_| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Invalid review count: {}", row.review_items_count),
            )
        })?;

        Ok(StudySessionView {
            id: StudySessionId::new(row.id),
            group_id: GroupId::new(row.group_id),
            activity_id: StudyActivityId::new(row.activity_id),
            group_name: row.group_name,
            activity_name: row.activity_name,
            start_time: Timestamp::from_datetime(row.start_time),
            end_time: Timestamp::from_datetime(row.end_time),
            review_items_count,
        })
    }
}

#[derive(Debug, sqlx::FromRow)]
pub(super) struct WordReviewRow {
    pub id: i64,
    pub study_session_id: i64,
    pub word_id: i64,
    pub correct: bool,
    pub created_at: DateTime<Utc>,
}

impl From<WordReviewRow> for WordReviewItem {
    fn from(row: WordReviewRow) -> Self {
        WordReviewItem {
            id: WordReviewItemId::new(row.id),
            study_session_id: StudySessionId::new(row.study_session_id),
            word_id: WordId::new(row.word_id),
            correct: row.correct,
            created_at: Timestamp::from_datetime(row.created_at),
        }
    }
}

/// SELECT list producing a [`StudySessionViewRow`]. `end_time` is the most
/// recent review (by insertion order) or the start time.
pub(super) const SESSION_VIEW_SELECT: &str = r#"
SELECT
    s.id AS id,
    s.group_id AS group_id,
    s.study_activity_id AS activity_id,
    g.name AS group_name,
    a.name AS activity_name,
    s.created_at AS start_time,
    COALESCE(
        (SELECT w.created_at FROM word_review_items w
         WHERE w.study_session_id = s.id
         ORDER BY w.id DESC LIMIT 1),
        s.created_at
    ) AS end_time,
    (SELECT COUNT(*) FROM word_review_items w WHERE w.study_session_id = s.id)
        AS review_items_count
FROM study_sessions s
JOIN groups g ON g.id = s.group_id
JOIN study_activities a ON a.id = s.study_activity_id
"#;
