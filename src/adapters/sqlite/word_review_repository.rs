//! SQLite implementation of WordReviewRepository.

use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::domain::foundation::{DomainError, StudySessionId, WordReviewItemId};
use crate::domain::study_session::{NewWordReview, WordReviewItem};
use crate::ports::WordReviewRepository;

use super::rows::WordReviewRow;

#[derive(Clone)]
pub struct SqliteWordReviewRepository {
    pool: SqlitePool,
}

impl SqliteWordReviewRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WordReviewRepository for SqliteWordReviewRepository {
    async fn record(&self, review: &NewWordReview) -> Result<Option<WordReviewItem>, DomainError> {
        // One statement: the session check and the insert run under the
        // same write lock.
        let result = sqlx::query(
            r#"
            INSERT INTO word_review_items (word_id, study_session_id, correct, created_at)
            SELECT ?, ?, ?, ?
            WHERE EXISTS (SELECT 1 FROM study_sessions WHERE id = ?)
            "#,
        )
        .bind(review.word_id.as_i64())
        .bind(review.study_session_id.as_i64())
        .bind(review.correct)
        .bind(review.created_at.as_datetime())
        .bind(review.study_session_id.as_i64())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to insert word review", e))?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        let id = WordReviewItemId::new(result.last_insert_rowid());
        Ok(Some(review.clone().into_item(id)))
    }

    async fn list_for_session(
        &self,
        session_id: &StudySessionId,
    ) -> Result<Vec<WordReviewItem>, DomainError> {
        let rows: Vec<WordReviewRow> = sqlx::query_as(
            r#"
            SELECT id, study_session_id, word_id, correct, created_at
            FROM word_review_items
            WHERE study_session_id = ?
            ORDER BY id
            "#,
        )
        .bind(session_id.as_i64())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to list word reviews", e))?;

        Ok(rows.into_iter().map(WordReviewItem::from).collect())
    }
}
