//! SQLite implementation of StudySessionReader.

use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::domain::foundation::{DomainError, StudySessionId};
use crate::domain::study_session::StudySessionView;
use crate::ports::{Page, PageRequest, StudySessionReader};

use super::rows::{StudySessionViewRow, SESSION_VIEW_SELECT};

#[derive(Clone)]
pub struct SqliteStudySessionReader {
    pool: SqlitePool,
}

impl SqliteStudySessionReader {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StudySessionReader for SqliteStudySessionReader {
    async fn get_by_id(
        &self,
        id: &StudySessionId,
    ) -> Result<Option<StudySessionView>, DomainError> {
        let sql = format!("{} WHERE s.id = ?", SESSION_VIEW_SELECT);
        let row: Option<StudySessionViewRow> = sqlx::query_as(&sql)
            .bind(id.as_i64())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to fetch study session", e))?;

        row.map(StudySessionView::try_from).transpose()
    }

    async fn list(&self, page: &PageRequest) -> Result<Page<StudySessionView>, DomainError> {
        let (total,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM study_sessions")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to count study sessions", e))?;

        let sql = format!(
            "{} ORDER BY s.id DESC LIMIT ? OFFSET ?",
            SESSION_VIEW_SELECT
        );
        let rows: Vec<StudySessionViewRow> = sqlx::query_as(&sql)
            .bind(page.limit() as i64)
            .bind(page.offset() as i64)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to list study sessions", e))?;

        let views = rows
            .into_iter()
            .map(StudySessionView::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Page::new(views, total.max(0) as u64, *page))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::sqlite::test_support::{
        seed_activity, seed_group, seed_session, test_database,
    };
    use crate::adapters::sqlite::SqliteWordReviewRepository;
    use crate::domain::foundation::WordId;
    use crate::domain::study_session::NewWordReview;
    use crate::ports::WordReviewRepository;

    #[tokio::test]
    async fn unreviewed_session_ends_when_it_starts() {
        let db = test_database().await;
        let group_id = seed_group(&db, "Test Group", 0).await;
        let activity_id = seed_activity(&db, "Test Activity").await;
        let session = seed_session(&db, group_id, activity_id).await;
        let reader = SqliteStudySessionReader::new(db.pool().clone());

        let view = reader.get_by_id(session.id()).await.unwrap().unwrap();

        assert_eq!(view.group_name, "Test Group");
        assert_eq!(view.activity_name, "Test Activity");
        assert_eq!(view.start_time, *session.created_at());
        assert_eq!(view.end_time, view.start_time);
        assert_eq!(view.review_items_count, 0);
    }

    #[tokio::test]
    async fn reviews_extend_end_time_and_count() {
        let db = test_database().await;
        let group_id = seed_group(&db, "Test Group", 0).await;
        let activity_id = seed_activity(&db, "Test Activity").await;
        let session = seed_session(&db, group_id, activity_id).await;
        let reviews = SqliteWordReviewRepository::new(db.pool().clone());

        let mut last = None;
        for word in 1..=3 {
            let review = NewWordReview::answered_now(*session.id(), WordId::new(word), word % 2 == 0);
            last = reviews.record(&review).await.unwrap();
        }
        let last = last.unwrap();

        let reader = SqliteStudySessionReader::new(db.pool().clone());
        let view = reader.get_by_id(session.id()).await.unwrap().unwrap();

        assert_eq!(view.review_items_count, 3);
        assert_eq!(view.end_time, last.created_at);
    }

    #[tokio::test]
    async fn get_by_id_returns_none_for_unknown_session() {
        let db = test_database().await;
        let reader = SqliteStudySessionReader::new(db.pool().clone());

        let view = reader.get_by_id(&StudySessionId::new(404)).await.unwrap();
        assert!(view.is_none());
    }

    #[tokio::test]
    async fn list_returns_newest_first() {
        let db = test_database().await;
        let group_id = seed_group(&db, "Test Group", 0).await;
        let activity_id = seed_activity(&db, "Test Activity").await;
        let first = seed_session(&db, group_id, activity_id).await;
        let second = seed_session(&db, group_id, activity_id).await;
        let reader = SqliteStudySessionReader::new(db.pool().clone());

        let page = reader.list(&PageRequest::default()).await.unwrap();

        assert_eq!(page.total_items, 2);
        let ids: Vec<_> = page.items.iter().map(|v| v.id).collect();
        assert_eq!(ids, vec![*second.id(), *first.id()]);
    }
}
