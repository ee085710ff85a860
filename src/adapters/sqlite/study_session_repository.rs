//! SQLite implementation of StudySessionRepository.
//!
//! The checked insert and the reference lookups share one transaction.
//! Any early return drops the transaction, which rolls it back, so the
//! row only survives once every conversion has succeeded.

use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::domain::catalog::{Group, StudyActivity};
use crate::domain::foundation::{DomainError, ErrorCode, StudySessionId};
use crate::domain::study_session::NewStudySession;
use crate::ports::{SessionInsert, StudySessionRepository};

use super::rows::{GroupRow, StudyActivityRow};

#[derive(Clone)]
pub struct SqliteStudySessionRepository {
    pool: SqlitePool,
}

impl SqliteStudySessionRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StudySessionRepository for SqliteStudySessionRepository {
    async fn create(&self, session: &NewStudySession) -> Result<SessionInsert, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::database("Failed to start transaction", e))?;

        // The insert must be the first statement: it takes the write lock
        // through busy_timeout. Reading first would pin a snapshot that a
        // concurrent commit turns into an immediate SQLITE_BUSY.
        let result = sqlx::query(
            r#"
            INSERT INTO study_sessions (group_id, study_activity_id, created_at)
            SELECT ?, ?, ?
            WHERE EXISTS (SELECT 1 FROM groups WHERE id = ?)
              AND EXISTS (SELECT 1 FROM study_activities WHERE id = ?)
            "#,
        )
        .bind(session.group_id.as_i64())
        .bind(session.study_activity_id.as_i64())
        .bind(session.created_at.as_datetime())
        .bind(session.group_id.as_i64())
        .bind(session.study_activity_id.as_i64())
        .execute(&mut *tx)
        .await
        .map_err(|e| DomainError::database("Failed to insert study session", e))?;

        let group_row: Option<GroupRow> =
            sqlx::query_as("SELECT id, name, words_count FROM groups WHERE id = ?")
                .bind(session.group_id.as_i64())
                .fetch_optional(&mut *tx)
                .await
                .map_err(|e| DomainError::database("Failed to fetch group", e))?;
        let Some(group_row) = group_row else {
            return Ok(SessionInsert::GroupMissing);
        };

        let activity_row: Option<StudyActivityRow> = sqlx::query_as(
            "SELECT id, name, url, preview_url FROM study_activities WHERE id = ?",
        )
        .bind(session.study_activity_id.as_i64())
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| DomainError::database("Failed to fetch study activity", e))?;
        let Some(activity_row) = activity_row else {
            return Ok(SessionInsert::ActivityMissing);
        };

        if result.rows_affected() != 1 {
            return Err(DomainError::new(
                ErrorCode::DatabaseError,
                "Study session insert affected no rows",
            ));
        }

        let id = StudySessionId::new(result.last_insert_rowid());
        let inserted = SessionInsert::Inserted {
            session: session.clone().into_session(id),
            group: Group::try_from(group_row)?,
            activity: StudyActivity::from(activity_row),
        };

        tx.commit()
            .await
            .map_err(|e| DomainError::database("Failed to commit transaction", e))?;

        Ok(inserted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::sqlite::test_support::{
        count_sessions, seed_activity, seed_group, test_database,
    };
    use crate::domain::foundation::{GroupId, StudyActivityId};

    #[tokio::test]
    async fn create_inserts_and_returns_references() {
        let db = test_database().await;
        let group_id = seed_group(&db, "Test Group", 5).await;
        let activity_id = seed_activity(&db, "Test Activity").await;
        let repo = SqliteStudySessionRepository::new(db.pool().clone());

        let new = NewStudySession::starting_now(group_id, activity_id);
        let outcome = repo.create(&new).await.unwrap();

        let SessionInsert::Inserted {
            session,
            group,
            activity,
        } = outcome
        else {
            panic!("expected insert, got {:?}", outcome);
        };
        assert_eq!(session.group_id(), &group_id);
        assert_eq!(session.created_at(), &new.created_at);
        assert_eq!(group.name, "Test Group");
        assert_eq!(activity.name, "Test Activity");
        assert_eq!(count_sessions(&db).await, 1);
    }

    #[tokio::test]
    async fn create_reports_missing_group_first() {
        let db = test_database().await;
        let repo = SqliteStudySessionRepository::new(db.pool().clone());

        let new = NewStudySession::starting_now(GroupId::new(99999), StudyActivityId::new(99999));
        let outcome = repo.create(&new).await.unwrap();

        assert_eq!(outcome, SessionInsert::GroupMissing);
        assert_eq!(count_sessions(&db).await, 0);
    }

    #[tokio::test]
    async fn create_reports_missing_activity() {
        let db = test_database().await;
        let group_id = seed_group(&db, "Test Group", 0).await;
        let repo = SqliteStudySessionRepository::new(db.pool().clone());

        let new = NewStudySession::starting_now(group_id, StudyActivityId::new(99999));
        let outcome = repo.create(&new).await.unwrap();

        assert_eq!(outcome, SessionInsert::ActivityMissing);
        assert_eq!(count_sessions(&db).await, 0);
    }

    #[tokio::test]
    async fn repeated_creates_get_distinct_ids() {
        let db = test_database().await;
        let group_id = seed_group(&db, "Test Group", 0).await;
        let activity_id = seed_activity(&db, "Test Activity").await;
        let repo = SqliteStudySessionRepository::new(db.pool().clone());

        let mut ids = Vec::new();
        for _ in 0..2 {
            let new = NewStudySession::starting_now(group_id, activity_id);
            match repo.create(&new).await.unwrap() {
                SessionInsert::Inserted { session, .. } => ids.push(*session.id()),
                other => panic!("expected insert, got {:?}", other),
            }
        }

        assert_ne!(ids[0], ids[1]);
    }

    #[tokio::test]
    async fn create_keeps_large_word_counts() {
        let db = test_database().await;
        let group_id = seed_group(&db, "Big Deck", 5_000_000_000).await;
        let activity_id = seed_activity(&db, "Test Activity").await;
        let repo = SqliteStudySessionRepository::new(db.pool().clone());

        let outcome = repo
            .create(&NewStudySession::starting_now(group_id, activity_id))
            .await
            .unwrap();

        let SessionInsert::Inserted { group, .. } = outcome else {
            panic!("expected insert, got {:?}", outcome);
        };
        assert_eq!(group.words_count, 5_000_000_000);
        assert_eq!(count_sessions(&db).await, 1);
    }

    #[tokio::test]
    async fn unreadable_group_rolls_back_insert() {
        let db = test_database().await;
        // SQLite's trim() only strips spaces, so a tab-only name passes the
        // column check but not Group::new.
        let group_id = seed_group(&db, "\t", 0).await;
        let activity_id = seed_activity(&db, "Test Activity").await;
        let repo = SqliteStudySessionRepository::new(db.pool().clone());

        let result = repo
            .create(&NewStudySession::starting_now(group_id, activity_id))
            .await;

        assert!(result.is_err());
        assert_eq!(count_sessions(&db).await, 0);
    }

    #[tokio::test]
    async fn failed_insert_writes_nothing() {
        let db = test_database().await;
        let group_id = seed_group(&db, "Test Group", 0).await;
        let activity_id = seed_activity(&db, "Test Activity").await;
        sqlx::query(
            "CREATE TRIGGER reject_sessions BEFORE INSERT ON study_sessions \
             BEGIN SELECT RAISE(ABORT, 'disk full'); END",
        )
        .execute(db.pool())
        .await
        .unwrap();
        let repo = SqliteStudySessionRepository::new(db.pool().clone());

        let err = repo
            .create(&NewStudySession::starting_now(group_id, activity_id))
            .await
            .unwrap_err();

        assert_eq!(err.code, crate::domain::foundation::ErrorCode::DatabaseError);
        assert_eq!(count_sessions(&db).await, 0);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_creates_on_file_database_all_succeed() {
        let dir = tempfile::tempdir().unwrap();
        let config = crate::config::DatabaseConfig {
            url: format!("sqlite://{}", dir.path().join("words.db").display()),
            max_connections: 8,
            ..Default::default()
        };
        let db = crate::adapters::sqlite::Database::connect(&config)
            .await
            .unwrap();
        let group_id = seed_group(&db, "Test Group", 0).await;
        let activity_id = seed_activity(&db, "Test Activity").await;
        let repo = SqliteStudySessionRepository::new(db.pool().clone());

        let tasks: Vec<_> = (0..64)
            .map(|_| {
                let repo = repo.clone();
                tokio::spawn(async move {
                    repo.create(&NewStudySession::starting_now(group_id, activity_id))
                        .await
                })
            })
            .collect();

        for task in tasks {
            let outcome = task.await.unwrap().unwrap();
            assert!(matches!(outcome, SessionInsert::Inserted { .. }));
        }
        assert_eq!(count_sessions(&db).await, 64);
        db.close().await;
    }

    #[tokio::test]
    async fn create_fails_when_pool_is_closed() {
        let db = test_database().await;
        let repo = SqliteStudySessionRepository::new(db.pool().clone());
        db.close().await;

        let new = NewStudySession::starting_now(GroupId::new(1), StudyActivityId::new(1));
        let err = repo.create(&new).await.unwrap_err();

        assert_eq!(err.code, crate::domain::foundation::ErrorCode::DatabaseError);
    }
}
