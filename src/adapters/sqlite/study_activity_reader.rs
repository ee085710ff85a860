//! SQLite implementation of StudyActivityReader.

use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::domain::catalog::StudyActivity;
use crate::domain::foundation::{DomainError, StudyActivityId};
use crate::ports::StudyActivityReader;

use super::rows::StudyActivityRow;

#[derive(Clone)]
pub struct SqliteStudyActivityReader {
    pool: SqlitePool,
}

impl SqliteStudyActivityReader {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StudyActivityReader for SqliteStudyActivityReader {
    async fn get_by_id(
        &self,
        id: &StudyActivityId,
    ) -> Result<Option<StudyActivity>, DomainError> {
        let row: Option<StudyActivityRow> = sqlx::query_as(
            "SELECT id, name, url, preview_url FROM study_activities WHERE id = ?",
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to fetch study activity", e))?;

        Ok(row.map(StudyActivity::from))
    }

    async fn list_all(&self) -> Result<Vec<StudyActivity>, DomainError> {
        let rows: Vec<StudyActivityRow> = sqlx::query_as(
            "SELECT id, name, url, preview_url FROM study_activities ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to list study activities", e))?;

        Ok(rows.into_iter().map(StudyActivity::from).collect())
    }
}
