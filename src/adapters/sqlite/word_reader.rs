//! SQLite implementation of WordReader.

use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::domain::catalog::Word;
use crate::domain::foundation::{DomainError, GroupId, WordId};
use crate::ports::{Page, PageRequest, WordReader};

use super::rows::WordRow;

/// SQLite implementation of the WordReader port.
#[derive(Clone)]
pub struct SqliteWordReader {
    pool: SqlitePool,
}

impl SqliteWordReader {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WordReader for SqliteWordReader {
    async fn get_by_id(&self, id: &WordId) -> Result<Option<Word>, DomainError> {
        let row: Option<WordRow> =
            sqlx::query_as("SELECT id, english, portuguese, parts FROM words WHERE id = ?")
                .bind(id.as_i64())
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| DomainError::database("Failed to fetch word", e))?;

        Ok(row.map(Word::from))
    }

    async fn list(&self, page: &PageRequest) -> Result<Page<Word>, DomainError> {
        let (total,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM words")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to count words", e))?;

        let rows: Vec<WordRow> = sqlx::query_as(
            r#"
            SELECT id, english, portuguese, parts
            FROM words
            ORDER BY id
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to list words", e))?;

        Ok(Page::new(
            rows.into_iter().map(Word::from).collect(),
            total.max(0) as u64,
            *page,
        ))
    }

    async fn list_for_group(
        &self,
        group_id: &GroupId,
        page: &PageRequest,
    ) -> Result<Page<Word>, DomainError> {
        let (total,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM words_groups WHERE group_id = ?")
                .bind(group_id.as_i64())
                .fetch_one(&self.pool)
                .await
                .map_err(|e| DomainError::database("Failed to count group words", e))?;

        let rows: Vec<WordRow> = sqlx::query_as(
            r#"
            SELECT w.id, w.english, w.portuguese, w.parts
            FROM words w
            JOIN words_groups wg ON wg.word_id = w.id
            WHERE wg.group_id = ?
            ORDER BY w.id
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(group_id.as_i64())
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to list group words", e))?;

        Ok(Page::new(
            rows.into_iter().map(Word::from).collect(),
            total.max(0) as u64,
            *page,
        ))
    }
}
