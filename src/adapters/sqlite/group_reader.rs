//! SQLite implementation of GroupReader.

use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::domain::catalog::Group;
use crate::domain::foundation::{DomainError, GroupId};
use crate::ports::{GroupReader, Page, PageRequest};

use super::rows::GroupRow;

/// SQLite implementation of the GroupReader port.
#[derive(Clone)]
pub struct SqliteGroupReader {
    pool: SqlitePool,
}

impl SqliteGroupReader {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GroupReader for SqliteGroupReader {
    async fn get_by_id(&self, id: &GroupId) -> Result<Option<Group>, DomainError> {
        let row: Option<GroupRow> =
            sqlx::query_as("SELECT id, name, words_count FROM groups WHERE id = ?")
                .bind(id.as_i64())
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| DomainError::database("Failed to fetch group", e))?;

        row.map(Group::try_from).transpose()
    }

    async fn list(&self, page: &PageRequest) -> Result<Page<Group>, DomainError> {
        let (total,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM groups")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to count groups", e))?;

        let rows: Vec<GroupRow> = sqlx::query_as(
            r#"
            SELECT id, name, words_count
            FROM groups
            ORDER BY id
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to list groups", e))?;

        let groups = rows
            .into_iter()
            .map(Group::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Page::new(groups, total.max(0) as u64, *page))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::sqlite::test_support::{seed_group, test_database};

    #[tokio::test]
    async fn get_by_id_returns_seeded_group() {
        let db = test_database().await;
        let id = seed_group(&db, "Core Verbs", 7).await;
        let reader = SqliteGroupReader::new(db.pool().clone());

        let group = reader.get_by_id(&id).await.unwrap().unwrap();

        assert_eq!(group.id, id);
        assert_eq!(group.name, "Core Verbs");
        assert_eq!(group.words_count, 7);
    }

    #[tokio::test]
    async fn get_by_id_returns_none_for_unknown_id() {
        let db = test_database().await;
        let reader = SqliteGroupReader::new(db.pool().clone());

        assert!(reader.get_by_id(&GroupId::new(99999)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn list_pages_in_id_order() {
        let db = test_database().await;
        for name in ["A", "B", "C"] {
            seed_group(&db, name, 0).await;
        }
        let reader = SqliteGroupReader::new(db.pool().clone());

        let page = reader
            .list(&PageRequest::new(Some(2), Some(2)))
            .await
            .unwrap();

        assert_eq!(page.total_items, 3);
        assert_eq!(page.total_pages(), 2);
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].name, "C");
    }
}
