//! Group query handlers.

use std::sync::Arc;

use crate::domain::catalog::{CatalogError, Group};
use crate::domain::foundation::GroupId;
use crate::ports::{GroupReader, Page, PageRequest};

/// Query to get a group by ID.
#[derive(Debug, Clone, Copy)]
pub struct GetGroupQuery {
    pub group_id: GroupId,
}

pub struct GetGroupHandler {
    reader: Arc<dyn GroupReader>,
}

impl GetGroupHandler {
    pub fn new(reader: Arc<dyn GroupReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(&self, query: GetGroupQuery) -> Result<Group, CatalogError> {
        self.reader
            .get_by_id(&query.group_id)
            .await?
            .ok_or_else(|| CatalogError::group_not_found(query.group_id))
    }
}

/// Query to list groups.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListGroupsQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

pub struct ListGroupsHandler {
    reader: Arc<dyn GroupReader>,
}

impl ListGroupsHandler {
    pub fn new(reader: Arc<dyn GroupReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(&self, query: ListGroupsQuery) -> Result<Page<Group>, CatalogError> {
        let request = PageRequest::new(query.page, query.per_page);
        Ok(self.reader.list(&request).await?)
    }
}
