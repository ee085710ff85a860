//! Word query handlers.

use std::sync::Arc;

use crate::domain::catalog::{CatalogError, Word};
use crate::domain::foundation::{GroupId, WordId};
use crate::ports::{GroupReader, Page, PageRequest, WordReader};

/// Query to get a word by ID.
#[derive(Debug, Clone, Copy)]
pub struct GetWordQuery {
    pub word_id: WordId,
}

pub struct GetWordHandler {
    reader: Arc<dyn WordReader>,
}

impl GetWordHandler {
    pub fn new(reader: Arc<dyn WordReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(&self, query: GetWordQuery) -> Result<Word, CatalogError> {
        self.reader
            .get_by_id(&query.word_id)
            .await?
            .ok_or_else(|| CatalogError::word_not_found(query.word_id))
    }
}

/// Query to list words.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListWordsQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

pub struct ListWordsHandler {
    reader: Arc<dyn WordReader>,
}

impl ListWordsHandler {
    pub fn new(reader: Arc<dyn WordReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(&self, query: ListWordsQuery) -> Result<Page<Word>, CatalogError> {
        let request = PageRequest::new(query.page, query.per_page);
        Ok(self.reader.list(&request).await?)
    }
}

/// Query to list the words of one group.
#[derive(Debug, Clone, Copy)]
pub struct ListGroupWordsQuery {
    pub group_id: GroupId,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

/// Lists a group's words, failing with `GroupNotFound` for unknown groups
/// rather than answering an empty page.
pub struct ListGroupWordsHandler {
    groups: Arc<dyn GroupReader>,
    words: Arc<dyn WordReader>,
}

impl ListGroupWordsHandler {
    pub fn new(groups: Arc<dyn GroupReader>, words: Arc<dyn WordReader>) -> Self {
        Self { groups, words }
    }

    pub async fn handle(&self, query: ListGroupWordsQuery) -> Result<Page<Word>, CatalogError> {
        if self.groups.get_by_id(&query.group_id).await?.is_none() {
            return Err(CatalogError::group_not_found(query.group_id));
        }

        let request = PageRequest::new(query.page, query.per_page);
        Ok(self.words.list_for_group(&query.group_id, &request).await?)
    }
}
