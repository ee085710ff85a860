//! Word reader port.

use async_trait::async_trait;

use crate::domain::catalog::Word;
use crate::domain::foundation::{DomainError, GroupId, WordId};

use super::{Page, PageRequest};

/// Read access to vocabulary words and their group membership.
#[async_trait]
pub trait WordReader: Send + Sync {
    /// Find a word by its ID.
    ///
    /// Returns `None` if not found.
    async fn get_by_id(&self, id: &WordId) -> Result<Option<Word>, DomainError>;

    /// List all words ordered by id.
    async fn list(&self, page: &PageRequest) -> Result<Page<Word>, DomainError>;

    /// List the words linked to a group, ordered by id. An unknown group
    /// yields an empty page.
    async fn list_for_group(
        &self,
        group_id: &GroupId,
        page: &PageRequest,
    ) -> Result<Page<Word>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_reader_is_object_safe() {
        fn _accepts_dyn(_reader: &dyn WordReader) {}
    }
}
