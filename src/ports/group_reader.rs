//! Group reader port.

use async_trait::async_trait;

use crate::domain::catalog::Group;
use crate::domain::foundation::{DomainError, GroupId};

use super::{Page, PageRequest};

/// Read access to vocabulary groups.
#[async_trait]
pub trait GroupReader: Send + Sync {
    /// Find a group by its ID.
    ///
    /// Returns `None` if not found.
    async fn get_by_id(&self, id: &GroupId) -> Result<Option<Group>, DomainError>;

    /// List groups ordered by id.
    async fn list(&self, page: &PageRequest) -> Result<Page<Group>, DomainError>;
}
