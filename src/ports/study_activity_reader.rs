//! Study activity reader port.

use async_trait::async_trait;

use crate::domain::catalog::StudyActivity;
use crate::domain::foundation::{DomainError, StudyActivityId};

/// Read access to study activities.
#[async_trait]
pub trait StudyActivityReader: Send + Sync {
    /// Find an activity by its ID.
    ///
    /// Returns `None` if not found.
    async fn get_by_id(&self, id: &StudyActivityId)
        -> Result<Option<StudyActivity>, DomainError>;

    /// All activities ordered by id. The set is small and unpaginated.
    async fn list_all(&self) -> Result<Vec<StudyActivity>, DomainError>;
}
