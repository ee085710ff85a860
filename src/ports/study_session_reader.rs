//! Study session reader port (read side / CQRS queries).
//!
//! Views are denormalized: each carries the group and activity names, the
//! number of reviews, and an `end_time` equal to the latest review's
//! timestamp (or the start time when no review exists).

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, StudySessionId};
use crate::domain::study_session::StudySessionView;

use super::{Page, PageRequest};

/// Reader port for study session queries.
#[async_trait]
pub trait StudySessionReader: Send + Sync {
    /// Get a session view by ID.
    ///
    /// Returns `None` if not found.
    async fn get_by_id(&self, id: &StudySessionId)
        -> Result<Option<StudySessionView>, DomainError>;

    /// List sessions, newest first.
    async fn list(&self, page: &PageRequest) -> Result<Page<StudySessionView>, DomainError>;
}
