//! Word review repository port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, StudySessionId};
use crate::domain::study_session::{NewWordReview, WordReviewItem};

/// Persistence for word review items.
#[async_trait]
pub trait WordReviewRepository: Send + Sync {
    /// Record a review against an existing session.
    ///
    /// The session check and the insert are atomic. Returns `None` (and
    /// writes nothing) when the session does not exist.
    async fn record(&self, review: &NewWordReview) -> Result<Option<WordReviewItem>, DomainError>;

    /// Reviews for a session in the order they were recorded.
    async fn list_for_session(
        &self,
        session_id: &StudySessionId,
    ) -> Result<Vec<WordReviewItem>, DomainError>;
}
