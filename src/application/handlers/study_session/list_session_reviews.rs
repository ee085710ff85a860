//! ListSessionReviewsHandler - Query handler for a session's recorded answers.

use std::sync::Arc;

use crate::domain::foundation::StudySessionId;
use crate::domain::study_session::{StudySessionError, WordReviewItem};
use crate::ports::{StudySessionReader, WordReviewRepository};

#[derive(Debug, Clone, Copy)]
pub struct ListSessionReviewsQuery {
    pub session_id: StudySessionId,
}

pub struct ListSessionReviewsHandler {
    reader: Arc<dyn StudySessionReader>,
    reviews: Arc<dyn WordReviewRepository>,
}

impl ListSessionReviewsHandler {
    pub fn new(
        reader: Arc<dyn StudySessionReader>,
        reviews: Arc<dyn WordReviewRepository>,
    ) -> Self {
        Self { reader, reviews }
    }

    /// Reviews in recording order; fails if the session does not exist.
    pub async fn handle(
        &self,
        query: ListSessionReviewsQuery,
    ) -> Result<Vec<WordReviewItem>, StudySessionError> {
        if self.reader.get_by_id(&query.session_id).await?.is_none() {
            return Err(StudySessionError::session_not_found(query.session_id));
        }
        Ok(self.reviews.list_for_session(&query.session_id).await?)
    }
}
