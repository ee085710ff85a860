//! GetStudySessionHandler - Query handler for a single session view.

use std::sync::Arc;

use crate::domain::foundation::StudySessionId;
use crate::domain::study_session::{StudySessionError, StudySessionView};
use crate::ports::StudySessionReader;

/// Query to get a session by ID.
#[derive(Debug, Clone, Copy)]
pub struct GetStudySessionQuery {
    pub session_id: StudySessionId,
}

/// Handler for retrieving session details.
pub struct GetStudySessionHandler {
    reader: Arc<dyn StudySessionReader>,
}

impl GetStudySessionHandler {
    pub fn new(reader: Arc<dyn StudySessionReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(
        &self,
        query: GetStudySessionQuery,
    ) -> Result<StudySessionView, StudySessionError> {
        self.reader
            .get_by_id(&query.session_id)
            .await?
            .ok_or_else(|| StudySessionError::session_not_found(query.session_id))
    }
}
