//! ListStudySessionsHandler - Query handler for paginated session views.

use std::sync::Arc;

use crate::domain::study_session::{StudySessionError, StudySessionView};
use crate::ports::{Page, PageRequest, StudySessionReader};

/// Query to list sessions.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListStudySessionsQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

/// Handler for listing sessions, newest first.
pub struct ListStudySessionsHandler {
    reader: Arc<dyn StudySessionReader>,
}

impl ListStudySessionsHandler {
    pub fn new(reader: Arc<dyn StudySessionReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(
        &self,
        query: ListStudySessionsQuery,
    ) -> Result<Page<StudySessionView>, StudySessionError> {
        let request = PageRequest::new(query.page, query.per_page);
        Ok(self.reader.list(&request).await?)
    }
}
