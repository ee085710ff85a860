//! Study activity query handlers.

use std::sync::Arc;

use crate::domain::catalog::{CatalogError, StudyActivity};
use crate::domain::foundation::StudyActivityId;
use crate::ports::StudyActivityReader;

#[derive(Debug, Clone, Copy)]
pub struct GetStudyActivityQuery {
    pub activity_id: StudyActivityId,
}

pub struct GetStudyActivityHandler {
    reader: Arc<dyn StudyActivityReader>,
}

impl GetStudyActivityHandler {
    pub fn new(reader: Arc<dyn StudyActivityReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(&self, query: GetStudyActivityQuery) -> Result<StudyActivity, CatalogError> {
        self.reader
            .get_by_id(&query.activity_id)
            .await?
            .ok_or_else(|| CatalogError::activity_not_found(query.activity_id))
    }
}

pub struct ListStudyActivitiesHandler {
    reader: Arc<dyn StudyActivityReader>,
}

impl ListStudyActivitiesHandler {
    pub fn new(reader: Arc<dyn StudyActivityReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(&self) -> Result<Vec<StudyActivity>, CatalogError> {
        Ok(self.reader.list_all().await?)
    }
}
