//! Catalog-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, GroupId, StudyActivityId, WordId};

/// Errors raised by the read-only catalog queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Group was not found.
    GroupNotFound(GroupId),
    /// Study activity was not found.
    ActivityNotFound(StudyActivityId),
    /// Word was not found.
    WordNotFound(WordId),
    /// Infrastructure error.
    Infrastructure(String),
}

impl CatalogError {
    pub fn group_not_found(id: GroupId) -> Self {
        CatalogError::GroupNotFound(id)
    }
    pub fn activity_not_found(id: StudyActivityId) -> Self {
        CatalogError::ActivityNotFound(id)
    }
    pub fn word_not_found(id: WordId) -> Self {
        CatalogError::WordNotFound(id)
    }
    pub fn infrastructure(message: impl Into<String>) -> Self {
        CatalogError::Infrastructure(message.into())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            CatalogError::GroupNotFound(_) => ErrorCode::GroupNotFound,
            CatalogError::ActivityNotFound(_) => ErrorCode::StudyActivityNotFound,
            CatalogError::WordNotFound(_) => ErrorCode::WordNotFound,
            CatalogError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            CatalogError::GroupNotFound(_) => "Group not found".to_string(),
            CatalogError::ActivityNotFound(_) => "Study activity not found".to_string(),
            CatalogError::WordNotFound(_) => "Word not found".to_string(),
            CatalogError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for CatalogError {}

impl From<DomainError> for CatalogError {
    fn from(err: DomainError) -> Self {
        CatalogError::Infrastructure(err.to_string())
    }
}
