//! Study session error types.

use crate::domain::foundation::{
    DomainError, ErrorCode, GroupId, StudyActivityId, StudySessionId,
};

/// Study session errors.
///
/// `MissingFields` is the validation class; the `*NotFound` variants are the
/// not-found class; `Infrastructure` covers persistence failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StudySessionError {
    /// A required request field was absent or null.
    MissingFields,
    /// Referenced group does not exist.
    GroupNotFound(GroupId),
    /// Referenced study activity does not exist.
    ActivityNotFound(StudyActivityId),
    /// Study session does not exist.
    SessionNotFound(StudySessionId),
    /// Infrastructure error.
    Infrastructure(String),
}

impl StudySessionError {
    pub fn missing_fields() -> Self {
        StudySessionError::MissingFields
    }
    pub fn group_not_found(id: GroupId) -> Self {
        StudySessionError::GroupNotFound(id)
    }
    pub fn activity_not_found(id: StudyActivityId) -> Self {
        StudySessionError::ActivityNotFound(id)
    }
    pub fn session_not_found(id: StudySessionId) -> Self {
        StudySessionError::SessionNotFound(id)
    }
    pub fn infrastructure(message: impl Into<String>) -> Self {
        StudySessionError::Infrastructure(message.into())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            StudySessionError::MissingFields => ErrorCode::MissingRequiredFields,
            StudySessionError::GroupNotFound(_) => ErrorCode::GroupNotFound,
            StudySessionError::ActivityNotFound(_) => ErrorCode::StudyActivityNotFound,
            StudySessionError::SessionNotFound(_) => ErrorCode::StudySessionNotFound,
            StudySessionError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            StudySessionError::MissingFields => "Missing required fields".to_string(),
            StudySessionError::GroupNotFound(_) => "Group not found".to_string(),
            StudySessionError::ActivityNotFound(_) => "Study activity not found".to_string(),
            StudySessionError::SessionNotFound(_) => "Study session not found".to_string(),
            StudySessionError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for StudySessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for StudySessionError {}

impl From<DomainError> for StudySessionError {
    fn from(err: DomainError) -> Self {
        StudySessionError::Infrastructure(err.to_string())
    }
}
