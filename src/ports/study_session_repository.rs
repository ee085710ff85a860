//! Study session repository port (write side).
//!
//! Creation must be atomic with the reference checks: the checked insert
//! and the group and activity lookups share one transaction, and nothing is
//! committed unless the whole outcome can be built. The group is reported
//! before the activity when both references are invalid.

use async_trait::async_trait;

use crate::domain::catalog::{Group, StudyActivity};
use crate::domain::foundation::DomainError;
use crate::domain::study_session::{NewStudySession, StudySession};

/// Outcome of a checked insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionInsert {
    /// Row written; carries the resolved references for the response.
    Inserted {
        session: StudySession,
        group: Group,
        activity: StudyActivity,
    },
    /// `group_id` did not resolve. Nothing was written.
    GroupMissing,
    /// `study_activity_id` did not resolve. Nothing was written.
    ActivityMissing,
}

/// Repository port for study session persistence.
#[async_trait]
pub trait StudySessionRepository: Send + Sync {
    /// Insert a session after verifying both references exist.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure (the transaction is rolled back)
    async fn create(&self, session: &NewStudySession) -> Result<SessionInsert, DomainError>;
}
