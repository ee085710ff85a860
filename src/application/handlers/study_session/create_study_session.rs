//! CreateStudySessionHandler - Command handler for starting study sessions.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::foundation::{CommandMetadata, GroupId, StudyActivityId};
use crate::domain::study_session::{NewStudySession, StudySessionError, StudySessionView};
use crate::ports::{SessionInsert, StudySessionRepository};

/// Command to create a new study session.
///
/// Both references are required; presence is checked where the command is
/// built from a request payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreateStudySessionCommand {
    pub group_id: GroupId,
    pub study_activity_id: StudyActivityId,
}

impl CreateStudySessionCommand {
    /// Builds the command from optional payload fields.
    ///
    /// # Errors
    ///
    /// `MissingFields` if either field is absent.
    pub fn from_parts(
        group_id: Option<i64>,
        study_activity_id: Option<i64>,
    ) -> Result<Self, StudySessionError> {
        match (group_id, study_activity_id) {
            (Some(group_id), Some(study_activity_id)) => Ok(Self {
                group_id: GroupId::new(group_id),
                study_activity_id: StudyActivityId::new(study_activity_id),
            }),
            _ => Err(StudySessionError::missing_fields()),
        }
    }
}

/// Handler for creating study sessions.
pub struct CreateStudySessionHandler {
    repository: Arc<dyn StudySessionRepository>,
}

impl CreateStudySessionHandler {
    pub fn new(repository: Arc<dyn StudySessionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: CreateStudySessionCommand,
        metadata: CommandMetadata,
    ) -> Result<StudySessionView, StudySessionError> {
        let new_session = NewStudySession::starting_now(cmd.group_id, cmd.study_activity_id);

        match self.repository.create(&new_session).await? {
            SessionInsert::Inserted {
                session,
                group,
                activity,
            } => {
                info!(
                    correlation_id = metadata.correlation_id(),
                    session_id = %session.id(),
                    group_id = %session.group_id(),
                    study_activity_id = %session.study_activity_id(),
                    "Study session created"
                );
                Ok(StudySessionView::freshly_created(&session, &group, &activity))
            }
            SessionInsert::GroupMissing => {
                warn!(
                    correlation_id = metadata.correlation_id(),
                    "Rejected study session for unknown group {}", cmd.group_id
                );
                Err(StudySessionError::group_not_found(cmd.group_id))
            }
            SessionInsert::ActivityMissing => {
                warn!(
                    correlation_id = metadata.correlation_id(),
                    "Rejected study session for unknown study activity {}",
                    cmd.study_activity_id
                );
                Err(StudySessionError::activity_not_found(cmd.study_activity_id))
            }
        }
    }
}
