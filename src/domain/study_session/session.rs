//! StudySession entity.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{GroupId, StudyActivityId, StudySessionId, Timestamp};

/// One instance of a learner engaging with a study activity for a group.
///
/// Sessions are immutable once stored: there is no update or delete path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudySession {
    id: StudySessionId,
    group_id: GroupId,
    study_activity_id: StudyActivityId,
    created_at: Timestamp,
}

impl StudySession {
    /// Reconstitutes a stored session.
    pub fn reconstitute(
        id: StudySessionId,
        group_id: GroupId,
        study_activity_id: StudyActivityId,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            group_id,
            study_activity_id,
            created_at,
        }
    }

    pub fn id(&self) -> &StudySessionId {
        &self.id
    }

    pub fn group_id(&self) -> &GroupId {
        &self.group_id
    }

    pub fn study_activity_id(&self) -> &StudyActivityId {
        &self.study_activity_id
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }
}

/// A session that has not been stored yet; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStudySession {
    pub group_id: GroupId,
    pub study_activity_id: StudyActivityId,
    pub created_at: Timestamp,
}

impl NewStudySession {
    /// Stamps a new session with the current time.
    pub fn starting_now(group_id: GroupId, study_activity_id: StudyActivityId) -> Self {
        Self {
            group_id,
            study_activity_id,
            created_at: Timestamp::now(),
        }
    }

    /// Attaches the store-assigned id.
    pub fn into_session(self, id: StudySessionId) -> StudySession {
        StudySession::reconstitute(id, self.group_id, self.study_activity_id, self.created_at)
    }
}
