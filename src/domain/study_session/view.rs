//! Denormalized study session view.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::{Group, StudyActivity};
use crate::domain::foundation::{GroupId, StudyActivityId, StudySessionId, Timestamp};

use super::StudySession;

/// A session joined with its group and activity names plus review totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudySessionView {
    pub id: StudySessionId,
    pub group_id: GroupId,
    pub activity_id: StudyActivityId,
    pub group_name: String,
    pub activity_name: String,
    pub start_time: Timestamp,
    pub end_time: Timestamp,
    pub review_items_count: u64,
}

impl StudySessionView {
    /// View of a session that was just stored.
    ///
    /// No reviews can exist yet, so the session has zero duration and a zero count.
    pub fn freshly_created(
        session: &StudySession,
        group: &Group,
        activity: &StudyActivity,
    ) -> Self {
        Self {
            id: *session.id(),
            group_id: *session.group_id(),
            activity_id: *session.study_activity_id(),
            group_name: group.name.clone(),
            activity_name: activity.name.clone(),
            start_time: *session.created_at(),
            end_time: *session.created_at(),
            review_items_count: 0,
        }
    }
}
