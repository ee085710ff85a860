//! Word review records.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{StudySessionId, Timestamp, WordId, WordReviewItemId};

/// One recorded correct/incorrect answer within a study session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordReviewItem {
    pub id: WordReviewItemId,
    pub study_session_id: StudySessionId,
    pub word_id: WordId,
    pub correct: bool,
    pub created_at: Timestamp,
}

/// A review that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewWordReview {
    pub study_session_id: StudySessionId,
    pub word_id: WordId,
    pub correct: bool,
    pub created_at: Timestamp,
}

impl NewWordReview {
    pub fn answered_now(study_session_id: StudySessionId, word_id: WordId, correct: bool) -> Self {
        Self {
            study_session_id,
            word_id,
            correct,
            created_at: Timestamp::now(),
        }
    }

    pub fn into_item(self, id: WordReviewItemId) -> WordReviewItem {
        WordReviewItem {
            id,
            study_session_id: self.study_session_id,
            word_id: self.word_id,
            correct: self.correct,
            created_at: self.created_at,
        }
    }
}
