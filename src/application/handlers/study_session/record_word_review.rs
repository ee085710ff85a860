//! RecordWordReviewHandler - Command handler for logging an answer in a session.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::foundation::{CommandMetadata, StudySessionId, WordId};
use crate::domain::study_session::{NewWordReview, StudySessionError, WordReviewItem};
use crate::ports::WordReviewRepository;

/// Command to record one reviewed word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordWordReviewCommand {
    pub session_id: StudySessionId,
    pub word_id: WordId,
    pub correct: bool,
}

impl RecordWordReviewCommand {
    /// # Errors
    ///
    /// `MissingFields` if either payload field is absent.
    pub fn from_parts(
        session_id: StudySessionId,
        word_id: Option<i64>,
        correct: Option<bool>,
    ) -> Result<Self, StudySessionError> {
        match (word_id, correct) {
            (Some(word_id), Some(correct)) => Ok(Self {
                session_id,
                word_id: WordId::new(word_id),
                correct,
            }),
            _ => Err(StudySessionError::missing_fields()),
        }
    }
}

pub struct RecordWordReviewHandler {
    repository: Arc<dyn WordReviewRepository>,
}

impl RecordWordReviewHandler {
    pub fn new(repository: Arc<dyn WordReviewRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: RecordWordReviewCommand,
        metadata: CommandMetadata,
    ) -> Result<WordReviewItem, StudySessionError> {
        let review = NewWordReview::answered_now(cmd.session_id, cmd.word_id, cmd.correct);

        match self.repository.record(&review).await? {
            Some(item) => {
                debug!(
                    correlation_id = metadata.correlation_id(),
                    "Recorded review {} for word {} in session {}",
                    item.id,
                    item.word_id,
                    item.study_session_id
                );
                Ok(item)
            }
            None => {
                warn!(
                    correlation_id = metadata.correlation_id(),
                    "Rejected review for unknown study session {}", cmd.session_id
                );
                Err(StudySessionError::session_not_found(cmd.session_id))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{DomainError, WordReviewItemId};
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct MockWordReviewRepository {
        known_session: StudySessionId,
        items: Mutex<Vec<WordReviewItem>>,
    }

    impl MockWordReviewRepository {
        fn for_session(id: i64) -> Self {
            Self {
                known_session: StudySessionId::new(id),
                items: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl WordReviewRepository for MockWordReviewRepository {
        async fn record(
            &self,
            review: &NewWordReview,
        ) -> Result<Option<WordReviewItem>, DomainError> {
            if review.study_session_id != self.known_session {
                return Ok(None);
            }
            let mut items = self.items.lock().unwrap();
            let item = review
                .clone()
                .into_item(WordReviewItemId::new(items.len() as i64 + 1));
            items.push(item.clone());
            Ok(Some(item))
        }

        async fn list_for_session(
            &self,
            session_id: &StudySessionId,
        ) -> Result<Vec<WordReviewItem>, DomainError> {
            Ok(self
                .items
                .lock()
                .unwrap()
                .iter()
                .filter(|i| &i.study_session_id == session_id)
                .cloned()
                .collect())
        }
    }

    #[test]
    fn from_parts_requires_word_and_answer() {
        let session = StudySessionId::new(1);
        assert_eq!(
            RecordWordReviewCommand::from_parts(session, None, Some(true)),
            Err(StudySessionError::MissingFields)
        );
        assert_eq!(
            RecordWordReviewCommand::from_parts(session, Some(3), None),
            Err(StudySessionError::MissingFields)
        );
        assert!(RecordWordReviewCommand::from_parts(session, Some(3), Some(false)).is_ok());
    }

    #[tokio::test]
    async fn records_review_for_existing_session() {
        let repo = Arc::new(MockWordReviewRepository::for_session(1));
        let handler = RecordWordReviewHandler::new(repo.clone());

        let item = handler
            .handle(
                RecordWordReviewCommand {
                    session_id: StudySessionId::new(1),
                    word_id: WordId::new(8),
                    correct: true,
                },
                CommandMetadata::new(),
            )
            .await
            .unwrap();

        assert_eq!(item.word_id, WordId::new(8));
        assert!(item.correct);
        assert_eq!(
            repo.list_for_session(&StudySessionId::new(1)).await.unwrap().len(),
            1
        );
    }

    #[tokio::test]
    async fn fails_for_unknown_session() {
        let repo = Arc::new(MockWordReviewRepository::for_session(1));
        let handler = RecordWordReviewHandler::new(repo);

        let result = handler
            .handle(
                RecordWordReviewCommand {
                    session_id: StudySessionId::new(2),
                    word_id: WordId::new(8),
                    correct: false,
                },
                CommandMetadata::new(),
            )
            .await;

        assert_eq!(
            result,
            Err(StudySessionError::SessionNotFound(StudySessionId::new(2)))
        );
    }
}
