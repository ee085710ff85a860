//! Study session command and query handlers.

mod create_study_session;
mod get_study_session;
mod list_session_reviews;
mod list_study_sessions;
mod record_word_review;

pub use create_study_session::{CreateStudySessionCommand, CreateStudySessionHandler};
pub use get_study_session::{GetStudySessionHandler, GetStudySessionQuery};
pub use list_session_reviews::{ListSessionReviewsHandler, ListSessionReviewsQuery};
pub use list_study_sessions::{ListStudySessionsHandler, ListStudySessionsQuery};
pub use record_word_review::{RecordWordReviewCommand, RecordWordReviewHandler};
