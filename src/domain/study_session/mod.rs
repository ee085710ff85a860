//! Study session module - Session creation, views and word reviews.

mod errors;
mod review;
mod session;
mod view;

pub use errors::StudySessionError;
pub use review::{NewWordReview, WordReviewItem};
pub use session::{NewStudySession, StudySession};
pub use view::StudySessionView;
