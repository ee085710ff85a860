//! HTTP adapter for study session endpoints.
//!
//! - `POST /api/study-sessions` - Start a session for a group and activity
//! - `GET /api/study-sessions` - List sessions
//! - `GET /api/study-sessions/:id` - Get one session
//! - `GET /api/study-sessions/:id/reviews` - List word reviews
//! - `POST /api/study-sessions/:id/review` - Record a word review

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;
pub use handlers::StudySessionApiError;
pub use routes::study_session_routes;
