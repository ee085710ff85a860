//! SQLite adapters - Database implementations for repository ports.
//!
//! - `Database` - Pool lifecycle and embedded migrations
//! - `SqliteGroupReader` / `SqliteWordReader` / `SqliteStudyActivityReader` - Catalog reads
//! - `SqliteStudySessionRepository` - Checked, transactional session creation
//! - `SqliteStudySessionReader` - Denormalized session views
//! - `SqliteWordReviewRepository` - Word review writes and reads

mod database;
mod group_reader;
mod rows;
mod study_activity_reader;
mod study_session_reader;
mod study_session_repository;
mod word_reader;
mod word_review_repository;

pub use database::{Database, DatabaseError};
pub use group_reader::SqliteGroupReader;
pub use study_activity_reader::SqliteStudyActivityReader;
pub use study_session_reader::SqliteStudySessionReader;
pub use study_session_repository::SqliteStudySessionRepository;
pub use word_reader::SqliteWordReader;
pub use word_review_repository::SqliteWordReviewRepository;
