//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Catalog Ports
//!
//! - `GroupReader` - Read access to vocabulary groups
//! - `StudyActivityReader` - Read access to study activities
//! - `WordReader` - Read access to words and group membership
//!
//! ## Study Session Ports
//!
//! - `StudySessionRepository` - Checked, transactional session creation
//! - `StudySessionReader` - Denormalized session views
//! - `WordReviewRepository` - Recording and listing word reviews

mod group_reader;
mod pagination;
mod study_activity_reader;
mod study_session_reader;
mod study_session_repository;
mod word_reader;
mod word_review_repository;

pub use group_reader::GroupReader;
pub use pagination::{Page, PageRequest, DEFAULT_PER_PAGE, MAX_PER_PAGE};
pub use study_activity_reader::StudyActivityReader;
pub use study_session_reader::StudySessionReader;
pub use study_session_repository::{SessionInsert, StudySessionRepository};
pub use word_reader::WordReader;
pub use word_review_repository::WordReviewRepository;
