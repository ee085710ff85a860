//! Catalog module - Groups, words and study activities.
//!
//! All three are reference data owned by other tooling; the study
//! workflows here only look them up.

mod errors;
mod group;
mod study_activity;
mod word;

pub use errors::CatalogError;
pub use group::Group;
pub use study_activity::StudyActivity;
pub use word::Word;
