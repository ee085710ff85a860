//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors)
//! - `catalog` - Groups and study activities (read-only reference data)
//! - `study_session` - Study sessions, their views and word reviews

pub mod catalog;
pub mod foundation;
pub mod study_session;
