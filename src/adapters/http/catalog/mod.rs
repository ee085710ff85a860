//! HTTP adapter for the read-only catalog.
//!
//! - `GET /api/groups` / `GET /api/groups/:id` / `GET /api/groups/:id/words`
//! - `GET /api/words` / `GET /api/words/:id`
//! - `GET /api/study-activities` / `GET /api/study-activities/:id`

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;
pub use handlers::CatalogApiError;
pub use routes::{group_routes, study_activity_routes, word_routes};
