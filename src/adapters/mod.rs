//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `sqlite` - SQLite persistence for every port
//! - `http` - Axum REST API

pub mod http;
pub mod sqlite;

pub use http::{app, AppState};
pub use sqlite::{Database, DatabaseError};
