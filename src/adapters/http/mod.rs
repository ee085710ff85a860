//! HTTP adapters - REST API implementations.
//!
//! Each feature has its own HTTP module for endpoint exposure; `app`
//! assembles them behind the shared middleware stack.

mod app;
pub mod catalog;
pub mod dto;
pub mod request;
pub mod study_session;

pub use app::{api_router, app, health_check, AppState, HealthResponse};
pub use dto::ErrorResponse;
