//! Command infrastructure for CQRS handlers.
//!
//! `CommandMetadata` carries request context through command processing so
//! handlers can tag their log lines without widening every signature.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Metadata context for command handlers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandMetadata {
    /// Links related operations across a single request.
    correlation_id: String,

    /// Source of this command (e.g., "api", "test").
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<String>,
}

impl CommandMetadata {
    /// Creates metadata with a freshly generated correlation id.
    pub fn new() -> Self {
        Self {
            correlation_id: Uuid::new_v4().to_string(),
            source: None,
        }
    }

    /// Builder: Replace the correlation id (e.g. with an inbound request id).
    pub fn with_correlation_id(mut self, id: impl Into<String>) -> Self {
        self.correlation_id = id.into();
        self
    }

    /// Builder: Add source identifier.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn correlation_id(&self) -> &str {
        &self.correlation_id
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }
}

impl Default for CommandMetadata {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_generates_distinct_correlation_ids() {
        let a = CommandMetadata::new();
        let b = CommandMetadata::new();
        assert_ne!(a.correlation_id(), b.correlation_id());
    }

    #[test]
    fn builders_set_fields() {
        let metadata = CommandMetadata::new()
            .with_correlation_id("req-123")
            .with_source("api");
        assert_eq!(metadata.correlation_id(), "req-123");
        assert_eq!(metadata.source(), Some("api"));
    }

    #[test]
    fn source_is_omitted_from_json_when_absent() {
        let json = serde_json::to_value(CommandMetadata::new().with_correlation_id("x")).unwrap();
        assert_eq!(json, serde_json::json!({ "correlation_id": "x" }));
    }
}
