//! Vocabulary word entity.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::WordId;

/// A Portuguese vocabulary entry with its English gloss.
///
/// `parts` is free text describing the part of speech ("verb", "noun").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    pub id: WordId,
    pub english: String,
    pub portuguese: String,
    pub parts: String,
}

impl Word {
    pub fn new(
        id: WordId,
        english: impl Into<String>,
        portuguese: impl Into<String>,
        parts: impl Into<String>,
    ) -> Self {
        Self {
            id,
            english: english.into(),
            portuguese: portuguese.into(),
            parts: parts.into(),
        }
    }
}
