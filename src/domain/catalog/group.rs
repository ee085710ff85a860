//! Vocabulary group entity.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{GroupId, ValidationError};

/// A named collection of vocabulary words.
///
/// Groups are administered elsewhere; this service only reads them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub id: GroupId,
    pub name: String,
    pub words_count: u64,
}

impl Group {
    /// Builds a group, rejecting blank names.
    pub fn new(
        id: GroupId,
        name: impl Into<String>,
        words_count: u64,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        Ok(Self {
            id,
            name,
            words_count,
        })
    }

    /// Rebuilds a group from a stored row, where `words_count` is a signed column.
    pub fn from_row(id: i64, name: String, words_count: i64) -> Result<Self, ValidationError> {
        let words_count = u64::try_from(words_count)
            .map_err(|_| ValidationError::out_of_range("words_count", 0, i64::MAX, words_count))?;
        Self::new(GroupId::new(id), name, words_count)
    }
}
