//! Study activity entity.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StudyActivityId;

/// A named learning exercise type with an associated launch URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyActivity {
    pub id: StudyActivityId,
    pub name: String,
    pub url: String,
    pub preview_url: Option<String>,
}

impl StudyActivity {
    pub fn new(
        id: StudyActivityId,
        name: impl Into<String>,
        url: impl Into<String>,
        preview_url: Option<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            url: url.into(),
            preview_url,
        }
    }
}
