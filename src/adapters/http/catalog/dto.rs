//! HTTP DTOs for group, word and study activity endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::{Group, StudyActivity, Word};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GroupResponse {
    pub id: i64,
    pub name: String,
    pub words_count: u64,
}

impl From<Group> for GroupResponse {
    fn from(group: Group) -> Self {
        Self {
            id: group.id.as_i64(),
            name: group.name,
            words_count: group.words_count,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StudyActivityResponse {
    pub id: i64,
    pub name: String,
    pub url: String,
    pub preview_url: Option<String>,
}

impl From<StudyActivity> for StudyActivityResponse {
    fn from(activity: StudyActivity) -> Self {
        Self {
            id: activity.id.as_i64(),
            name: activity.name,
            url: activity.url,
            preview_url: activity.preview_url,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WordResponse {
    pub id: i64,
    pub english: String,
    pub portuguese: String,
    pub parts: String,
}

impl From<Word> for WordResponse {
    fn from(word: Word) -> Self {
        Self {
            id: word.id.as_i64(),
            english: word.english,
            portuguese: word.portuguese,
            parts: word.parts,
        }
    }
}
