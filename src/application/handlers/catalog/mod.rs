//! Catalog query handlers: groups, words and study activities.

mod groups;
mod study_activities;
mod words;

pub use groups::{GetGroupHandler, GetGroupQuery, ListGroupsHandler, ListGroupsQuery};
pub use study_activities::{
    GetStudyActivityHandler, GetStudyActivityQuery, ListStudyActivitiesHandler,
};
pub use words::{
    GetWordHandler, GetWordQuery, ListGroupWordsHandler, ListGroupWordsQuery, ListWordsHandler,
    ListWordsQuery,
};
