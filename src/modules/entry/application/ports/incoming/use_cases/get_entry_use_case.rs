use async_trait::async_trait;
use serde::Serialize;

use crate::{
    auth::application::domain::entities::UserId,
    entry::application::ports::outgoing::EntryQueryResult,
    topic::application::ports::outgoing::TopicQueryResult,
};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GetEntryError {
    /// Missing topic, foreign topic or missing entry.
    #[error("Entry not found")]
    NotFound,

    #[error("Failed to fetch entry: {0}")]
    QueryFailed(String),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntryWithTopic {
    pub topic: TopicQueryResult,
    pub entry: EntryQueryResult,
}

/// Resolves an entry through its parent topic so ownership is checked
/// on the topic before the entry is ever looked at.
#[async_trait]
pub trait GetEntryUseCase: Send + Sync {
    async fn execute(
        &self,
        owner: UserId,
        topic_slug: &str,
        entry_slug: &str,
    ) -> Result<EntryWithTopic, GetEntryError>;
}
