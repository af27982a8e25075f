use async_trait::async_trait;
use serde::Serialize;

use crate::{
    auth::application::domain::entities::UserId,
    entry::application::ports::outgoing::EntryQueryResult,
    topic::application::ports::outgoing::TopicQueryResult,
};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GetTopicError {
    /// Missing and foreign topics are indistinguishable to the caller.
    #[error("Topic not found")]
    NotFound,

    #[error("Failed to fetch topic: {0}")]
    QueryFailed(String),
}

/// A topic together with its entries, most recent entry first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopicDetail {
    pub topic: TopicQueryResult,
    pub entries: Vec<EntryQueryResult>,
}

/// Resolves a single topic by slug within the requester's own topics.
#[async_trait]
pub trait GetTopicUseCase: Send + Sync {
    async fn execute(&self, owner: UserId, slug: &str) -> Result<TopicQueryResult, GetTopicError>;
}

#[async_trait]
pub trait GetTopicDetailUseCase: Send + Sync {
    async fn execute(&self, owner: UserId, slug: &str) -> Result<TopicDetail, GetTopicError>;
}
