use async_trait::async_trait;

use crate::{
    auth::application::domain::entities::UserId,
    entry::application::ports::outgoing::EntryQuery,
    shared::ownership::check_owner,
    topic::application::ports::{
        incoming::use_cases::{GetTopicDetailUseCase, GetTopicError, GetTopicUseCase, TopicDetail},
        outgoing::{TopicQuery, TopicQueryResult},
    },
};

/// Owner-scoped lookup followed by the ownership guard. Both a missing
/// row and a foreign row end up as `GetTopicError::NotFound`.
async fn resolve_owned_topic<Q>(
    query: &Q,
    owner: UserId,
    slug: &str,
) -> Result<TopicQueryResult, GetTopicError>
where
    Q: TopicQuery + ?Sized,
{
    let topic = query
        .find_by_slug(owner, slug)
        .await
        .map_err(|e| GetTopicError::QueryFailed(e.to_string()))?
        .ok_or(GetTopicError::NotFound)?;

    check_owner(&topic.owner, &owner).map_err(|_| GetTopicError::NotFound)?;

    Ok(topic)
}

// ──────────────────────────────────────────────────────────
// Single topic
// ──────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct GetTopicService<Q>
where
    Q: TopicQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetTopicService<Q>
where
    Q: TopicQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetTopicUseCase for GetTopicService<Q>
where
    Q: TopicQuery + Send + Sync,
{
    async fn execute(&self, owner: UserId, slug: &str) -> Result<TopicQueryResult, GetTopicError> {
        resolve_owned_topic(&self.query, owner, slug).await
    }
}

// ──────────────────────────────────────────────────────────
// Topic with entries
// ──────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct GetTopicDetailService<Q, E>
where
    Q: TopicQuery + Send + Sync,
    E: EntryQuery + Send + Sync,
{
    topics: Q,
    entries: E,
}

impl<Q, E> GetTopicDetailService<Q, E>
where
    Q: TopicQuery + Send + Sync,
    E: EntryQuery + Send + Sync,
{
    pub fn new(topics: Q, entries: E) -> Self {
        Self { topics, entries }
    }
}

#[async_trait]
impl<Q, E> GetTopicDetailUseCase for GetTopicDetailService<Q, E>
where
    Q: TopicQuery + Send + Sync,
    E: EntryQuery + Send + Sync,
{
    async fn execute(&self, owner: UserId, slug: &str) -> Result<TopicDetail, GetTopicError> {
        let topic = resolve_owned_topic(&self.topics, owner, slug).await?;

        let entries = self
            .entries
            .list_by_topic(topic.id)
            .await
            .map_err(|e| GetTopicError::QueryFailed(e.to_string()))?;

        Ok(TopicDetail { topic, entries })
    }
}
