use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;

/// Read-only DTO for topic queries
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopicQueryResult {
    pub id: Uuid,
    pub owner: UserId,
    pub text: String,
    pub slug: String,
    pub date_added: DateTime<Utc>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum TopicQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait TopicQuery: Send + Sync {
    /// Every topic of `owner`, oldest first.
    async fn list_by_owner(&self, owner: UserId)
        -> Result<Vec<TopicQueryResult>, TopicQueryError>;

    /// Owner-scoped slug lookup. Another owner's topic with the same slug
    /// is reported as `None`.
    async fn find_by_slug(
        &self,
        owner: UserId,
        slug: &str,
    ) -> Result<Option<TopicQueryResult>, TopicQueryError>;
}
