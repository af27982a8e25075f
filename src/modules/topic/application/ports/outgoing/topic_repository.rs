use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;

// Input DTO for creating a topic
#[derive(Debug, Clone)]
pub struct CreateTopicData {
    pub owner: UserId,
    pub text: String,
    pub slug: String,
}

// Output DTO returned after a topic row was written
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopicResult {
    pub id: Uuid,
    pub owner: UserId,
    pub text: String,
    pub slug: String,
    pub date_added: DateTime<Utc>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum TopicRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// (owner, slug) unique index violated at INSERT time.
    #[error("Topic already exists")]
    TopicAlreadyExists,
}

#[async_trait]
pub trait TopicRepository: Send + Sync {
    async fn create_topic(&self, data: CreateTopicData)
        -> Result<TopicResult, TopicRepositoryError>;
}
