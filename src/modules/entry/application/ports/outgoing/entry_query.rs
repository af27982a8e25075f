use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Read-only DTO for entry queries
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntryQueryResult {
    pub id: Uuid,
    pub topic_id: Uuid,
    pub text: String,
    pub slug: String,
    pub date_added: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum EntryQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Entries carry no owner; callers resolve the topic under the
/// requester's ownership first and query by its id.
#[async_trait]
pub trait EntryQuery: Send + Sync {
    /// Entries of a topic, most recent first.
    async fn list_by_topic(&self, topic_id: Uuid) -> Result<Vec<EntryQueryResult>, EntryQueryError>;

    async fn find_by_slug(
        &self,
        topic_id: Uuid,
        slug: &str,
    ) -> Result<Option<EntryQueryResult>, EntryQueryError>;
}
