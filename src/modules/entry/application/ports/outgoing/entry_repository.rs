use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct CreateEntryData {
    pub topic_id: Uuid,
    pub text: String,
    pub slug: String,
}

/// Full replacement of the mutable fields; `date_added` and `topic_id`
/// never change.
#[derive(Debug, Clone)]
pub struct UpdateEntryData {
    pub entry_id: Uuid,
    pub text: String,
    pub slug: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntryResult {
    pub id: Uuid,
    pub topic_id: Uuid,
    pub text: String,
    pub slug: String,
    pub date_added: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum EntryRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Entry not found")]
    EntryNotFound,

    /// (topic, slug) unique index violated.
    #[error("Entry already exists")]
    EntryAlreadyExists,
}

#[async_trait]
pub trait EntryRepository: Send + Sync {
    async fn create_entry(&self, data: CreateEntryData)
        -> Result<EntryResult, EntryRepositoryError>;

    async fn update_entry(&self, data: UpdateEntryData)
        -> Result<EntryResult, EntryRepositoryError>;
}
