use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::entry::application::ports::outgoing::{
    CreateEntryData, EntryRepository, EntryRepositoryError, EntryResult, UpdateEntryData,
};

use super::sea_orm_entity::{ActiveModel as EntryActiveModel, Model as EntryModel};

const TOPIC_SLUG_INDEX: &str = "idx_entries_topic_slug_unique";

#[derive(Debug, Clone)]
pub struct EntryRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl EntryRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EntryRepository for EntryRepositoryPostgres {
    async fn create_entry(
        &self,
        data: CreateEntryData,
    ) -> Result<EntryResult, EntryRepositoryError> {
        let active = EntryActiveModel {
            id: Set(Uuid::new_v4()),
            topic_id: Set(data.topic_id),
            text: Set(data.text),
            slug: Set(data.slug),
            ..Default::default()
        };

        let inserted: EntryModel = active.insert(&*self.db).await.map_err(map_entry_error)?;

        Ok(inserted.to_repository_result())
    }

    async fn update_entry(
        &self,
        data: UpdateEntryData,
    ) -> Result<EntryResult, EntryRepositoryError> {
        // updated_at is stamped in ActiveModelBehavior::before_save
        let active = EntryActiveModel {
            id: Set(data.entry_id),
            text: Set(data.text),
            slug: Set(data.slug),
            ..Default::default()
        };

        let updated: EntryModel = active.update(&*self.db).await.map_err(map_entry_error)?;

        Ok(updated.to_repository_result())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn map_entry_error(e: DbErr) -> EntryRepositoryError {
    if matches!(e, DbErr::RecordNotUpdated) {
        return EntryRepositoryError::EntryNotFound;
    }

    let msg = e.to_string().to_lowercase();

    if (msg.contains("duplicate") || msg.contains("unique") || msg.contains("23505"))
        && (msg.contains(TOPIC_SLUG_INDEX) || msg.contains("slug"))
    {
        EntryRepositoryError::EntryAlreadyExists
    } else {
        EntryRepositoryError::DatabaseError(e.to_string())
    }
}

// ============================================================================
// Tests
// ============================================================================
