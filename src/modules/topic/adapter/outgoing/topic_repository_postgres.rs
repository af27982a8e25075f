use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::topic::application::ports::outgoing::{
    CreateTopicData, TopicRepository, TopicRepositoryError, TopicResult,
};

// SeaORM entity imports
use super::sea_orm_entity::{ActiveModel as TopicActiveModel, Model as TopicModel};

const OWNER_SLUG_INDEX: &str = "idx_topics_user_slug_unique";

#[derive(Debug, Clone)]
pub struct TopicRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl TopicRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TopicRepository for TopicRepositoryPostgres {
    async fn create_topic(
        &self,
        data: CreateTopicData,
    ) -> Result<TopicResult, TopicRepositoryError> {
        let active = TopicActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(data.owner.into()),
            text: Set(data.text),
            slug: Set(data.slug),
            ..Default::default()
        };

        let inserted: TopicModel = active.insert(&*self.db).await.map_err(map_slug_error)?;

        Ok(inserted.to_repository_result())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn map_slug_error(e: DbErr) -> TopicRepositoryError {
    let msg = e.to_string().to_lowercase();

    if (msg.contains("duplicate") || msg.contains("unique") || msg.contains("23505"))
        && (msg.contains(OWNER_SLUG_INDEX) || msg.contains("slug"))
    {
        TopicRepositoryError::TopicAlreadyExists
    } else {
        TopicRepositoryError::DatabaseError(e.to_string())
    }
}

// ============================================================================
// Tests
// ============================================================================
