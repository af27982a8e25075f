use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::entry::application::ports::outgoing::{
    EntryQuery, EntryQueryError, EntryQueryResult,
};

use super::sea_orm_entity::{Column as EntryColumn, Entity as EntryEntity, Model as EntryModel};

#[derive(Debug, Clone)]
pub struct EntryQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl EntryQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EntryQuery for EntryQueryPostgres {
    async fn list_by_topic(
        &self,
        topic_id: Uuid,
    ) -> Result<Vec<EntryQueryResult>, EntryQueryError> {
        let models: Vec<EntryModel> = EntryEntity::find()
            .filter(EntryColumn::TopicId.eq(topic_id))
            .order_by_desc(EntryColumn::DateAdded)
            .all(&*self.db)
            .await
            .map_err(|e| EntryQueryError::DatabaseError(e.to_string()))?;

        Ok(models.into_iter().map(|m| m.to_query_result()).collect())
    }

    async fn find_by_slug(
        &self,
        topic_id: Uuid,
        slug: &str,
    ) -> Result<Option<EntryQueryResult>, EntryQueryError> {
        let model = EntryEntity::find()
            .filter(EntryColumn::TopicId.eq(topic_id))
            .filter(EntryColumn::Slug.eq(slug))
            .one(&*self.db)
            .await
            .map_err(|e| EntryQueryError::DatabaseError(e.to_string()))?;

        Ok(model.map(|m| m.to_query_result()))
    }
}
