use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;

use crate::auth::application::domain::entities::UserId;
use crate::modules::topic::application::ports::outgoing::{
    TopicQuery, TopicQueryError, TopicQueryResult,
};

// SeaORM entity
use super::sea_orm_entity::{Column as TopicColumn, Entity as TopicEntity, Model as TopicModel};

#[derive(Debug, Clone)]
pub struct TopicQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl TopicQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TopicQuery for TopicQueryPostgres {
    async fn list_by_owner(
        &self,
        owner: UserId,
    ) -> Result<Vec<TopicQueryResult>, TopicQueryError> {
        let models: Vec<TopicModel> = TopicEntity::find()
            .filter(TopicColumn::UserId.eq(owner.value()))
            .order_by_asc(TopicColumn::DateAdded)
            .all(&*self.db)
            .await
            .map_err(|e| TopicQueryError::DatabaseError(e.to_string()))?;

        Ok(models.into_iter().map(|m| m.to_query_result()).collect())
    }

    async fn find_by_slug(
        &self,
        owner: UserId,
        slug: &str,
    ) -> Result<Option<TopicQueryResult>, TopicQueryError> {
        let model = TopicEntity::find()
            .filter(TopicColumn::UserId.eq(owner.value()))
            .filter(TopicColumn::Slug.eq(slug))
            .one(&*self.db)
            .await
            .map_err(|e| TopicQueryError::DatabaseError(e.to_string()))?;

        Ok(model.map(|m| m.to_query_result()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, RuntimeErr};
    use uuid::Uuid;

    fn topic_model(user_id: Uuid, text: &str, slug: &str, age_seconds: i64) -> TopicModel {
        TopicModel {
            id: Uuid::new_v4(),
            user_id,
            text: text.to_string(),
            slug: slug.to_string(),
            date_added: (Utc::now() - chrono::Duration::seconds(age_seconds)).fixed_offset(),
        }
    }

    #[tokio::test]
    async fn test_list_by_owner_success() {
        let user_uuid = Uuid::new_v4();
        let owner = UserId::from(user_uuid);

        let older = topic_model(user_uuid, "Chess", "chess", 20);
        let newer = topic_model(user_uuid, "Rock Climbing", "rock-climbing", 10);

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![older.clone(), newer.clone()]])
            .into_connection();

        let query = TopicQueryPostgres::new(Arc::new(db));

        let topics = query.list_by_owner(owner).await.unwrap();

        assert_eq!(topics.len(), 2);
        assert_eq!(topics[0].slug, "chess");
        assert_eq!(topics[1].slug, "rock-climbing");
        assert_eq!(topics[0].owner, owner);
        assert!(topics[0].date_added <= topics[1].date_added);
    }

    #[tokio::test]
    async fn test_list_by_owner_empty_result() {
        let owner = UserId::from(Uuid::new_v4());

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<TopicModel>::new()])
            .into_connection();

        let query = TopicQueryPostgres::new(Arc::new(db));

        assert!(query.list_by_owner(owner).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_by_owner_database_error() {
        let owner = UserId::from(Uuid::new_v4());

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Query(RuntimeErr::Internal(
                "connection lost".into(),
            ))])
            .into_connection();

        let query = TopicQueryPostgres::new(Arc::new(db));

        let result = query.list_by_owner(owner).await;

        assert!(matches!(result, Err(TopicQueryError::DatabaseError(_))));
    }

    #[tokio::test]
    async fn test_find_by_slug_found() {
        let user_uuid = Uuid::new_v4();
        let model = topic_model(user_uuid, "Chess", "chess", 0);

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model.clone()]])
            .into_connection();

        let query = TopicQueryPostgres::new(Arc::new(db));

        let topic = query
            .find_by_slug(UserId::from(user_uuid), "chess")
            .await
            .unwrap()
            .expect("topic");

        assert_eq!(topic.id, model.id);
        assert_eq!(topic.text, "Chess");
    }

    #[tokio::test]
    async fn test_find_by_slug_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<TopicModel>::new()])
            .into_connection();

        let query = TopicQueryPostgres::new(Arc::new(db));

        let result = query
            .find_by_slug(UserId::from(Uuid::new_v4()), "missing")
            .await;

        assert!(matches!(result, Ok(None)));
    }
}
