use async_trait::async_trait;

use crate::{
    auth::application::domain::entities::UserId,
    entry::application::ports::{
        incoming::use_cases::{EntryWithTopic, GetEntryError, GetEntryUseCase},
        outgoing::EntryQuery,
    },
    shared::ownership::check_owner,
    topic::application::ports::outgoing::TopicQuery,
};

#[derive(Debug, Clone)]
pub struct GetEntryService<Q, E>
where
    Q: TopicQuery + Send + Sync,
    E: EntryQuery + Send + Sync,
{
    topics: Q,
    entries: E,
}

impl<Q, E> GetEntryService<Q, E>
where
    Q: TopicQuery + Send + Sync,
    E: EntryQuery + Send + Sync,
{
    pub fn new(topics: Q, entries: E) -> Self {
        Self { topics, entries }
    }
}

#[async_trait]
impl<Q, E> GetEntryUseCase for GetEntryService<Q, E>
where
    Q: TopicQuery + Send + Sync,
    E: EntryQuery + Send + Sync,
{
    async fn execute(
        &self,
        owner: UserId,
        topic_slug: &str,
        entry_slug: &str,
    ) -> Result<EntryWithTopic, GetEntryError> {
        let topic = self
            .topics
            .find_by_slug(owner, topic_slug)
            .await
            .map_err(|e| GetEntryError::QueryFailed(e.to_string()))?
            .ok_or(GetEntryError::NotFound)?;

        check_owner(&topic.owner, &owner).map_err(|_| GetEntryError::NotFound)?;

        let entry = self
            .entries
            .find_by_slug(topic.id, entry_slug)
            .await
            .map_err(|e| GetEntryError::QueryFailed(e.to_string()))?
            .ok_or(GetEntryError::NotFound)?;

        Ok(EntryWithTopic { topic, entry })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::Utc;
    use uuid::Uuid;

    use crate::{
        entry::application::ports::outgoing::{EntryQueryError, EntryQueryResult},
        topic::application::ports::outgoing::{TopicQueryError, TopicQueryResult},
    };

    // ============================================================
    // Mock Queries
    // ============================================================

    #[derive(Clone)]
    struct MockTopicQuery {
        topic: Option<TopicQueryResult>,
    }

    #[async_trait]
    impl TopicQuery for MockTopicQuery {
        async fn list_by_owner(
            &self,
            _owner: UserId,
        ) -> Result<Vec<TopicQueryResult>, TopicQueryError> {
            unimplemented!()
        }

        async fn find_by_slug(
            &self,
            _owner: UserId,
            _slug: &str,
        ) -> Result<Option<TopicQueryResult>, TopicQueryError> {
            Ok(self.topic.clone())
        }
    }

    #[derive(Clone)]
    struct MockEntryQuery {
        result: Result<Option<EntryQueryResult>, EntryQueryError>,
    }

    #[async_trait]
    impl EntryQuery for MockEntryQuery {
        async fn list_by_topic(
            &self,
            _topic_id: Uuid,
        ) -> Result<Vec<EntryQueryResult>, EntryQueryError> {
            unimplemented!()
        }

        async fn find_by_slug(
            &self,
            _topic_id: Uuid,
            _slug: &str,
        ) -> Result<Option<EntryQueryResult>, EntryQueryError> {
            self.result.clone()
        }
    }

    // ============================================================
    // Helpers
    // ============================================================

    fn topic_of(owner: UserId) -> TopicQueryResult {
        TopicQueryResult {
            id: Uuid::new_v4(),
            owner,
            text: "Chess".to_string(),
            slug: "chess".to_string(),
            date_added: Utc::now(),
        }
    }

    fn entry_in(topic: &TopicQueryResult) -> EntryQueryResult {
        EntryQueryResult {
            id: Uuid::new_v4(),
            topic_id: topic.id,
            text: "Openings".to_string(),
            slug: "openings".to_string(),
            date_added: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    // ============================================================
    // Tests
    // ============================================================

    #[tokio::test]
    async fn returns_entry_with_its_topic() {
        let alice = UserId::from(Uuid::new_v4());
        let topic = topic_of(alice);
        let entry = entry_in(&topic);

        let service = GetEntryService::new(
            MockTopicQuery {
                topic: Some(topic.clone()),
            },
            MockEntryQuery {
                result: Ok(Some(entry.clone())),
            },
        );

        let found = service.execute(alice, "chess", "openings").await.unwrap();

        assert_eq!(found.topic, topic);
        assert_eq!(found.entry, entry);
    }

    #[tokio::test]
    async fn missing_topic_is_not_found() {
        let alice = UserId::from(Uuid::new_v4());
        let service = GetEntryService::new(
            MockTopicQuery { topic: None },
            MockEntryQuery { result: Ok(None) },
        );

        assert_eq!(
            service.execute(alice, "chess", "openings").await,
            Err(GetEntryError::NotFound)
        );
    }

    #[tokio::test]
    async fn foreign_topic_is_not_found() {
        let alice = UserId::from(Uuid::new_v4());
        let bob = UserId::from(Uuid::new_v4());
        let topic = topic_of(alice);
        let entry = entry_in(&topic);

        let service = GetEntryService::new(
            MockTopicQuery { topic: Some(topic) },
            MockEntryQuery {
                result: Ok(Some(entry)),
            },
        );

        assert_eq!(
            service.execute(bob, "chess", "openings").await,
            Err(GetEntryError::NotFound)
        );
    }

    #[tokio::test]
    async fn missing_entry_is_not_found() {
        let alice = UserId::from(Uuid::new_v4());
        let service = GetEntryService::new(
            MockTopicQuery {
                topic: Some(topic_of(alice)),
            },
            MockEntryQuery { result: Ok(None) },
        );

        assert_eq!(
            service.execute(alice, "chess", "nope").await,
            Err(GetEntryError::NotFound)
        );
    }

    #[tokio::test]
    async fn entry_query_error_is_mapped() {
        let alice = UserId::from(Uuid::new_v4());
        let service = GetEntryService::new(
            MockTopicQuery {
                topic: Some(topic_of(alice)),
            },
            MockEntryQuery {
                result: Err(EntryQueryError::DatabaseError("reset".into())),
            },
        );

        assert!(matches!(
            service.execute(alice, "chess", "openings").await,
            Err(GetEntryError::QueryFailed(_))
        ));
    }
}
