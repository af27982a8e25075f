use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::entry::application::ports::outgoing::{
    CreateEntryData, EntryQuery, EntryQueryError, EntryQueryResult, EntryRepository,
    EntryRepositoryError, EntryResult, UpdateEntryData,
};
use crate::entry::application::services::{CreateEntryService, EditEntryService, GetEntryService};
use crate::learning_log::application::record_access_coordinator::RecordAccessCoordinator;
use crate::topic::application::ports::outgoing::{
    CreateTopicData, TopicQuery, TopicQueryError, TopicQueryResult, TopicRepository,
    TopicRepositoryError, TopicResult,
};
use crate::topic::application::services::{
    CreateTopicService, GetTopicDetailService, GetTopicService, GetTopicsService,
};

#[derive(Default)]
struct Store {
    topics: Vec<TopicQueryResult>,
    entries: Vec<EntryQueryResult>,
    ticks: i64,
}

impl Store {
    /// Strictly increasing clock so ordering assertions are deterministic.
    fn tick(&mut self) -> DateTime<Utc> {
        self.ticks += 1;
        Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap() + Duration::seconds(self.ticks)
    }
}

/// Topic and entry storage in one place, enforcing the same unique
/// constraints as the database schema.
#[derive(Clone, Default)]
pub struct InMemoryLearningLog {
    store: Arc<Mutex<Store>>,
}

impl InMemoryLearningLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Real services wired over this store.
    pub fn coordinator(&self) -> RecordAccessCoordinator {
        RecordAccessCoordinator {
            get_topics: Arc::new(GetTopicsService::new(self.clone())),
            get_topic: Arc::new(GetTopicService::new(self.clone())),
            get_topic_detail: Arc::new(GetTopicDetailService::new(self.clone(), self.clone())),
            create_topic: Arc::new(CreateTopicService::new(self.clone())),
            get_entry: Arc::new(GetEntryService::new(self.clone(), self.clone())),
            create_entry: Arc::new(CreateEntryService::new(self.clone())),
            edit_entry: Arc::new(EditEntryService::new(self.clone())),
        }
    }

    pub fn topics(&self) -> Vec<TopicQueryResult> {
        self.store.lock().unwrap().topics.clone()
    }

    pub fn entries(&self) -> Vec<EntryQueryResult> {
        self.store.lock().unwrap().entries.clone()
    }

    pub fn seed_topic(&self, owner: UserId, text: &str, slug: &str) -> TopicQueryResult {
        let mut store = self.store.lock().unwrap();
        let topic = TopicQueryResult {
            id: Uuid::new_v4(),
            owner,
            text: text.to_string(),
            slug: slug.to_string(),
            date_added: store.tick(),
        };
        store.topics.push(topic.clone());
        topic
    }

    pub fn seed_entry(&self, topic_id: Uuid, text: &str, slug: &str) -> EntryQueryResult {
        let mut store = self.store.lock().unwrap();
        let at = store.tick();
        let entry = EntryQueryResult {
            id: Uuid::new_v4(),
            topic_id,
            text: text.to_string(),
            slug: slug.to_string(),
            date_added: at,
            updated_at: at,
        };
        store.entries.push(entry.clone());
        entry
    }
}

fn to_topic_result(t: &TopicQueryResult) -> TopicResult {
    TopicResult {
        id: t.id,
        owner: t.owner,
        text: t.text.clone(),
        slug: t.slug.clone(),
        date_added: t.date_added,
    }
}

fn to_entry_result(e: &EntryQueryResult) -> EntryResult {
    EntryResult {
        id: e.id,
        topic_id: e.topic_id,
        text: e.text.clone(),
        slug: e.slug.clone(),
        date_added: e.date_added,
        updated_at: e.updated_at,
    }
}

#[async_trait]
impl TopicQuery for InMemoryLearningLog {
    async fn list_by_owner(
        &self,
        owner: UserId,
    ) -> Result<Vec<TopicQueryResult>, TopicQueryError> {
        let store = self.store.lock().unwrap();
        let mut topics: Vec<_> = store
            .topics
            .iter()
            .filter(|t| t.owner == owner)
            .cloned()
            .collect();
        topics.sort_by_key(|t| t.date_added);
        Ok(topics)
    }

    async fn find_by_slug(
        &self,
        owner: UserId,
        slug: &str,
    ) -> Result<Option<TopicQueryResult>, TopicQueryError> {
        let store = self.store.lock().unwrap();
        Ok(store
            .topics
            .iter()
            .find(|t| t.owner == owner && t.slug == slug)
            .cloned())
    }
}

#[async_trait]
impl TopicRepository for InMemoryLearningLog {
    async fn create_topic(
        &self,
        data: CreateTopicData,
    ) -> Result<TopicResult, TopicRepositoryError> {
        let mut store = self.store.lock().unwrap();

        if store
            .topics
            .iter()
            .any(|t| t.owner == data.owner && t.slug == data.slug)
        {
            return Err(TopicRepositoryError::TopicAlreadyExists);
        }

        let topic = TopicQueryResult {
            id: Uuid::new_v4(),
            owner: data.owner,
            text: data.text,
            slug: data.slug,
            date_added: store.tick(),
        };
        store.topics.push(topic.clone());

        Ok(to_topic_result(&topic))
    }
}

#[async_trait]
impl EntryQuery for InMemoryLearningLog {
    async fn list_by_topic(
        &self,
        topic_id: Uuid,
    ) -> Result<Vec<EntryQueryResult>, EntryQueryError> {
        let store = self.store.lock().unwrap();
        let mut entries: Vec<_> = store
            .entries
            .iter()
            .filter(|e| e.topic_id == topic_id)
            .cloned()
            .collect();
        entries.sort_by(|a, b| b.date_added.cmp(&a.date_added));
        Ok(entries)
    }

    async fn find_by_slug(
        &self,
        topic_id: Uuid,
        slug: &str,
    ) -> Result<Option<EntryQueryResult>, EntryQueryError> {
        let store = self.store.lock().unwrap();
        Ok(store
            .entries
            .iter()
            .find(|e| e.topic_id == topic_id && e.slug == slug)
            .cloned())
    }
}

#[async_trait]
impl EntryRepository for InMemoryLearningLog {
    async fn create_entry(
        &self,
        data: CreateEntryData,
    ) -> Result<EntryResult, EntryRepositoryError> {
        let mut store = self.store.lock().unwrap();

        if !store.topics.iter().any(|t| t.id == data.topic_id) {
            return Err(EntryRepositoryError::DatabaseError(
                "violates foreign key constraint fk_entries_topic_id".to_string(),
            ));
        }

        if store
            .entries
            .iter()
            .any(|e| e.topic_id == data.topic_id && e.slug == data.slug)
        {
            return Err(EntryRepositoryError::EntryAlreadyExists);
        }

        let at = store.tick();
        let entry = EntryQueryResult {
            id: Uuid::new_v4(),
            topic_id: data.topic_id,
            text: data.text,
            slug: data.slug,
            date_added: at,
            updated_at: at,
        };
        store.entries.push(entry.clone());

        Ok(to_entry_result(&entry))
    }

    async fn update_entry(
        &self,
        data: UpdateEntryData,
    ) -> Result<EntryResult, EntryRepositoryError> {
        let mut store = self.store.lock().unwrap();

        let topic_id = store
            .entries
            .iter()
            .find(|e| e.id == data.entry_id)
            .map(|e| e.topic_id)
            .ok_or(EntryRepositoryError::EntryNotFound)?;

        if store
            .entries
            .iter()
            .any(|e| e.topic_id == topic_id && e.slug == data.slug && e.id != data.entry_id)
        {
            return Err(EntryRepositoryError::EntryAlreadyExists);
        }

        let now = store.tick();
        let entry = store
            .entries
            .iter_mut()
            .find(|e| e.id == data.entry_id)
            .ok_or(EntryRepositoryError::EntryNotFound)?;

        entry.text = data.text;
        entry.slug = data.slug;
        entry.updated_at = now;

        Ok(to_entry_result(entry))
    }
}
