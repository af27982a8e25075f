use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::entry::application::ports::incoming::use_cases::{
    CreateEntryCommand, CreateEntryError, CreateEntryUseCase, EditEntryCommand, EditEntryError,
    EditEntryUseCase, EntryWithTopic, GetEntryError, GetEntryUseCase,
};
use crate::entry::application::ports::outgoing::EntryResult;
use crate::topic::application::ports::incoming::use_cases::{
    CreateTopicCommand, CreateTopicError, CreateTopicUseCase, GetTopicDetailUseCase,
    GetTopicError, GetTopicUseCase, GetTopicsError, GetTopicsUseCase, TopicDetail,
};
use crate::topic::application::ports::outgoing::{TopicQueryResult, TopicResult};

// ──────────────────────────────────────────────────────────
// Topic use cases
// ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct StubGetTopicsUseCase {
    result: Result<Vec<TopicQueryResult>, GetTopicsError>,
}

impl StubGetTopicsUseCase {
    pub fn success(data: Vec<TopicQueryResult>) -> Self {
        Self { result: Ok(data) }
    }

    pub fn failure(msg: &str) -> Self {
        Self {
            result: Err(GetTopicsError::QueryFailed(msg.into())),
        }
    }
}

#[async_trait]
impl GetTopicsUseCase for StubGetTopicsUseCase {
    async fn execute(&self, _owner: UserId) -> Result<Vec<TopicQueryResult>, GetTopicsError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubGetTopicUseCase {
    result: Result<TopicQueryResult, GetTopicError>,
}

impl StubGetTopicUseCase {
    pub fn found(topic: TopicQueryResult) -> Self {
        Self { result: Ok(topic) }
    }

    pub fn not_found() -> Self {
        Self {
            result: Err(GetTopicError::NotFound),
        }
    }

    pub fn failure(msg: &str) -> Self {
        Self {
            result: Err(GetTopicError::QueryFailed(msg.into())),
        }
    }
}

#[async_trait]
impl GetTopicUseCase for StubGetTopicUseCase {
    async fn execute(
        &self,
        _owner: UserId,
        _slug: &str,
    ) -> Result<TopicQueryResult, GetTopicError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubGetTopicDetailUseCase {
    result: Result<TopicDetail, GetTopicError>,
}

impl StubGetTopicDetailUseCase {
    pub fn not_found() -> Self {
        Self {
            result: Err(GetTopicError::NotFound),
        }
    }

    pub fn failure(msg: &str) -> Self {
        Self {
            result: Err(GetTopicError::QueryFailed(msg.into())),
        }
    }
}

#[async_trait]
impl GetTopicDetailUseCase for StubGetTopicDetailUseCase {
    async fn execute(&self, _owner: UserId, _slug: &str) -> Result<TopicDetail, GetTopicError> {
        self.result.clone()
    }
}

/// Echoes the command back as a freshly stored topic unless told to fail.
#[derive(Clone, Default)]
pub struct StubCreateTopicUseCase {
    error: Option<CreateTopicError>,
}

impl StubCreateTopicUseCase {
    pub fn failing(error: CreateTopicError) -> Self {
        Self { error: Some(error) }
    }
}

#[async_trait]
impl CreateTopicUseCase for StubCreateTopicUseCase {
    async fn execute(&self, command: CreateTopicCommand) -> Result<TopicResult, CreateTopicError> {
        if let Some(e) = &self.error {
            return Err(e.clone());
        }

        Ok(TopicResult {
            id: Uuid::new_v4(),
            owner: *command.owner(),
            text: command.text().to_string(),
            slug: command.slug().to_string(),
            date_added: Utc::now(),
        })
    }
}

// ──────────────────────────────────────────────────────────
// Entry use cases
// ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct StubGetEntryUseCase {
    result: Result<EntryWithTopic, GetEntryError>,
}

impl StubGetEntryUseCase {
    pub fn not_found() -> Self {
        Self {
            result: Err(GetEntryError::NotFound),
        }
    }

    pub fn failure(msg: &str) -> Self {
        Self {
            result: Err(GetEntryError::QueryFailed(msg.into())),
        }
    }
}

#[async_trait]
impl GetEntryUseCase for StubGetEntryUseCase {
    async fn execute(
        &self,
        _owner: UserId,
        _topic_slug: &str,
        _entry_slug: &str,
    ) -> Result<EntryWithTopic, GetEntryError> {
        self.result.clone()
    }
}

#[derive(Clone, Default)]
pub struct StubCreateEntryUseCase {
    error: Option<CreateEntryError>,
}

impl StubCreateEntryUseCase {
    pub fn failing(error: CreateEntryError) -> Self {
        Self { error: Some(error) }
    }
}

#[async_trait]
impl CreateEntryUseCase for StubCreateEntryUseCase {
    async fn execute(&self, command: CreateEntryCommand) -> Result<EntryResult, CreateEntryError> {
        if let Some(e) = &self.error {
            return Err(e.clone());
        }

        Ok(EntryResult {
            id: Uuid::new_v4(),
            topic_id: command.topic_id(),
            text: command.text().to_string(),
            slug: command.slug().to_string(),
            date_added: Utc::now(),
            updated_at: Utc::now(),
        })
    }
}

#[derive(Clone)]
pub struct StubEditEntryUseCase {
    error: EditEntryError,
}

impl StubEditEntryUseCase {
    pub fn failing(error: EditEntryError) -> Self {
        Self { error }
    }
}

impl Default for StubEditEntryUseCase {
    fn default() -> Self {
        Self::failing(EditEntryError::RepositoryError(
            "not used in this test".into(),
        ))
    }
}

#[async_trait]
impl EditEntryUseCase for StubEditEntryUseCase {
    async fn execute(&self, _command: EditEntryCommand) -> Result<EntryResult, EditEntryError> {
        Err(self.error.clone())
    }
}
