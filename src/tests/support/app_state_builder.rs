use actix_web::web;
use std::sync::Arc;

use crate::entry::application::ports::incoming::use_cases::{
    CreateEntryUseCase, EditEntryUseCase, GetEntryUseCase,
};
use crate::learning_log::application::record_access_coordinator::RecordAccessCoordinator;
use crate::tests::support::stubs::*;
use crate::topic::application::ports::incoming::use_cases::{
    CreateTopicUseCase, GetTopicDetailUseCase, GetTopicUseCase, GetTopicsUseCase,
};
use crate::AppState;

/// Builds an `AppState` whose use cases are stubs unless overridden.
pub struct TestAppStateBuilder {
    learning_log: RecordAccessCoordinator,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            learning_log: RecordAccessCoordinator {
                get_topics: Arc::new(StubGetTopicsUseCase::success(vec![])),
                get_topic: Arc::new(StubGetTopicUseCase::not_found()),
                get_topic_detail: Arc::new(StubGetTopicDetailUseCase::not_found()),
                create_topic: Arc::new(StubCreateTopicUseCase::default()),
                get_entry: Arc::new(StubGetEntryUseCase::not_found()),
                create_entry: Arc::new(StubCreateEntryUseCase::default()),
                edit_entry: Arc::new(StubEditEntryUseCase::default()),
            },
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_coordinator(mut self, coordinator: RecordAccessCoordinator) -> Self {
        self.learning_log = coordinator;
        self
    }

    pub fn with_get_topics(mut self, uc: impl GetTopicsUseCase + Send + Sync + 'static) -> Self {
        self.learning_log.get_topics = Arc::new(uc);
        self
    }

    pub fn with_get_topic(mut self, uc: impl GetTopicUseCase + Send + Sync + 'static) -> Self {
        self.learning_log.get_topic = Arc::new(uc);
        self
    }

    pub fn with_get_topic_detail(
        mut self,
        uc: impl GetTopicDetailUseCase + Send + Sync + 'static,
    ) -> Self {
        self.learning_log.get_topic_detail = Arc::new(uc);
        self
    }

    pub fn with_create_topic(
        mut self,
        uc: impl CreateTopicUseCase + Send + Sync + 'static,
    ) -> Self {
        self.learning_log.create_topic = Arc::new(uc);
        self
    }

    pub fn with_get_entry(mut self, uc: impl GetEntryUseCase + Send + Sync + 'static) -> Self {
        self.learning_log.get_entry = Arc::new(uc);
        self
    }

    pub fn with_create_entry(
        mut self,
        uc: impl CreateEntryUseCase + Send + Sync + 'static,
    ) -> Self {
        self.learning_log.create_entry = Arc::new(uc);
        self
    }

    pub fn with_edit_entry(mut self, uc: impl EditEntryUseCase + Send + Sync + 'static) -> Self {
        self.learning_log.edit_entry = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            learning_log: self.learning_log,
        })
    }
}
