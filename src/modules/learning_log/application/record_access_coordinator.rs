use std::sync::Arc;
use tracing::{info, warn};

use crate::{
    auth::application::domain::entities::UserId,
    entry::application::ports::{
        incoming::use_cases::{
            CreateEntryCommand, CreateEntryError, CreateEntryUseCase, EditEntryCommand,
            EditEntryError, EditEntryUseCase, GetEntryError, GetEntryUseCase,
        },
        outgoing::EntryQueryResult,
    },
    topic::application::ports::{
        incoming::use_cases::{
            CreateTopicCommand, CreateTopicError, CreateTopicUseCase, GetTopicDetailUseCase,
            GetTopicError, GetTopicUseCase, GetTopicsUseCase, TopicDetail,
        },
        outgoing::TopicQueryResult,
    },
};

use super::forms::{AnnotatedForm, EntryForm, FieldError, FormWithErrors, RedirectTarget, TopicForm};

pub const DUPLICATE_TOPIC_NOTICE: &str = "You can't log this topic twice";
pub const DUPLICATE_ENTRY_NOTICE: &str = "You can't add this entry twice";

//
// ──────────────────────────────────────────────────────────
// Outcomes
// ──────────────────────────────────────────────────────────
//

/// Failure of a read-only view.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AccessError {
    /// Absent, or owned by someone else.
    #[error("Not found")]
    NotFound,

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Failure of a form submission. `P` is what the user sees again.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionError<P> {
    /// The page goes back to the user, its form annotated.
    Invalid(P),
    NotFound,
    Internal(String),
}

impl<P> SubmissionError<P> {
    pub fn map_invalid<Q>(self, f: impl FnOnce(P) -> Q) -> SubmissionError<Q> {
        match self {
            Self::Invalid(page) => SubmissionError::Invalid(f(page)),
            Self::NotFound => SubmissionError::NotFound,
            Self::Internal(msg) => SubmissionError::Internal(msg),
        }
    }
}

impl<P> From<AccessError> for SubmissionError<P> {
    fn from(e: AccessError) -> Self {
        match e {
            AccessError::NotFound => Self::NotFound,
            AccessError::Internal(msg) => Self::Internal(msg),
        }
    }
}

impl From<GetTopicError> for AccessError {
    fn from(e: GetTopicError) -> Self {
        match e {
            GetTopicError::NotFound => Self::NotFound,
            GetTopicError::QueryFailed(msg) => Self::Internal(msg),
        }
    }
}

impl From<GetEntryError> for AccessError {
    fn from(e: GetEntryError) -> Self {
        match e {
            GetEntryError::NotFound => Self::NotFound,
            GetEntryError::QueryFailed(msg) => Self::Internal(msg),
        }
    }
}

/// What the entry form views render: the parent topic, the entry being
/// edited (if any) and the form itself.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryFormPage {
    pub topic: TopicQueryResult,
    pub entry: Option<EntryQueryResult>,
    pub form: FormWithErrors<EntryForm>,
}

impl AnnotatedForm for EntryFormPage {
    fn field_errors(&self) -> &[FieldError] {
        self.form.field_errors()
    }

    fn notice(&self) -> Option<&str> {
        self.form.notice()
    }
}

//
// ──────────────────────────────────────────────────────────
// Coordinator
// ──────────────────────────────────────────────────────────
//

/// Single entry point for every learning-log view. Enforces that a user
/// only ever reaches their own topics and entries, validates submitted
/// forms and picks where to go next.
#[derive(Clone)]
pub struct RecordAccessCoordinator {
    pub get_topics: Arc<dyn GetTopicsUseCase + Send + Sync>,
    pub get_topic: Arc<dyn GetTopicUseCase + Send + Sync>,
    pub get_topic_detail: Arc<dyn GetTopicDetailUseCase + Send + Sync>,
    pub create_topic: Arc<dyn CreateTopicUseCase + Send + Sync>,
    pub get_entry: Arc<dyn GetEntryUseCase + Send + Sync>,
    pub create_entry: Arc<dyn CreateEntryUseCase + Send + Sync>,
    pub edit_entry: Arc<dyn EditEntryUseCase + Send + Sync>,
}

impl RecordAccessCoordinator {
    /// Topics of `user`, oldest first.
    pub async fn list_topics(&self, user: UserId) -> Result<Vec<TopicQueryResult>, AccessError> {
        self.get_topics
            .execute(user)
            .await
            .map_err(|e| AccessError::Internal(e.to_string()))
    }

    /// One topic of `user` with its entries, newest entry first.
    pub async fn get_topic_detail(
        &self,
        user: UserId,
        slug: &str,
    ) -> Result<TopicDetail, AccessError> {
        Ok(self.get_topic_detail.execute(user, slug).await?)
    }

    pub fn new_topic_form(&self) -> FormWithErrors<TopicForm> {
        FormWithErrors::blank(TopicForm::default())
    }

    pub async fn create_topic(
        &self,
        user: UserId,
        form: TopicForm,
    ) -> Result<RedirectTarget, SubmissionError<FormWithErrors<TopicForm>>> {
        let command = match CreateTopicCommand::new(user, form.text.clone(), form.slug_input()) {
            Ok(cmd) => cmd,
            Err(e) => return Err(SubmissionError::Invalid(FormWithErrors::invalid(form, e))),
        };

        match self.create_topic.execute(command).await {
            Ok(topic) => {
                info!(topic_id = %topic.id, slug = %topic.slug, "Topic created");
                Ok(RedirectTarget::TopicList)
            }
            Err(CreateTopicError::TopicAlreadyExists) => {
                warn!("Duplicate topic slug rejected");
                Err(SubmissionError::Invalid(FormWithErrors::with_notice(
                    form,
                    DUPLICATE_TOPIC_NOTICE,
                )))
            }
            Err(CreateTopicError::RepositoryError(msg)) => Err(SubmissionError::Internal(msg)),
        }
    }

    pub async fn new_entry_form(
        &self,
        user: UserId,
        topic_slug: &str,
    ) -> Result<EntryFormPage, AccessError> {
        let topic = self.get_topic.execute(user, topic_slug).await?;

        Ok(EntryFormPage {
            topic,
            entry: None,
            form: FormWithErrors::blank(EntryForm::default()),
        })
    }

    pub async fn create_entry(
        &self,
        user: UserId,
        topic_slug: &str,
        form: EntryForm,
    ) -> Result<RedirectTarget, SubmissionError<EntryFormPage>> {
        // Ownership first: a foreign topic is a 404 even for a broken form.
        let topic = self
            .get_topic
            .execute(user, topic_slug)
            .await
            .map_err(AccessError::from)?;

        let command = match CreateEntryCommand::new(topic.id, form.text.clone(), form.slug_input())
        {
            Ok(cmd) => cmd,
            Err(e) => {
                return Err(SubmissionError::Invalid(EntryFormPage {
                    topic,
                    entry: None,
                    form: FormWithErrors::invalid(form, e),
                }))
            }
        };

        match self.create_entry.execute(command).await {
            Ok(entry) => {
                info!(entry_id = %entry.id, topic_id = %topic.id, "Entry created");
                Ok(RedirectTarget::TopicDetail { slug: topic.slug })
            }
            Err(CreateEntryError::EntryAlreadyExists) => {
                warn!(topic_id = %topic.id, "Duplicate entry slug rejected");
                Err(SubmissionError::Invalid(EntryFormPage {
                    topic,
                    entry: None,
                    form: FormWithErrors::with_notice(form, DUPLICATE_ENTRY_NOTICE),
                }))
            }
            Err(CreateEntryError::RepositoryError(msg)) => Err(SubmissionError::Internal(msg)),
        }
    }

    /// The stored entry, ready to be edited.
    pub async fn edit_entry_form(
        &self,
        user: UserId,
        topic_slug: &str,
        entry_slug: &str,
    ) -> Result<EntryFormPage, AccessError> {
        let found = self.get_entry.execute(user, topic_slug, entry_slug).await?;

        let form = EntryForm {
            text: found.entry.text.clone(),
            slug: found.entry.slug.clone(),
        };

        Ok(EntryFormPage {
            topic: found.topic,
            entry: Some(found.entry),
            form: FormWithErrors::blank(form),
        })
    }

    pub async fn edit_entry(
        &self,
        user: UserId,
        topic_slug: &str,
        entry_slug: &str,
        form: EntryForm,
    ) -> Result<RedirectTarget, SubmissionError<EntryFormPage>> {
        let found = self
            .get_entry
            .execute(user, topic_slug, entry_slug)
            .await
            .map_err(AccessError::from)?;

        let command =
            match EditEntryCommand::new(&found.entry, form.text.clone(), form.slug_input()) {
                Ok(cmd) => cmd,
                Err(e) => {
                    return Err(SubmissionError::Invalid(EntryFormPage {
                        topic: found.topic,
                        entry: Some(found.entry),
                        form: FormWithErrors::invalid(form, e),
                    }))
                }
            };

        match self.edit_entry.execute(command).await {
            Ok(entry) => {
                info!(entry_id = %entry.id, "Entry updated");
                Ok(RedirectTarget::TopicDetail {
                    slug: found.topic.slug,
                })
            }
            Err(EditEntryError::EntryAlreadyExists) => {
                warn!(entry_id = %found.entry.id, "Duplicate entry slug rejected");
                Err(SubmissionError::Invalid(EntryFormPage {
                    topic: found.topic,
                    entry: Some(found.entry),
                    form: FormWithErrors::with_notice(form, DUPLICATE_ENTRY_NOTICE),
                }))
            }
            Err(EditEntryError::EntryNotFound) => Err(SubmissionError::NotFound),
            Err(EditEntryError::RepositoryError(msg)) => Err(SubmissionError::Internal(msg)),
        }
    }
}
