use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::entry::application::ports::outgoing::EntryQueryResult;
use crate::learning_log::application::forms::{AnnotatedForm, EntryForm, FieldError, FormWithErrors};
use crate::learning_log::application::record_access_coordinator::EntryFormPage;
use crate::topic::application::ports::incoming::use_cases::TopicDetail;
use crate::topic::application::ports::outgoing::TopicQueryResult;

//
// ──────────────────────────────────────────────────────────
// Response DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Serialize, ToSchema)]
pub struct TopicView {
    #[schema(example = "chess")]
    pub slug: String,
    #[schema(example = "Chess")]
    pub text: String,
    pub date_added: DateTime<Utc>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct EntryView {
    #[schema(example = "ruy-lopez")]
    pub slug: String,
    pub text: String,
    pub date_added: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TopicListView {
    pub topics: Vec<TopicView>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TopicDetailView {
    pub topic: TopicView,
    /// Most recent first.
    pub entries: Vec<EntryView>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct EntryFormView {
    pub topic: TopicView,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry: Option<EntryView>,
    pub form: FormWithErrors<EntryForm>,
}

impl From<TopicQueryResult> for TopicView {
    fn from(t: TopicQueryResult) -> Self {
        Self {
            slug: t.slug,
            text: t.text,
            date_added: t.date_added,
        }
    }
}

impl From<EntryQueryResult> for EntryView {
    fn from(e: EntryQueryResult) -> Self {
        Self {
            slug: e.slug,
            text: e.text,
            date_added: e.date_added,
            updated_at: e.updated_at,
        }
    }
}

impl From<Vec<TopicQueryResult>> for TopicListView {
    fn from(topics: Vec<TopicQueryResult>) -> Self {
        Self {
            topics: topics.into_iter().map(TopicView::from).collect(),
        }
    }
}

impl From<TopicDetail> for TopicDetailView {
    fn from(detail: TopicDetail) -> Self {
        Self {
            topic: detail.topic.into(),
            entries: detail.entries.into_iter().map(EntryView::from).collect(),
        }
    }
}

impl From<EntryFormPage> for EntryFormView {
    fn from(page: EntryFormPage) -> Self {
        Self {
            topic: page.topic.into(),
            entry: page.entry.map(EntryView::from),
            form: page.form,
        }
    }
}

impl AnnotatedForm for EntryFormView {
    fn field_errors(&self) -> &[FieldError] {
        self.form.field_errors()
    }

    fn notice(&self) -> Option<&str> {
        self.form.notice()
    }
}
