use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entry::application::ports::incoming::use_cases::EntryCommandError;
use crate::topic::application::ports::incoming::use_cases::TopicCommandError;

//
// ──────────────────────────────────────────────────────────
// Submitted fields
// ──────────────────────────────────────────────────────────
//

/// Fields of the new-topic form. A blank `slug` means "derive it".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct TopicForm {
    #[schema(example = "Chess")]
    pub text: String,

    #[schema(example = "chess")]
    pub slug: String,
}

/// Fields of the new/edit entry form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct EntryForm {
    #[schema(example = "The Ruy Lopez starts with 1.e4 e5 2.Nf3 Nc6 3.Bb5")]
    pub text: String,

    #[schema(example = "ruy-lopez")]
    pub slug: String,
}

impl TopicForm {
    pub(crate) fn slug_input(&self) -> Option<String> {
        Some(self.slug.clone()).filter(|s| !s.trim().is_empty())
    }
}

impl EntryForm {
    pub(crate) fn slug_input(&self) -> Option<String> {
        Some(self.slug.clone()).filter(|s| !s.trim().is_empty())
    }
}

//
// ──────────────────────────────────────────────────────────
// Annotated form
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct FieldError {
    #[schema(example = "text")]
    pub field: String,

    #[schema(example = "REQUIRED")]
    pub code: String,

    #[schema(example = "This field is required.")]
    pub message: String,
}

impl From<TopicCommandError> for FieldError {
    fn from(e: TopicCommandError) -> Self {
        Self {
            field: e.field().to_string(),
            code: e.code().to_string(),
            message: e.to_string(),
        }
    }
}

impl From<EntryCommandError> for FieldError {
    fn from(e: EntryCommandError) -> Self {
        Self {
            field: e.field().to_string(),
            code: e.code().to_string(),
            message: e.to_string(),
        }
    }
}

/// A form to show again: what was submitted plus why it was refused.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct FormWithErrors<F> {
    pub fields: F,
    pub errors: Vec<FieldError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
}

impl<F> FormWithErrors<F> {
    pub fn blank(fields: F) -> Self {
        Self {
            fields,
            errors: Vec::new(),
            notice: None,
        }
    }

    /// The form with one annotation per rejected field.
    pub fn invalid<E>(fields: F, errors: impl IntoIterator<Item = E>) -> Self
    where
        E: Into<FieldError>,
    {
        Self {
            fields,
            errors: errors.into_iter().map(Into::into).collect(),
            notice: None,
        }
    }

    pub fn with_notice(fields: F, notice: &str) -> Self {
        Self {
            fields,
            errors: Vec::new(),
            notice: Some(notice.to_string()),
        }
    }
}

/// Anything shown again after a refused submission: a bare form, or a
/// page wrapping one.
pub trait AnnotatedForm {
    fn field_errors(&self) -> &[FieldError];
    fn notice(&self) -> Option<&str>;
}

impl<F> AnnotatedForm for FormWithErrors<F> {
    fn field_errors(&self) -> &[FieldError] {
        &self.errors
    }

    fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }
}

//
// ──────────────────────────────────────────────────────────
// Redirect targets
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RedirectTarget {
    TopicList,
    TopicDetail { slug: String },
}

impl RedirectTarget {
    pub fn path(&self) -> String {
        match self {
            Self::TopicList => "/topics".to_string(),
            Self::TopicDetail { slug } => format!("/topics/{}", slug),
        }
    }
}
