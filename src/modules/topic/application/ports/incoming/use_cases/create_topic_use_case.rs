use async_trait::async_trait;

use crate::{
    auth::application::domain::entities::UserId,
    shared::slug::{Slug, SlugError},
    topic::application::ports::outgoing::TopicResult,
};

pub const TOPIC_TEXT_MAX_LEN: usize = 200;

//
// ──────────────────────────────────────────────────────────
// Create Topic Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CreateTopicCommand {
    owner: UserId,
    text: String,
    slug: Slug,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TopicCommandError {
    #[error("This field is required.")]
    EmptyText,

    #[error("Ensure this value has at most 200 characters.")]
    TextTooLong,

    #[error(transparent)]
    InvalidSlug(#[from] SlugError),
}

impl TopicCommandError {
    /// Form field the error belongs to.
    pub fn field(&self) -> &'static str {
        match self {
            Self::EmptyText | Self::TextTooLong => "text",
            Self::InvalidSlug(_) => "slug",
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptyText => "REQUIRED",
            Self::TextTooLong => "MAX_LENGTH",
            Self::InvalidSlug(e) => e.code(),
        }
    }
}

impl CreateTopicCommand {
    /// Checks every field; all problems are reported together.
    pub fn new(
        owner: UserId,
        text: String,
        slug: Option<String>,
    ) -> Result<Self, Vec<TopicCommandError>> {
        let text = text.trim();
        let explicit = slug.as_deref().map(str::trim).filter(|s| !s.is_empty());
        let mut errors = Vec::new();

        if text.is_empty() {
            errors.push(TopicCommandError::EmptyText);
        } else if text.chars().count() > TOPIC_TEXT_MAX_LEN {
            errors.push(TopicCommandError::TextTooLong);
        }

        // Nothing to derive from blank text; that case is already reported.
        let slug = match explicit {
            Some(raw) => Slug::parse(raw).map(Some),
            None if !text.is_empty() => Slug::derive_from(text).map(Some),
            None => Ok(None),
        }
        .unwrap_or_else(|e| {
            errors.push(e.into());
            None
        });

        match slug {
            Some(slug) if errors.is_empty() => Ok(Self {
                owner,
                text: text.to_string(),
                slug,
            }),
            _ => Err(errors),
        }
    }

    pub fn owner(&self) -> &UserId {
        &self.owner
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn slug(&self) -> &Slug {
        &self.slug
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateTopicError {
    #[error("Topic already exists")]
    TopicAlreadyExists,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateTopicUseCase: Send + Sync {
    async fn execute(&self, command: CreateTopicCommand) -> Result<TopicResult, CreateTopicError>;
}
