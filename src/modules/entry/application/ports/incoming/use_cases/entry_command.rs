use uuid::Uuid;

use crate::{
    entry::application::ports::outgoing::EntryQueryResult,
    shared::slug::{Slug, SlugError},
};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EntryCommandError {
    #[error("This field is required.")]
    EmptyText,

    #[error(transparent)]
    InvalidSlug(#[from] SlugError),
}

impl EntryCommandError {
    pub fn field(&self) -> &'static str {
        match self {
            Self::EmptyText => "text",
            Self::InvalidSlug(_) => "slug",
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptyText => "REQUIRED",
            Self::InvalidSlug(e) => e.code(),
        }
    }
}

/// Trimmed text, recording an error when nothing is left.
fn clean_text<'a>(text: &'a str, errors: &mut Vec<EntryCommandError>) -> &'a str {
    let text = text.trim();
    if text.is_empty() {
        errors.push(EntryCommandError::EmptyText);
    }
    text
}

fn non_blank(slug: Option<&str>) -> Option<&str> {
    slug.map(str::trim).filter(|s| !s.is_empty())
}

//
// ──────────────────────────────────────────────────────────
// Create Entry Command
// ──────────────────────────────────────────────────────────
//

/// New entry under an already resolved (and owned) topic.
#[derive(Debug, Clone)]
pub struct CreateEntryCommand {
    topic_id: Uuid,
    text: String,
    slug: Slug,
}

impl CreateEntryCommand {
    pub fn new(
        topic_id: Uuid,
        text: String,
        slug: Option<String>,
    ) -> Result<Self, Vec<EntryCommandError>> {
        let mut errors = Vec::new();
        let text = clean_text(&text, &mut errors);

        let slug = match non_blank(slug.as_deref()) {
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
                topic_id,
                text: text.to_string(),
                slug,
            }),
            _ => Err(errors),
        }
    }

    pub fn topic_id(&self) -> Uuid {
        self.topic_id
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
// Edit Entry Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct EditEntryCommand {
    entry_id: Uuid,
    text: String,
    slug: String,
}

impl EditEntryCommand {
    /// A blank `slug` keeps the entry's current slug.
    pub fn new(
        existing: &EntryQueryResult,
        text: String,
        slug: Option<String>,
    ) -> Result<Self, Vec<EntryCommandError>> {
        let mut errors = Vec::new();
        let text = clean_text(&text, &mut errors);

        let slug = match non_blank(slug.as_deref()) {
            Some(raw) => Slug::parse(raw).map(Slug::into_inner),
            None => Ok(existing.slug.clone()),
        }
        .unwrap_or_else(|e| {
            errors.push(e.into());
            String::new()
        });

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(Self {
            entry_id: existing.id,
            text: text.to_string(),
            slug,
        })
    }

    pub fn entry_id(&self) -> Uuid {
        self.entry_id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }
}
