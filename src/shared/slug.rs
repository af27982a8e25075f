use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::LazyLock;

pub const SLUG_MAX_LEN: usize = 50;

static SLUG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("slug pattern compiles"));

static NON_SLUG_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("separator pattern compiles"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SlugError {
    #[error("Slug may only contain lowercase letters, digits and single hyphens")]
    InvalidCharacters,

    #[error("Slug must not exceed 50 characters")]
    TooLong,

    #[error("A slug cannot be derived from this text")]
    Underivable,
}

impl SlugError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidCharacters => "INVALID_SLUG",
            Self::TooLong => "MAX_LENGTH",
            Self::Underivable => "SLUG_UNDERIVABLE",
        }
    }
}

/// URL-safe identifier used in place of a numeric id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Slug(String);

impl Slug {
    /// Accepts an explicit slug as typed by the user.
    pub fn parse(raw: &str) -> Result<Self, SlugError> {
        let raw = raw.trim();

        if raw.len() > SLUG_MAX_LEN {
            return Err(SlugError::TooLong);
        }

        if !SLUG_PATTERN.is_match(raw) {
            return Err(SlugError::InvalidCharacters);
        }

        Ok(Self(raw.to_string()))
    }

    /// Builds a slug out of free text: lowercase ASCII alphanumerics,
    /// everything else collapsed to single hyphens.
    pub fn derive_from(text: &str) -> Result<Self, SlugError> {
        let lowered = text.to_lowercase();
        let dashed = NON_SLUG_RUN.replace_all(&lowered, "-");
        let trimmed = dashed.trim_matches('-');

        // Only ASCII survives the replacement, so byte slicing is safe.
        let mut slug = if trimmed.len() > SLUG_MAX_LEN {
            &trimmed[..SLUG_MAX_LEN]
        } else {
            trimmed
        };
        slug = slug.trim_end_matches('-');

        if slug.is_empty() {
            return Err(SlugError::Underivable);
        }

        Ok(Self(slug.to_string()))
    }

    /// Explicit slug when one was typed, otherwise derived from `text`.
    pub fn resolve(explicit: Option<&str>, text: &str) -> Result<Self, SlugError> {
        match explicit.map(str::trim) {
            Some(raw) if !raw.is_empty() => Self::parse(raw),
            _ => Self::derive_from(text),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
