//! Slug type and derivation for note addressing.
//!
//! Slugs are trimmed, non-empty identifiers composed of lowercase ASCII
//! letters, digits, and hyphens, at most [`SLUG_MAX`] characters. When the
//! create form omits a slug, one is derived from the title by transliterating
//! it to that shape.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Maximum allowed length for a slug.
pub const SLUG_MAX: usize = 100;

/// Field-error suffix appended to a colliding slug on form re-render.
pub const SLUG_WARNING: &str = " - такой slug уже существует, придумайте уникальное значение!";

/// Validation errors returned by [`Slug::new`] and [`Slug::derive`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SlugValidationError {
    #[error("slug must not be empty")]
    Empty,
    #[error("slug must be at most {max} characters")]
    TooLong { max: usize },
    #[error("slug may only contain lowercase letters, digits, and hyphens")]
    InvalidCharacters,
    #[error("title has no characters usable in a slug")]
    Underivable,
}

/// URL-safe unique identifier for a note.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Slug(String);

impl Slug {
    /// Validate and construct a [`Slug`] from an explicitly submitted value.
    pub fn new(value: impl Into<String>) -> Result<Self, SlugValidationError> {
        let value = value.into();
        if value.is_empty() || value.trim() != value {
            return Err(SlugValidationError::Empty);
        }
        if value.chars().count() > SLUG_MAX {
            return Err(SlugValidationError::TooLong { max: SLUG_MAX });
        }
        if !value
            .chars()
            .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-')
        {
            return Err(SlugValidationError::InvalidCharacters);
        }
        Ok(Self(value))
    }

    /// Derive a slug from a note title.
    ///
    /// Transliterates the title to lowercase hyphenated ASCII and truncates
    /// to [`SLUG_MAX`] characters. Fails only when nothing transliterable
    /// remains (for example a title of punctuation).
    pub fn derive(title: &str) -> Result<Self, SlugValidationError> {
        let mut derived = slug::slugify(title);
        if derived.is_empty() {
            return Err(SlugValidationError::Underivable);
        }
        derived.truncate(SLUG_MAX);
        // Truncation can leave a trailing hyphen; the grammar forbids nothing
        // here, but strip it to match what a fresh slugify would produce.
        let trimmed = derived.trim_end_matches('-').to_owned();
        Self::new(trimmed)
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<Slug> for String {
    fn from(value: Slug) -> Self {
        value.0
    }
}

impl TryFrom<String> for Slug {
    type Error = SlugValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("note-slug")]
    #[case("a")]
    #[case("1999-12-31")]
    fn accepts_valid_slugs(#[case] raw: &str) {
        let slug = Slug::new(raw).expect("valid slug");
        assert_eq!(slug.as_ref(), raw);
    }

    #[rstest]
    #[case("", SlugValidationError::Empty)]
    #[case(" padded ", SlugValidationError::Empty)]
    #[case("Upper", SlugValidationError::InvalidCharacters)]
    #[case("with space", SlugValidationError::InvalidCharacters)]
    #[case("under_score", SlugValidationError::InvalidCharacters)]
    fn rejects_invalid_slugs(#[case] raw: &str, #[case] expected: SlugValidationError) {
        assert_eq!(Slug::new(raw).expect_err("must fail"), expected);
    }

    #[test]
    fn rejects_overlong_slug() {
        let raw = "a".repeat(SLUG_MAX + 1);
        assert_eq!(
            Slug::new(raw).expect_err("must fail"),
            SlugValidationError::TooLong { max: SLUG_MAX }
        );
    }

    #[rstest]
    #[case("New Heading", "new-heading")]
    #[case("Новый заголовок", "novyi-zagolovok")]
    #[case("Trailing   spaces  ", "trailing-spaces")]
    fn derives_from_titles(#[case] title: &str, #[case] expected: &str) {
        let slug = Slug::derive(title).expect("derivable title");
        assert_eq!(slug.as_ref(), expected);
    }

    #[test]
    fn derivation_truncates_to_max() {
        let title = "word ".repeat(40);
        let slug = Slug::derive(&title).expect("derivable title");
        assert!(slug.as_ref().chars().count() <= SLUG_MAX);
        assert!(!slug.as_ref().ends_with('-'));
    }

    #[test]
    fn underivable_title_fails() {
        assert_eq!(
            Slug::derive("!!!").expect_err("must fail"),
            SlugValidationError::Underivable
        );
    }
}
