//! Note aggregate.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::slug::Slug;
use crate::domain::user::UserId;

/// Maximum allowed length for a note title.
pub const NOTE_TITLE_MAX: usize = 100;

/// Personal text note addressed by its slug.
///
/// ## Invariants
/// - `slug` is globally unique (enforced at form validation and by the
///   repository's unique index).
/// - Mutations and detail reads are permitted only when the requester is
///   `author`; the services mask everything else as not found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Stable identifier.
    pub id: i32,
    /// Title shown in the list page, at most [`NOTE_TITLE_MAX`] characters.
    pub title: String,
    /// Note body.
    pub text: String,
    /// Unique URL identifier.
    pub slug: Slug,
    /// Owning user.
    #[serde(skip)]
    pub author: UserId,
    /// Creation timestamp.
    #[serde(skip)]
    pub created_at: DateTime<Utc>,
}

/// Validated payload for inserting a note.
#[derive(Debug, Clone)]
pub struct NewNote {
    /// Title, already validated against [`NOTE_TITLE_MAX`].
    pub title: String,
    /// Note body.
    pub text: String,
    /// Unique URL identifier, explicit or derived from the title.
    pub slug: Slug,
    /// Owning user.
    pub author: UserId,
}

/// Validated replacement values for an existing note.
#[derive(Debug, Clone)]
pub struct NoteChanges {
    /// Replacement title.
    pub title: String,
    /// Replacement body.
    pub text: String,
    /// Replacement slug, still globally unique.
    pub slug: Slug,
}
