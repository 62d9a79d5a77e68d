//! Driving port for note operations.
//!
//! The [`NotesService`] trait defines the inbound contract for the personal
//! notes application: create with slug derivation, author-scoped listing, and
//! owner-gated detail, edit, and delete.

use async_trait::async_trait;

use crate::domain::forms::FormOutcome;
use crate::domain::note::Note;
use crate::domain::user::UserId;
use crate::domain::Error;

/// Raw note form submission, exactly as the page posted it.
#[derive(Debug, Clone, Default)]
pub struct NoteForm {
    /// Submitted title.
    pub title: String,
    /// Submitted body.
    pub text: String,
    /// Submitted slug; `None` or blank requests derivation from the title.
    pub slug: Option<String>,
}

/// Driving port for the notes application.
///
/// # Ownership
///
/// Detail, edit, and delete take the requesting user and mask ownership
/// denial as [`crate::domain::ErrorCode::NotFound`]: a non-owner cannot tell
/// whether a slug exists at all.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotesService: Send + Sync {
    /// Validate and create a note for `author`.
    ///
    /// A missing slug is derived from the title; a colliding slug rejects
    /// the form with the collision warning and writes nothing.
    async fn create_note(
        &self,
        author: &UserId,
        form: NoteForm,
    ) -> Result<FormOutcome<Note>, Error>;

    /// All of `author`'s notes, and nobody else's.
    async fn list_notes(&self, author: &UserId) -> Result<Vec<Note>, Error>;

    /// The note at `slug`, if it exists and `requester` owns it.
    async fn note_detail(&self, requester: &UserId, slug: &str) -> Result<Note, Error>;

    /// Validate and apply a full edit to the note at `slug`.
    async fn update_note(
        &self,
        requester: &UserId,
        slug: &str,
        form: NoteForm,
    ) -> Result<FormOutcome<Note>, Error>;

    /// Delete the note at `slug`.
    async fn delete_note(&self, requester: &UserId, slug: &str) -> Result<(), Error>;
}
