//! Driven port for note persistence.

use async_trait::async_trait;

use crate::domain::note::{NewNote, Note, NoteChanges};
use crate::domain::slug::Slug;
use crate::domain::user::UserId;

use super::PersistenceError;

/// Storage contract for notes.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NoteRepository: Send + Sync {
    /// Insert a note and return the stored row.
    async fn insert(&self, note: NewNote) -> Result<Note, PersistenceError>;

    /// Fetch a note by slug regardless of owner.
    async fn find_by_slug(&self, slug: &Slug) -> Result<Option<Note>, PersistenceError>;

    /// True when `slug` is already used by a note other than `exclude_id`.
    async fn slug_taken(
        &self,
        slug: &Slug,
        exclude_id: Option<i32>,
    ) -> Result<bool, PersistenceError>;

    /// All notes belonging to `author`, ordered by id.
    async fn list_by_author(&self, author: &UserId) -> Result<Vec<Note>, PersistenceError>;

    /// Replace an existing note's fields and return the stored row.
    async fn update(&self, id: i32, changes: NoteChanges) -> Result<Note, PersistenceError>;

    /// Delete a note by id.
    async fn delete(&self, id: i32) -> Result<(), PersistenceError>;
}
