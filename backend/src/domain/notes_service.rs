//! Note use-cases over the note repository port.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::forms::{FormErrors, FormOutcome, REQUIRED_FIELD};
use crate::domain::note::{NewNote, Note, NoteChanges, NOTE_TITLE_MAX};
use crate::domain::ports::{NoteForm, NoteRepository, NotesService};
use crate::domain::slug::{Slug, SLUG_WARNING};
use crate::domain::user::UserId;
use crate::domain::Error;

/// Message used when a note is absent or owned by somebody else.
///
/// Ownership denial reuses the absence message so the response does not
/// reveal that the slug exists.
const NOTE_MISSING: &str = "note not found";

/// [`NotesService`] implementation over a [`NoteRepository`].
#[derive(Clone)]
pub struct NotesServiceImpl {
    notes: Arc<dyn NoteRepository>,
}

impl NotesServiceImpl {
    /// Create a new service backed by the given repository.
    pub fn new(notes: Arc<dyn NoteRepository>) -> Self {
        Self { notes }
    }

    /// Fetch the note at `slug` only if `requester` owns it.
    ///
    /// Malformed slugs, missing notes, and foreign notes are all reported
    /// identically as not found.
    async fn owned_note(&self, requester: &UserId, slug: &str) -> Result<Note, Error> {
        let slug = Slug::new(slug).map_err(|_| Error::not_found(NOTE_MISSING))?;
        let note = self
            .notes
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| Error::not_found(NOTE_MISSING))?;
        if note.author != *requester {
            return Err(Error::not_found(NOTE_MISSING));
        }
        Ok(note)
    }

    /// Check slug uniqueness and produce the collision field error.
    async fn ensure_slug_free(
        &self,
        slug: &Slug,
        exclude_id: Option<i32>,
    ) -> Result<Option<FormErrors>, Error> {
        if self.notes.slug_taken(slug, exclude_id).await? {
            return Ok(Some(FormErrors::field(
                "slug",
                format!("{slug}{SLUG_WARNING}"),
            )));
        }
        Ok(None)
    }
}

/// Validated note form fields ready for the repository.
struct ValidatedNote {
    title: String,
    text: String,
    slug: Slug,
}

/// Field-validate a raw note form: presence, title length, slug shape.
///
/// Uniqueness is checked separately because it needs the repository.
fn validate_form(form: &NoteForm) -> Result<ValidatedNote, FormErrors> {
    let mut errors = FormErrors::new();

    let title = form.title.trim().to_owned();
    if title.is_empty() {
        errors.add("title", REQUIRED_FIELD);
    } else if title.chars().count() > NOTE_TITLE_MAX {
        errors.add(
            "title",
            format!("Ensure this value has at most {NOTE_TITLE_MAX} characters."),
        );
    }

    let text = form.text.trim().to_owned();
    if text.is_empty() {
        errors.add("text", REQUIRED_FIELD);
    }

    let submitted = form.slug.as_deref().map(str::trim).unwrap_or_default();
    let slug = if submitted.is_empty() {
        // An omitted slug is derived from the title; derivation can only be
        // attempted once the title itself validated.
        if title.is_empty() {
            None
        } else {
            match Slug::derive(&title) {
                Ok(slug) => Some(slug),
                Err(err) => {
                    errors.add("slug", err.to_string());
                    None
                }
            }
        }
    } else {
        match Slug::new(submitted) {
            Ok(slug) => Some(slug),
            Err(err) => {
                errors.add("slug", err.to_string());
                None
            }
        }
    };

    match (slug, errors.is_empty()) {
        (Some(slug), true) => Ok(ValidatedNote { title, text, slug }),
        _ => Err(errors),
    }
}

#[async_trait]
impl NotesService for NotesServiceImpl {
    async fn create_note(
        &self,
        author: &UserId,
        form: NoteForm,
    ) -> Result<FormOutcome<Note>, Error> {
        let validated = match validate_form(&form) {
            Ok(validated) => validated,
            Err(errors) => return Ok(FormOutcome::Rejected(errors)),
        };
        if let Some(errors) = self.ensure_slug_free(&validated.slug, None).await? {
            return Ok(FormOutcome::Rejected(errors));
        }

        let note = self
            .notes
            .insert(NewNote {
                title: validated.title,
                text: validated.text,
                slug: validated.slug,
                author: *author,
            })
            .await?;
        tracing::info!(slug = %note.slug, author = %note.author, "note created");
        Ok(FormOutcome::Accepted(note))
    }

    async fn list_notes(&self, author: &UserId) -> Result<Vec<Note>, Error> {
        Ok(self.notes.list_by_author(author).await?)
    }

    async fn note_detail(&self, requester: &UserId, slug: &str) -> Result<Note, Error> {
        self.owned_note(requester, slug).await
    }

    async fn update_note(
        &self,
        requester: &UserId,
        slug: &str,
        form: NoteForm,
    ) -> Result<FormOutcome<Note>, Error> {
        let note = self.owned_note(requester, slug).await?;
        let validated = match validate_form(&form) {
            Ok(validated) => validated,
            Err(errors) => return Ok(FormOutcome::Rejected(errors)),
        };
        if let Some(errors) = self
            .ensure_slug_free(&validated.slug, Some(note.id))
            .await?
        {
            return Ok(FormOutcome::Rejected(errors));
        }

        let updated = self
            .notes
            .update(
                note.id,
                NoteChanges {
                    title: validated.title,
                    text: validated.text,
                    slug: validated.slug,
                },
            )
            .await?;
        Ok(FormOutcome::Accepted(updated))
    }

    async fn delete_note(&self, requester: &UserId, slug: &str) -> Result<(), Error> {
        let note = self.owned_note(requester, slug).await?;
        self.notes.delete(note.id).await?;
        tracing::info!(slug = %note.slug, author = %note.author, "note deleted");
        Ok(())
    }
}
