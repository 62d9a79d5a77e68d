//! SQLite-backed [`NoteRepository`] implementation using Diesel.

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;

use crate::domain::note::{NewNote, Note, NoteChanges};
use crate::domain::ports::{NoteRepository, PersistenceError};
use crate::domain::slug::Slug;
use crate::domain::user::UserId;

use super::models::{NewNoteRow, NoteRow};
use super::pool::DbPool;
use super::schema::notes;
use super::{map_diesel_error, run_blocking};

/// Diesel-backed implementation of the [`NoteRepository`] port.
#[derive(Clone)]
pub struct DieselNoteRepository {
    pool: DbPool,
}

impl DieselNoteRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NoteRepository for DieselNoteRepository {
    async fn insert(&self, note: NewNote) -> Result<Note, PersistenceError> {
        let pool = self.pool.clone();
        run_blocking(move || {
            let mut conn = pool.get()?;
            let row: NoteRow = diesel::insert_into(notes::table)
                .values(NewNoteRow::from_domain(note, Utc::now().naive_utc()))
                .get_result(&mut conn)
                .map_err(map_diesel_error)?;
            row.into_domain()
        })
        .await
    }

    async fn find_by_slug(&self, slug: &Slug) -> Result<Option<Note>, PersistenceError> {
        let pool = self.pool.clone();
        let slug = slug.as_ref().to_owned();
        run_blocking(move || {
            let mut conn = pool.get()?;
            notes::table
                .filter(notes::slug.eq(slug))
                .first::<NoteRow>(&mut conn)
                .optional()
                .map_err(map_diesel_error)?
                .map(NoteRow::into_domain)
                .transpose()
        })
        .await
    }

    async fn slug_taken(
        &self,
        slug: &Slug,
        exclude_id: Option<i32>,
    ) -> Result<bool, PersistenceError> {
        let pool = self.pool.clone();
        let slug = slug.as_ref().to_owned();
        run_blocking(move || {
            let mut conn = pool.get()?;
            let mut query = notes::table.filter(notes::slug.eq(slug)).into_boxed();
            if let Some(id) = exclude_id {
                query = query.filter(notes::id.ne(id));
            }
            let count: i64 = query
                .count()
                .get_result(&mut conn)
                .map_err(map_diesel_error)?;
            Ok(count > 0)
        })
        .await
    }

    async fn list_by_author(&self, author: &UserId) -> Result<Vec<Note>, PersistenceError> {
        let pool = self.pool.clone();
        let author = author.to_string();
        run_blocking(move || {
            let mut conn = pool.get()?;
            notes::table
                .filter(notes::author_id.eq(author))
                .order(notes::id.asc())
                .load::<NoteRow>(&mut conn)
                .map_err(map_diesel_error)?
                .into_iter()
                .map(NoteRow::into_domain)
                .collect()
        })
        .await
    }

    async fn update(&self, id: i32, changes: NoteChanges) -> Result<Note, PersistenceError> {
        let pool = self.pool.clone();
        run_blocking(move || {
            let mut conn = pool.get()?;
            let row: NoteRow = diesel::update(notes::table.find(id))
                .set((
                    notes::title.eq(changes.title),
                    notes::body.eq(changes.text),
                    notes::slug.eq(String::from(changes.slug)),
                ))
                .get_result(&mut conn)
                .map_err(map_diesel_error)?;
            row.into_domain()
        })
        .await
    }

    async fn delete(&self, id: i32) -> Result<(), PersistenceError> {
        let pool = self.pool.clone();
        run_blocking(move || {
            let mut conn = pool.get()?;
            diesel::delete(notes::table.find(id))
                .execute(&mut conn)
                .map_err(map_diesel_error)?;
            Ok(())
        })
        .await
    }
}
