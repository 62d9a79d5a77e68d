//! SQLite-backed [`CommentRepository`] implementation using Diesel.

use async_trait::async_trait;
use diesel::prelude::*;

use crate::domain::comment::{Comment, NewComment};
use crate::domain::ports::{CommentRepository, PersistenceError};

use super::models::{CommentRow, NewCommentRow};
use super::pool::DbPool;
use super::schema::comments;
use super::{map_diesel_error, run_blocking};

/// Diesel-backed implementation of the [`CommentRepository`] port.
#[derive(Clone)]
pub struct DieselCommentRepository {
    pool: DbPool,
}

impl DieselCommentRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for DieselCommentRepository {
    async fn insert(&self, comment: NewComment) -> Result<Comment, PersistenceError> {
        let pool = self.pool.clone();
        run_blocking(move || {
            let mut conn = pool.get()?;
            let row: CommentRow = diesel::insert_into(comments::table)
                .values(NewCommentRow::from(comment))
                .get_result(&mut conn)
                .map_err(map_diesel_error)?;
            row.into_domain()
        })
        .await
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Comment>, PersistenceError> {
        let pool = self.pool.clone();
        run_blocking(move || {
            let mut conn = pool.get()?;
            comments::table
                .find(id)
                .first::<CommentRow>(&mut conn)
                .optional()
                .map_err(map_diesel_error)?
                .map(CommentRow::into_domain)
                .transpose()
        })
        .await
    }

    async fn list_for_news(&self, news_id: i32) -> Result<Vec<Comment>, PersistenceError> {
        let pool = self.pool.clone();
        run_blocking(move || {
            let mut conn = pool.get()?;
            comments::table
                .filter(comments::news_id.eq(news_id))
                .order(comments::created.asc())
                .load::<CommentRow>(&mut conn)
                .map_err(map_diesel_error)?
                .into_iter()
                .map(CommentRow::into_domain)
                .collect()
        })
        .await
    }

    async fn update_text(&self, id: i32, text: String) -> Result<Comment, PersistenceError> {
        let pool = self.pool.clone();
        run_blocking(move || {
            let mut conn = pool.get()?;
            let row: CommentRow = diesel::update(comments::table.find(id))
                .set(comments::body.eq(text))
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
            diesel::delete(comments::table.find(id))
                .execute(&mut conn)
                .map_err(map_diesel_error)?;
            Ok(())
        })
        .await
    }
}
