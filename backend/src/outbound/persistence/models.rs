//! Row types mapping Diesel query results to domain aggregates.
//!
//! Timestamps are stored naive and interpreted as UTC; identifiers and slugs
//! are stored as text and re-validated on the way out so a corrupted row
//! surfaces as a query error instead of a bad domain value.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::auth::PasswordDigest;
use crate::domain::comment::{Comment, NewComment};
use crate::domain::news::{NewNews, News};
use crate::domain::note::{NewNote, Note};
use crate::domain::ports::PersistenceError;
use crate::domain::slug::Slug;
use crate::domain::user::{User, UserId, Username};

use super::schema::{comments, news, notes, users};

/// Stored user record.
#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct UserRow {
    pub id: String,
    pub username: String,
    pub password_hash: String,
    pub created_at: NaiveDateTime,
}

impl UserRow {
    /// Convert to the domain aggregate, re-validating stored fields.
    pub fn into_domain(self) -> Result<User, PersistenceError> {
        let id = UserId::new(&self.id)
            .map_err(|err| PersistenceError::query(format!("bad user id {:?}: {err}", self.id)))?;
        let username = Username::new(self.username)
            .map_err(|err| PersistenceError::query(format!("bad username: {err}")))?;
        Ok(User {
            id,
            username,
            password: PasswordDigest::from_phc(self.password_hash),
        })
    }
}

/// Insert payload for `users`.
#[derive(Debug, Insertable)]
#[diesel(table_name = users)]
pub struct NewUserRow {
    pub id: String,
    pub username: String,
    pub password_hash: String,
    pub created_at: NaiveDateTime,
}

impl NewUserRow {
    pub fn from_domain(user: User, created_at: NaiveDateTime) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username.into(),
            password_hash: user.password.as_ref().to_owned(),
            created_at,
        }
    }
}

/// Stored note record.
#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = notes)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct NoteRow {
    pub id: i32,
    pub title: String,
    pub body: String,
    pub slug: String,
    pub author_id: String,
    pub created_at: NaiveDateTime,
}

impl NoteRow {
    /// Convert to the domain aggregate, re-validating stored fields.
    pub fn into_domain(self) -> Result<Note, PersistenceError> {
        let slug = Slug::new(self.slug)
            .map_err(|err| PersistenceError::query(format!("bad slug in note row: {err}")))?;
        let author = UserId::new(&self.author_id).map_err(|err| {
            PersistenceError::query(format!("bad author id {:?}: {err}", self.author_id))
        })?;
        Ok(Note {
            id: self.id,
            title: self.title,
            text: self.body,
            slug,
            author,
            created_at: self.created_at.and_utc(),
        })
    }
}

/// Insert payload for `notes`.
#[derive(Debug, Insertable)]
#[diesel(table_name = notes)]
pub struct NewNoteRow {
    pub title: String,
    pub body: String,
    pub slug: String,
    pub author_id: String,
    pub created_at: NaiveDateTime,
}

impl NewNoteRow {
    pub fn from_domain(note: NewNote, created_at: NaiveDateTime) -> Self {
        Self {
            title: note.title,
            body: note.text,
            slug: note.slug.into(),
            author_id: note.author.to_string(),
            created_at,
        }
    }
}

/// Stored news record.
#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = news)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct NewsRow {
    pub id: i32,
    pub title: String,
    pub body: String,
    pub date: NaiveDateTime,
}

impl NewsRow {
    pub fn into_domain(self) -> News {
        News {
            id: self.id,
            title: self.title,
            text: self.body,
            date: self.date.and_utc(),
        }
    }
}

/// Insert payload for `news`.
#[derive(Debug, Insertable)]
#[diesel(table_name = news)]
pub struct NewNewsRow {
    pub title: String,
    pub body: String,
    pub date: NaiveDateTime,
}

impl From<NewNews> for NewNewsRow {
    fn from(news: NewNews) -> Self {
        Self {
            title: news.title,
            body: news.text,
            date: news.date.naive_utc(),
        }
    }
}

/// Stored comment record.
#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = comments)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CommentRow {
    pub id: i32,
    pub news_id: i32,
    pub author_id: String,
    pub body: String,
    pub created: NaiveDateTime,
}

impl CommentRow {
    /// Convert to the domain aggregate, re-validating the author id.
    pub fn into_domain(self) -> Result<Comment, PersistenceError> {
        let author = UserId::new(&self.author_id).map_err(|err| {
            PersistenceError::query(format!("bad author id {:?}: {err}", self.author_id))
        })?;
        Ok(Comment {
            id: self.id,
            news_id: self.news_id,
            author,
            text: self.body,
            created: self.created.and_utc(),
        })
    }
}

/// Insert payload for `comments`.
#[derive(Debug, Insertable)]
#[diesel(table_name = comments)]
pub struct NewCommentRow {
    pub news_id: i32,
    pub author_id: String,
    pub body: String,
    pub created: NaiveDateTime,
}

impl From<NewComment> for NewCommentRow {
    fn from(comment: NewComment) -> Self {
        Self {
            news_id: comment.news_id,
            author_id: comment.author.to_string(),
            body: comment.text,
            created: comment.created.naive_utc(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn note_row_round_trips_timestamps_as_utc() {
        let now = Utc::now();
        let row = NoteRow {
            id: 1,
            title: "Заголовок".to_owned(),
            body: "Текст заметки".to_owned(),
            slug: "note-slug".to_owned(),
            author_id: UserId::random().to_string(),
            created_at: now.naive_utc(),
        };
        let note = row.into_domain().expect("valid row");
        assert_eq!(note.created_at, now);
        assert_eq!(note.text, "Текст заметки");
    }

    #[test]
    fn corrupt_author_id_is_a_query_error() {
        let row = CommentRow {
            id: 1,
            news_id: 1,
            author_id: "not-a-uuid".to_owned(),
            body: "Текст комментария".to_owned(),
            created: Utc::now().naive_utc(),
        };
        let err = row.into_domain().expect_err("corrupt row must fail");
        assert!(matches!(err, PersistenceError::Query { .. }));
    }

    #[test]
    fn user_row_preserves_the_stored_digest() {
        let digest = PasswordDigest::digest("s3cret").expect("digest");
        let row = UserRow {
            id: UserId::random().to_string(),
            username: "reader".to_owned(),
            password_hash: digest.as_ref().to_owned(),
            created_at: Utc::now().naive_utc(),
        };
        let user = row.into_domain().expect("valid row");
        assert!(user.password.verify("s3cret"));
    }
}
