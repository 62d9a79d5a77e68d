//! Driven port for comment persistence.

use async_trait::async_trait;

use crate::domain::comment::{Comment, NewComment};

use super::PersistenceError;

/// Storage contract for comments.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Insert a comment and return the stored row.
    async fn insert(&self, comment: NewComment) -> Result<Comment, PersistenceError>;

    /// Fetch a comment by id regardless of owner.
    async fn find_by_id(&self, id: i32) -> Result<Option<Comment>, PersistenceError>;

    /// All comments on a news item, ordered by creation time ascending.
    async fn list_for_news(&self, news_id: i32) -> Result<Vec<Comment>, PersistenceError>;

    /// Replace a comment's text, leaving every other field untouched.
    async fn update_text(&self, id: i32, text: String) -> Result<Comment, PersistenceError>;

    /// Delete a comment by id.
    async fn delete(&self, id: i32) -> Result<(), PersistenceError>;
}
