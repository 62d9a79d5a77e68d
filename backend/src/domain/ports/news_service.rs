//! Driving port for the public news feed and its comments.

use async_trait::async_trait;

use crate::domain::comment::Comment;
use crate::domain::forms::FormOutcome;
use crate::domain::news::News;
use crate::domain::user::UserId;
use crate::domain::Error;

/// Raw comment form submission.
#[derive(Debug, Clone, Default)]
pub struct CommentForm {
    /// Submitted comment body.
    pub text: String,
}

/// A news item together with its comment thread, oldest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsPage {
    /// The news item.
    pub news: News,
    /// Comments ordered by creation time ascending.
    pub comments: Vec<Comment>,
}

/// Driving port for the news application.
///
/// # Ownership
///
/// Comment edit and delete take the requesting user and mask ownership
/// denial as [`crate::domain::ErrorCode::NotFound`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NewsService: Send + Sync {
    /// The newest items for the home page, capped at the configured size.
    async fn home_page(&self) -> Result<Vec<News>, Error>;

    /// A news item and its full comment thread.
    async fn news_detail(&self, id: i32) -> Result<NewsPage, Error>;

    /// Screen and attach a comment to the news item `news_id`.
    ///
    /// Text containing a banned word rejects the form with the fixed warning
    /// and writes nothing.
    async fn create_comment(
        &self,
        author: &UserId,
        news_id: i32,
        form: CommentForm,
    ) -> Result<FormOutcome<Comment>, Error>;

    /// The comment `id`, if `requester` authored it. Seeds the edit form.
    async fn comment_for_author(&self, requester: &UserId, id: i32) -> Result<Comment, Error>;

    /// Screen and apply an edit to the comment `id`.
    ///
    /// On rejection the stored comment keeps its previous text, news
    /// reference, author, and timestamp.
    async fn update_comment(
        &self,
        requester: &UserId,
        id: i32,
        form: CommentForm,
    ) -> Result<FormOutcome<Comment>, Error>;

    /// Delete the comment `id`, returning the deleted row so the caller can
    /// redirect back to its news item.
    async fn delete_comment(&self, requester: &UserId, id: i32) -> Result<Comment, Error>;
}
