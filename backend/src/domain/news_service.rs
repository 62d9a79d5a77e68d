//! News feed and comment use-cases.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::comment::{Comment, NewComment};
use crate::domain::forms::{FormErrors, FormOutcome, REQUIRED_FIELD};
use crate::domain::moderation::{find_banned_word, MODERATION_WARNING};
use crate::domain::news::NEWS_COUNT_ON_HOME_PAGE;
use crate::domain::ports::{CommentForm, CommentRepository, NewsPage, NewsRepository, NewsService};
use crate::domain::user::UserId;
use crate::domain::Error;

/// Message used when a news item is absent.
const NEWS_MISSING: &str = "news item not found";

/// Message used when a comment is absent or owned by somebody else.
const COMMENT_MISSING: &str = "comment not found";

/// [`NewsService`] implementation over the news and comment repositories.
#[derive(Clone)]
pub struct NewsServiceImpl {
    news: Arc<dyn NewsRepository>,
    comments: Arc<dyn CommentRepository>,
}

impl NewsServiceImpl {
    /// Create a new service backed by the given repositories.
    pub fn new(news: Arc<dyn NewsRepository>, comments: Arc<dyn CommentRepository>) -> Self {
        Self { news, comments }
    }

    /// Fetch the comment `id` only if `requester` authored it.
    ///
    /// Missing and foreign comments are reported identically as not found.
    async fn owned_comment(&self, requester: &UserId, id: i32) -> Result<Comment, Error> {
        let comment = self
            .comments
            .find_by_id(id)
            .await?
            .ok_or_else(|| Error::not_found(COMMENT_MISSING))?;
        if comment.author != *requester {
            return Err(Error::not_found(COMMENT_MISSING));
        }
        Ok(comment)
    }
}

/// Screen a raw comment form: presence, then the banned-word filter.
fn screen_comment(form: &CommentForm) -> Result<String, FormErrors> {
    let text = form.text.trim().to_owned();
    if text.is_empty() {
        return Err(FormErrors::field("text", REQUIRED_FIELD));
    }
    if let Some(word) = find_banned_word(&text) {
        tracing::debug!(word, "comment rejected by banned-word filter");
        return Err(FormErrors::field("text", MODERATION_WARNING));
    }
    Ok(text)
}

#[async_trait]
impl NewsService for NewsServiceImpl {
    async fn home_page(&self) -> Result<Vec<crate::domain::news::News>, Error> {
        Ok(self.news.list_newest(NEWS_COUNT_ON_HOME_PAGE).await?)
    }

    async fn news_detail(&self, id: i32) -> Result<NewsPage, Error> {
        let news = self
            .news
            .find_by_id(id)
            .await?
            .ok_or_else(|| Error::not_found(NEWS_MISSING))?;
        let comments = self.comments.list_for_news(news.id).await?;
        Ok(NewsPage { news, comments })
    }

    async fn create_comment(
        &self,
        author: &UserId,
        news_id: i32,
        form: CommentForm,
    ) -> Result<FormOutcome<Comment>, Error> {
        let news = self
            .news
            .find_by_id(news_id)
            .await?
            .ok_or_else(|| Error::not_found(NEWS_MISSING))?;
        let text = match screen_comment(&form) {
            Ok(text) => text,
            Err(errors) => return Ok(FormOutcome::Rejected(errors)),
        };

        let comment = self
            .comments
            .insert(NewComment {
                news_id: news.id,
                author: *author,
                text,
                created: Utc::now(),
            })
            .await?;
        tracing::info!(comment = comment.id, news = news.id, "comment created");
        Ok(FormOutcome::Accepted(comment))
    }

    async fn comment_for_author(&self, requester: &UserId, id: i32) -> Result<Comment, Error> {
        self.owned_comment(requester, id).await
    }

    async fn update_comment(
        &self,
        requester: &UserId,
        id: i32,
        form: CommentForm,
    ) -> Result<FormOutcome<Comment>, Error> {
        let comment = self.owned_comment(requester, id).await?;
        let text = match screen_comment(&form) {
            Ok(text) => text,
            Err(errors) => return Ok(FormOutcome::Rejected(errors)),
        };
        let updated = self.comments.update_text(comment.id, text).await?;
        Ok(FormOutcome::Accepted(updated))
    }

    async fn delete_comment(&self, requester: &UserId, id: i32) -> Result<Comment, Error> {
        let comment = self.owned_comment(requester, id).await?;
        self.comments.delete(comment.id).await?;
        tracing::info!(comment = comment.id, news = comment.news_id, "comment deleted");
        Ok(comment)
    }
}
