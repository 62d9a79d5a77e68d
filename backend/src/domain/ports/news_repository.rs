//! Driven port for news persistence.

use async_trait::async_trait;

use crate::domain::news::{NewNews, News};

use super::PersistenceError;

/// Storage contract for news items.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NewsRepository: Send + Sync {
    /// Insert a news item and return the stored row.
    ///
    /// Reached by editorial tooling and test fixtures; the public HTTP
    /// surface only reads news.
    async fn insert(&self, news: NewNews) -> Result<News, PersistenceError>;

    /// Fetch a news item by id.
    async fn find_by_id(&self, id: i32) -> Result<Option<News>, PersistenceError>;

    /// The `limit` newest items by publication date, descending.
    async fn list_newest(&self, limit: i64) -> Result<Vec<News>, PersistenceError>;
}
