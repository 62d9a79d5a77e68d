//! News aggregate and home-page sizing.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Number of news items shown on the home page.
///
/// The feed is truncated to this many rows, newest first; older items are
/// simply absent from the page.
pub const NEWS_COUNT_ON_HOME_PAGE: i64 = 10;

/// Published news item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct News {
    /// Stable identifier used in detail routes.
    pub id: i32,
    /// Headline.
    pub title: String,
    /// Article body.
    pub text: String,
    /// Publication timestamp; orders the home page descending.
    pub date: DateTime<Utc>,
}

/// Payload for inserting a news item (editorial tooling and fixtures).
#[derive(Debug, Clone)]
pub struct NewNews {
    /// Headline.
    pub title: String,
    /// Article body.
    pub text: String,
    /// Publication timestamp.
    pub date: DateTime<Utc>,
}
