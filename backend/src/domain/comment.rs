//! Comment aggregate.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::user::UserId;

/// Reader comment attached to a news item.
///
/// ## Invariants
/// - `created` determines display order on the detail page (ascending).
/// - Edit and delete are permitted only when the requester is `author`; the
///   service masks everything else as not found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    /// Stable identifier used in edit/delete routes.
    pub id: i32,
    /// News item this comment belongs to.
    pub news_id: i32,
    /// Commenting user.
    #[serde(skip)]
    pub author: UserId,
    /// Comment body, already screened by the banned-word filter.
    pub text: String,
    /// Creation timestamp.
    pub created: DateTime<Utc>,
}

/// Payload for inserting a comment.
#[derive(Debug, Clone)]
pub struct NewComment {
    /// News item the comment belongs to.
    pub news_id: i32,
    /// Commenting user.
    pub author: UserId,
    /// Screened comment body.
    pub text: String,
    /// Creation timestamp; fixtures may backdate or forward-date it.
    pub created: DateTime<Utc>,
}
