//! Driven port for user persistence.

use async_trait::async_trait;

use crate::domain::user::{User, UserId, Username};

use super::PersistenceError;

/// Storage contract for registered users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user record.
    async fn insert(&self, user: User) -> Result<(), PersistenceError>;

    /// Fetch a user by login name.
    async fn find_by_username(&self, username: &Username)
    -> Result<Option<User>, PersistenceError>;

    /// Fetch a user by identifier.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, PersistenceError>;
}
