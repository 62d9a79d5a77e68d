//! SQLite persistence adapter built on Diesel.
//!
//! Each repository implements one driven port over a shared [`DbPool`].
//! Diesel's SQLite backend is synchronous, so every port method moves its
//! query onto the Tokio blocking pool via [`run_blocking`].

mod diesel_comment_repository;
mod diesel_news_repository;
mod diesel_note_repository;
mod diesel_user_repository;
mod models;
pub mod pool;
pub mod schema;

pub use diesel_comment_repository::DieselCommentRepository;
pub use diesel_news_repository::DieselNewsRepository;
pub use diesel_note_repository::DieselNoteRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use pool::{DbPool, PoolConfig, PoolError, MIGRATIONS};

use crate::domain::ports::PersistenceError;

/// Run a synchronous Diesel closure on the blocking pool.
pub(crate) async fn run_blocking<T, F>(op: F) -> Result<T, PersistenceError>
where
    F: FnOnce() -> Result<T, PersistenceError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(op)
        .await
        .map_err(|err| PersistenceError::query(format!("blocking task failed: {err}")))?
}

/// Map a Diesel error to the port's error type.
///
/// Unique-index rejections keep their own variant so services can tell a
/// write race apart from a broken query.
pub(crate) fn map_diesel_error(err: diesel::result::Error) -> PersistenceError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match err {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
            PersistenceError::unique_violation(info.message().to_owned())
        }
        other => PersistenceError::query(other.to_string()),
    }
}
