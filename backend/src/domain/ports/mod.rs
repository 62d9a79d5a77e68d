//! Domain ports for the hexagonal boundary.
//!
//! Driven ports (repositories) are implemented by the persistence adapter;
//! driving ports (the three services) are implemented in the domain and
//! consumed by the HTTP adapter.

mod auth_service;
mod comment_repository;
mod news_repository;
mod news_service;
mod note_repository;
mod notes_service;
mod user_repository;

#[cfg(test)]
pub use auth_service::MockAuthService;
pub use auth_service::{AuthService, LOGIN_FAILED, LoginRejection, SignupForm};
#[cfg(test)]
pub use comment_repository::MockCommentRepository;
pub use comment_repository::CommentRepository;
#[cfg(test)]
pub use news_repository::MockNewsRepository;
pub use news_repository::NewsRepository;
#[cfg(test)]
pub use news_service::MockNewsService;
pub use news_service::{CommentForm, NewsPage, NewsService};
#[cfg(test)]
pub use note_repository::MockNoteRepository;
pub use note_repository::NoteRepository;
#[cfg(test)]
pub use notes_service::MockNotesService;
pub use notes_service::{NoteForm, NotesService};
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::UserRepository;

/// Persistence errors raised by repository adapters.
///
/// Repositories report failures in storage terms; the services translate
/// them into domain errors before they reach a handler.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PersistenceError {
    /// Repository connection could not be established.
    #[error("repository connection failed: {message}")]
    Connection { message: String },
    /// Query or mutation failed during execution.
    #[error("repository query failed: {message}")]
    Query { message: String },
    /// A unique index rejected the write (slug or username race).
    #[error("unique constraint violated: {message}")]
    UniqueViolation { message: String },
}

impl PersistenceError {
    /// Create a connection error with the given message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a query error with the given message.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }

    /// Create a unique-violation error with the given message.
    pub fn unique_violation(message: impl Into<String>) -> Self {
        Self::UniqueViolation {
            message: message.into(),
        }
    }
}

impl From<PersistenceError> for crate::domain::Error {
    fn from(err: PersistenceError) -> Self {
        match err {
            PersistenceError::Connection { message } | PersistenceError::Query { message } => {
                Self::internal(message)
            }
            // A unique race slipping past form validation is a genuine
            // concurrent-write conflict by the time it reaches the store.
            PersistenceError::UniqueViolation { message } => Self::conflict(message),
        }
    }
}
