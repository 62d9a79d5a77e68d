//! Domain model and use-cases for the notes and news applications.
//!
//! Purpose: Define the strongly typed entities, the ports at the hexagonal
//! boundary, and the service implementations that carry the business rules
//! (slug derivation, ownership masking, comment moderation). Adapters depend
//! on this module; it depends on nothing outside the domain.
//!
//! Public surface:
//! - Error / ErrorCode — transport-agnostic failure payload.
//! - FormErrors / FormOutcome — field-scoped validation results.
//! - User, Note, News, Comment — the four aggregates.
//! - ports — repository and service traits at the boundary.
//! - AuthServiceImpl, NotesServiceImpl, NewsServiceImpl — driving-port
//!   implementations wired by the server.

pub mod auth;
mod auth_service;
pub mod comment;
pub mod error;
pub mod forms;
pub mod moderation;
pub mod news;
mod news_service;
pub mod note;
mod notes_service;
pub mod ports;
pub mod slug;
pub mod user;

pub use self::auth_service::AuthServiceImpl;
pub use self::error::{Error, ErrorCode};
pub use self::forms::{FormErrors, FormOutcome};
pub use self::news_service::NewsServiceImpl;
pub use self::notes_service::NotesServiceImpl;

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use backend::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::not_found("nope"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
