//! Shared fixtures for handler unit tests.

use actix_session::{storage::CookieSessionStore, SessionMiddleware};
use actix_web::cookie::Key;

/// Session middleware for test apps: throwaway key, plain-HTTP cookie.
///
/// The cookie name matches production (`session`) so helpers that pluck
/// the cookie out of a response work against either configuration.
pub fn test_session_middleware() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name("session".to_owned())
        .cookie_secure(false)
        .build()
}
