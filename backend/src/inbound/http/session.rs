//! Cookie-session plumbing for the HTTP layer.
//!
//! [`SessionContext`] hides the raw Actix session behind domain-typed
//! operations. [`CurrentUser`] marks a handler as login-gated: anonymous
//! requests are answered with a redirect to the login page (carrying the
//! requested path as `next`) before the handler body runs.

use actix_session::Session;
use actix_web::{dev::Payload, FromRequest, HttpRequest};
use futures_util::future::LocalBoxFuture;

use crate::domain::user::UserId;
use crate::domain::Error;

pub(crate) const USER_ID_KEY: &str = "user_id";

/// Domain-typed view of the request session.
#[derive(Clone)]
pub struct SessionContext(Session);

impl SessionContext {
    pub fn new(session: Session) -> Self {
        Self(session)
    }

    /// Record the logged-in user in the session cookie.
    pub fn persist_user(&self, user_id: &UserId) -> Result<(), Error> {
        self.0
            .insert(USER_ID_KEY, user_id.to_string())
            .map_err(|error| Error::internal(format!("session write failed: {error}")))
    }

    /// The requester's identity, if the session carries a valid one.
    ///
    /// A cookie holding a malformed id is treated as anonymous rather than
    /// an error, so a stale or tampered cookie degrades to a fresh login.
    pub fn user_id(&self) -> Result<Option<UserId>, Error> {
        let stored = self
            .0
            .get::<String>(USER_ID_KEY)
            .map_err(|error| Error::internal(format!("session read failed: {error}")))?;
        let Some(raw) = stored else {
            return Ok(None);
        };
        match UserId::new(raw) {
            Ok(id) => Ok(Some(id)),
            Err(error) => {
                tracing::warn!("discarding malformed session user id: {error}");
                Ok(None)
            }
        }
    }

    /// Drop the session entirely, removing the cookie.
    pub fn clear(&self) {
        self.0.purge();
    }
}

impl FromRequest for SessionContext {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let session = Session::from_request(req, payload);
        Box::pin(async move { session.await.map(SessionContext::new) })
    }
}

/// The authenticated requester, resolved from the session cookie.
///
/// Extraction fails with [`crate::domain::ErrorCode::LoginRequired`] carrying
/// the requested path, which the error mapping renders as the login redirect.
#[derive(Debug, Clone, Copy)]
pub struct CurrentUser(pub UserId);

impl FromRequest for CurrentUser {
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let session = Session::from_request(req, payload);
        let next = req
            .uri()
            .path_and_query()
            .map_or_else(|| req.uri().path().to_owned(), |pq| pq.as_str().to_owned());
        Box::pin(async move {
            let session = session
                .await
                .map_err(|error| Error::internal(format!("session middleware missing: {error}")))?;
            match SessionContext::new(session).user_id()? {
                Some(id) => Ok(CurrentUser(id)),
                None => Err(Error::login_required(next)),
            }
        })
    }
}
