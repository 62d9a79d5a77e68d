//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic while allowing Actix
//! handlers to turn domain failures into consistent responses. Most codes
//! map to a JSON body and status; [`ErrorCode::LoginRequired`] instead
//! renders the login redirect a browser expects, carrying the originally
//! requested path in the `next` query parameter.

use actix_web::{http::header, http::StatusCode, HttpResponse, ResponseError};
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use tracing::error;

use crate::domain::{Error, ErrorCode};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

/// Path of the login page redirects point at.
pub const LOGIN_PATH: &str = "/auth/login";

/// Characters escaped when a path is embedded in the `next` query value.
const NEXT_VALUE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'%')
    .add(b'?')
    .add(b'&')
    .add(b'=')
    .add(b'+');

/// Build the login redirect target for an originally requested path.
pub(crate) fn login_redirect(next: &str) -> String {
    format!(
        "{LOGIN_PATH}?next={}",
        utf8_percent_encode(next, NEXT_VALUE)
    )
}

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::LoginRequired => StatusCode::FOUND,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::Conflict => StatusCode::CONFLICT,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn redact_if_internal(error: &Error) -> Error {
    if matches!(error.code(), ErrorCode::InternalError) {
        Error::internal("Internal server error")
    } else {
        error.clone()
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        if self.code() == ErrorCode::LoginRequired {
            let target = login_redirect(self.next().unwrap_or("/"));
            return HttpResponse::Found()
                .insert_header((header::LOCATION, target))
                .finish();
        }
        HttpResponse::build(self.status_code()).json(redact_if_internal(self))
    }
}

impl From<actix_web::Error> for Error {
    fn from(err: actix_web::Error) -> Self {
        // Do not leak implementation details to clients.
        error!(error = %err, "actix error promoted to domain error");
        Error::internal("Internal server error")
    }
}
