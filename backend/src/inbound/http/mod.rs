//! HTTP inbound adapter exposing the notes and news applications.
//!
//! Bodies are JSON. Pages the original surface rendered as HTML forms are
//! JSON documents here: a failed validation re-renders with a success status
//! and an `errors` map, a successful mutation answers with a browser-style
//! 302 redirect.

pub mod auth;
pub mod error;
pub mod news;
pub mod notes;
pub mod session;
pub mod state;
#[cfg(test)]
pub mod test_utils;

pub use error::ApiResult;

use actix_web::http::header;
use actix_web::HttpResponse;

use crate::domain::FormErrors;

/// Re-render a rejected form: 200 with field-scoped errors, nothing written.
pub(crate) fn form_rejected(errors: &FormErrors) -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({ "errors": errors }))
}

/// Browser-style redirect issued after a successful mutation.
pub(crate) fn redirect_to(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, location))
        .finish()
}
