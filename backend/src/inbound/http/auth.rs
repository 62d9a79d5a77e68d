//! Account handlers: signup, login, logout.
//!
//! ```text
//! POST /auth/signup {"username":"reader","password":"s3cret"}
//! POST /auth/login  {"username":"reader","password":"s3cret","next":"/notes/"}
//! POST /auth/logout
//! ```

use actix_web::{get, post, web, HttpResponse};
use serde::Deserialize;
use serde_json::json;

use crate::domain::auth::{LoginCredentials, LoginValidationError};
use crate::domain::forms::REQUIRED_FIELD;
use crate::domain::ports::SignupForm;
use crate::domain::{FormErrors, FormOutcome};

use super::error::LOGIN_PATH;
use super::session::SessionContext;
use super::state::HttpState;
use super::{form_rejected, redirect_to, ApiResult};

/// Signup request body for `POST /auth/signup`.
#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub username: String,
    pub password: String,
}

/// Login request body for `POST /auth/login`.
///
/// `next` echoes the query parameter the login redirect carried; it is only
/// followed when it names a local path.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub next: Option<String>,
}

/// Pick the post-login redirect target, refusing anything non-local.
fn safe_next(next: Option<&str>) -> &str {
    match next {
        Some(next) if next.starts_with('/') && !next.starts_with("//") => next,
        _ => "/",
    }
}

fn login_field_errors(err: LoginValidationError) -> FormErrors {
    match err {
        LoginValidationError::EmptyUsername => FormErrors::field("username", REQUIRED_FIELD),
        LoginValidationError::EmptyPassword => FormErrors::field("password", REQUIRED_FIELD),
    }
}

/// Serve the empty signup form.
#[get("/auth/signup")]
pub async fn signup_form() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "form": { "username": "", "password": "" } }))
}

/// Register a new account and send the user to the login page.
#[post("/auth/signup")]
pub async fn signup(
    state: web::Data<HttpState>,
    payload: web::Json<SignupRequest>,
) -> ApiResult<HttpResponse> {
    let payload = payload.into_inner();
    let outcome = state
        .auth
        .signup(SignupForm {
            username: payload.username,
            password: payload.password,
        })
        .await?;
    match outcome {
        FormOutcome::Accepted(_) => Ok(redirect_to(LOGIN_PATH)),
        FormOutcome::Rejected(errors) => Ok(form_rejected(&errors)),
    }
}

/// Serve the empty login form.
#[get("/auth/login")]
pub async fn login_form() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "form": { "username": "", "password": "" } }))
}

/// Check credentials and establish a session.
#[post("/auth/login")]
pub async fn login(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<LoginRequest>,
) -> ApiResult<HttpResponse> {
    let payload = payload.into_inner();
    let credentials = match LoginCredentials::try_from_parts(&payload.username, &payload.password)
    {
        Ok(credentials) => credentials,
        Err(err) => return Ok(form_rejected(&login_field_errors(err))),
    };
    match state.auth.login(&credentials).await? {
        FormOutcome::Accepted(id) => {
            session.persist_user(&id)?;
            Ok(redirect_to(safe_next(payload.next.as_deref())))
        }
        FormOutcome::Rejected(errors) => Ok(form_rejected(&errors)),
    }
}

/// Drop the session and send the user home.
#[post("/auth/logout")]
pub async fn logout(session: SessionContext) -> HttpResponse {
    session.clear();
    redirect_to("/")
}
