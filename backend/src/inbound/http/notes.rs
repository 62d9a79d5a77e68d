//! Note handlers: the author-scoped list, create, detail, edit, delete.
//!
//! Every route here requires authentication via [`CurrentUser`]; detail,
//! edit, and delete additionally require ownership, which the service masks
//! as not found.

use actix_web::{get, post, web, HttpResponse};
use serde::Deserialize;
use serde_json::json;

use crate::domain::ports::NoteForm;
use crate::domain::FormOutcome;

use super::session::CurrentUser;
use super::state::HttpState;
use super::{form_rejected, redirect_to, ApiResult};

/// Redirect target after a successful note mutation.
const DONE_PATH: &str = "/notes/done";

/// Note form body for create and edit.
#[derive(Debug, Deserialize)]
pub struct NoteRequest {
    pub title: String,
    pub text: String,
    #[serde(default)]
    pub slug: Option<String>,
}

impl From<NoteRequest> for NoteForm {
    fn from(value: NoteRequest) -> Self {
        Self {
            title: value.title,
            text: value.text,
            slug: value.slug,
        }
    }
}

/// List the requester's notes.
#[get("/notes/")]
pub async fn list_notes(
    state: web::Data<HttpState>,
    user: CurrentUser,
) -> ApiResult<HttpResponse> {
    let notes = state.notes.list_notes(&user.0).await?;
    Ok(HttpResponse::Ok().json(json!({ "notes": notes })))
}

/// Serve the empty note form.
#[get("/notes/add")]
pub async fn add_note_form(_user: CurrentUser) -> HttpResponse {
    HttpResponse::Ok().json(json!({ "form": { "title": "", "text": "", "slug": "" } }))
}

/// Create a note for the requester.
#[post("/notes/add")]
pub async fn add_note(
    state: web::Data<HttpState>,
    user: CurrentUser,
    payload: web::Json<NoteRequest>,
) -> ApiResult<HttpResponse> {
    match state
        .notes
        .create_note(&user.0, payload.into_inner().into())
        .await?
    {
        FormOutcome::Accepted(_) => Ok(redirect_to(DONE_PATH)),
        FormOutcome::Rejected(errors) => Ok(form_rejected(&errors)),
    }
}

/// Acknowledge a completed note mutation.
#[get("/notes/done")]
pub async fn note_done(_user: CurrentUser) -> HttpResponse {
    HttpResponse::Ok().json(json!({ "detail": "done" }))
}

/// Show one of the requester's notes.
#[get("/notes/{slug}")]
pub async fn note_detail(
    state: web::Data<HttpState>,
    user: CurrentUser,
    slug: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let note = state.notes.note_detail(&user.0, &slug).await?;
    Ok(HttpResponse::Ok().json(json!({ "note": note })))
}

/// Serve the edit form seeded with the stored note.
#[get("/notes/{slug}/edit")]
pub async fn edit_note_form(
    state: web::Data<HttpState>,
    user: CurrentUser,
    slug: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let note = state.notes.note_detail(&user.0, &slug).await?;
    Ok(HttpResponse::Ok().json(json!({ "form": note })))
}

/// Apply a full edit to one of the requester's notes.
#[post("/notes/{slug}/edit")]
pub async fn edit_note(
    state: web::Data<HttpState>,
    user: CurrentUser,
    slug: web::Path<String>,
    payload: web::Json<NoteRequest>,
) -> ApiResult<HttpResponse> {
    match state
        .notes
        .update_note(&user.0, &slug, payload.into_inner().into())
        .await?
    {
        FormOutcome::Accepted(_) => Ok(redirect_to(DONE_PATH)),
        FormOutcome::Rejected(errors) => Ok(form_rejected(&errors)),
    }
}

/// Serve the delete confirmation for one of the requester's notes.
#[get("/notes/{slug}/delete")]
pub async fn delete_note_confirm(
    state: web::Data<HttpState>,
    user: CurrentUser,
    slug: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let note = state.notes.note_detail(&user.0, &slug).await?;
    Ok(HttpResponse::Ok().json(json!({ "note": note })))
}

/// Delete one of the requester's notes.
#[post("/notes/{slug}/delete")]
pub async fn delete_note(
    state: web::Data<HttpState>,
    user: CurrentUser,
    slug: web::Path<String>,
) -> ApiResult<HttpResponse> {
    state.notes.delete_note(&user.0, &slug).await?;
    Ok(redirect_to(DONE_PATH))
}
