//! News handlers: the public feed and detail, and the comment thread.
//!
//! The feed and detail pages are public. Commenting requires authentication;
//! editing or deleting a comment additionally requires authorship, which the
//! service masks as not found.

use actix_web::{get, post, web, HttpResponse};
use serde::Deserialize;
use serde_json::json;

use crate::domain::comment::Comment;
use crate::domain::ports::CommentForm;
use crate::domain::FormOutcome;

use super::session::{CurrentUser, SessionContext};
use super::state::HttpState;
use super::{form_rejected, redirect_to, ApiResult};

/// Comment form body for create and edit.
#[derive(Debug, Deserialize)]
pub struct CommentRequest {
    pub text: String,
}

/// Redirect target after a comment mutation: back to the thread.
fn thread_anchor(news_id: i32) -> String {
    format!("/news/{news_id}#comments")
}

/// The ten newest news items.
#[get("/")]
pub async fn home_page(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let news = state.news.home_page().await?;
    Ok(HttpResponse::Ok().json(json!({ "news": news })))
}

/// A news item with its comment thread, oldest comment first.
///
/// The empty comment form is included only for authenticated readers, so a
/// page can tell whether to offer commenting at all.
#[get("/news/{id}")]
pub async fn news_detail(
    state: web::Data<HttpState>,
    session: SessionContext,
    id: web::Path<i32>,
) -> ApiResult<HttpResponse> {
    let page = state.news.news_detail(*id).await?;
    let mut body = json!({ "news": page.news, "comments": page.comments });
    if session.user_id()?.is_some() {
        body["commentForm"] = json!({ "text": "" });
    }
    Ok(HttpResponse::Ok().json(body))
}

/// Attach a comment to a news item.
#[post("/news/{id}/comments")]
pub async fn add_comment(
    state: web::Data<HttpState>,
    user: CurrentUser,
    id: web::Path<i32>,
    payload: web::Json<CommentRequest>,
) -> ApiResult<HttpResponse> {
    let form = CommentForm {
        text: payload.into_inner().text,
    };
    match state.news.create_comment(&user.0, *id, form).await? {
        FormOutcome::Accepted(comment) => Ok(redirect_to(&thread_anchor(comment.news_id))),
        FormOutcome::Rejected(errors) => Ok(form_rejected(&errors)),
    }
}

/// Serve the edit form seeded with the stored comment.
#[get("/comments/{id}/edit")]
pub async fn edit_comment_form(
    state: web::Data<HttpState>,
    user: CurrentUser,
    id: web::Path<i32>,
) -> ApiResult<HttpResponse> {
    let comment: Comment = state.news.comment_for_author(&user.0, *id).await?;
    Ok(HttpResponse::Ok().json(json!({ "form": comment })))
}

/// Apply an edit to one of the requester's comments.
#[post("/comments/{id}/edit")]
pub async fn edit_comment(
    state: web::Data<HttpState>,
    user: CurrentUser,
    id: web::Path<i32>,
    payload: web::Json<CommentRequest>,
) -> ApiResult<HttpResponse> {
    let form = CommentForm {
        text: payload.into_inner().text,
    };
    match state.news.update_comment(&user.0, *id, form).await? {
        FormOutcome::Accepted(comment) => Ok(redirect_to(&thread_anchor(comment.news_id))),
        FormOutcome::Rejected(errors) => Ok(form_rejected(&errors)),
    }
}

/// Serve the delete confirmation for one of the requester's comments.
#[get("/comments/{id}/delete")]
pub async fn delete_comment_confirm(
    state: web::Data<HttpState>,
    user: CurrentUser,
    id: web::Path<i32>,
) -> ApiResult<HttpResponse> {
    let comment = state.news.comment_for_author(&user.0, *id).await?;
    Ok(HttpResponse::Ok().json(json!({ "comment": comment })))
}

/// Delete one of the requester's comments.
#[post("/comments/{id}/delete")]
pub async fn delete_comment(
    state: web::Data<HttpState>,
    user: CurrentUser,
    id: web::Path<i32>,
) -> ApiResult<HttpResponse> {
    let removed = state.news.delete_comment(&user.0, *id).await?;
    Ok(redirect_to(&thread_anchor(removed.news_id)))
}
