//! Content of the note pages: list scoping and form seeding.

mod support;

use actix_web::http::StatusCode;
use actix_web::test;

use support::{authed_user, seed_note, spawn_app, test_pool};

#[actix_web::test]
async fn list_contains_only_the_requesters_notes() {
    let pool = test_pool();
    let app = spawn_app(&pool).await;
    let (author, author_cookie) = authed_user(&pool, &app, "author").await;
    let (reader, reader_cookie) = authed_user(&pool, &app, "reader").await;
    seed_note(&pool, author, "authors-note").await;
    seed_note(&pool, reader, "readers-note").await;

    let res = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/notes/")
            .cookie(author_cookie)
            .to_request(),
    )
    .await;
    let body: serde_json::Value = test::read_body_json(res).await;
    let slugs: Vec<&str> = body["notes"]
        .as_array()
        .expect("notes array")
        .iter()
        .map(|note| note["slug"].as_str().expect("slug"))
        .collect();
    assert_eq!(slugs, ["authors-note"]);

    let res = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/notes/")
            .cookie(reader_cookie)
            .to_request(),
    )
    .await;
    let body: serde_json::Value = test::read_body_json(res).await;
    let slugs: Vec<&str> = body["notes"]
        .as_array()
        .expect("notes array")
        .iter()
        .map(|note| note["slug"].as_str().expect("slug"))
        .collect();
    assert_eq!(slugs, ["readers-note"]);
}

#[actix_web::test]
async fn add_page_serves_an_empty_form() {
    let pool = test_pool();
    let app = spawn_app(&pool).await;
    let (_, cookie) = authed_user(&pool, &app, "author").await;

    let res = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/notes/add")
            .cookie(cookie)
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(res).await;
    assert_eq!(body["form"]["title"], "");
    assert_eq!(body["form"]["slug"], "");
}

#[actix_web::test]
async fn edit_page_is_seeded_with_the_stored_note() {
    let pool = test_pool();
    let app = spawn_app(&pool).await;
    let (author, cookie) = authed_user(&pool, &app, "author").await;
    seed_note(&pool, author, "note-slug").await;

    let res = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/notes/note-slug/edit")
            .cookie(cookie)
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(res).await;
    assert_eq!(body["form"]["title"], "Заголовок");
    assert_eq!(body["form"]["text"], "Текст заметки");
    assert_eq!(body["form"]["slug"], "note-slug");
}

#[actix_web::test]
async fn detail_page_shows_the_full_note() {
    let pool = test_pool();
    let app = spawn_app(&pool).await;
    let (author, cookie) = authed_user(&pool, &app, "author").await;
    seed_note(&pool, author, "note-slug").await;

    let res = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/notes/note-slug")
            .cookie(cookie)
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(res).await;
    assert_eq!(body["note"]["slug"], "note-slug");
    assert_eq!(body["note"]["text"], "Текст заметки");
}
