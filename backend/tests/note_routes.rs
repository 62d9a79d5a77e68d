//! Availability of the note routes: who reaches which page, and where
//! everybody else ends up.

mod support;

use actix_web::http::StatusCode;
use actix_web::test;
use rstest::rstest;

use support::{authed_user, location, seed_note, spawn_app, test_pool};

#[rstest]
#[case("/notes/")]
#[case("/notes/add")]
#[case("/notes/done")]
#[case("/notes/note-slug")]
#[case("/notes/note-slug/edit")]
#[case("/notes/note-slug/delete")]
#[actix_web::test]
async fn anonymous_requests_redirect_to_login_with_next(#[case] path: &str) {
    let pool = test_pool();
    let app = spawn_app(&pool).await;

    let res = test::call_service(&app, test::TestRequest::get().uri(path).to_request()).await;

    assert_eq!(res.status(), StatusCode::FOUND);
    assert_eq!(location(&res), format!("/auth/login?next={path}"));
}

#[rstest]
#[case("/notes/")]
#[case("/notes/add")]
#[case("/notes/done")]
#[actix_web::test]
async fn authenticated_pages_answer_ok(#[case] path: &str) {
    let pool = test_pool();
    let app = spawn_app(&pool).await;
    let (_, cookie) = authed_user(&pool, &app, "reader").await;

    let res = test::call_service(
        &app,
        test::TestRequest::get().uri(path).cookie(cookie).to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::OK);
}

#[rstest]
#[case("/notes/note-slug")]
#[case("/notes/note-slug/edit")]
#[case("/notes/note-slug/delete")]
#[actix_web::test]
async fn owned_note_pages_answer_ok_for_the_author(#[case] path: &str) {
    let pool = test_pool();
    let app = spawn_app(&pool).await;
    let (author, cookie) = authed_user(&pool, &app, "author").await;
    seed_note(&pool, author, "note-slug").await;

    let res = test::call_service(
        &app,
        test::TestRequest::get().uri(path).cookie(cookie).to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::OK);
}

#[rstest]
#[case("/notes/note-slug")]
#[case("/notes/note-slug/edit")]
#[case("/notes/note-slug/delete")]
#[actix_web::test]
async fn foreign_note_pages_are_not_found(#[case] path: &str) {
    let pool = test_pool();
    let app = spawn_app(&pool).await;
    let (author, _) = authed_user(&pool, &app, "author").await;
    seed_note(&pool, author, "note-slug").await;
    let (_, reader_cookie) = authed_user(&pool, &app, "reader").await;

    let res = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(path)
            .cookie(reader_cookie)
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn missing_slug_is_not_found_for_everyone() {
    let pool = test_pool();
    let app = spawn_app(&pool).await;
    let (_, cookie) = authed_user(&pool, &app, "reader").await;

    let res = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/notes/never-created")
            .cookie(cookie)
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}
