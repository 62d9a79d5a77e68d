//! Availability of the news and comment routes.

mod support;

use actix_web::http::StatusCode;
use actix_web::test;
use chrono::Utc;
use rstest::rstest;

use support::{
    authed_user, location, seed_comment, seed_news, spawn_app, test_pool,
};

#[actix_web::test]
async fn home_page_is_public() {
    let pool = test_pool();
    let app = spawn_app(&pool).await;
    seed_news(&pool, "Новость", Utc::now()).await;

    let res = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    assert_eq!(res.status(), StatusCode::OK);
}

#[actix_web::test]
async fn detail_page_is_public() {
    let pool = test_pool();
    let app = spawn_app(&pool).await;
    let item = seed_news(&pool, "Новость", Utc::now()).await;

    let res = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/news/{}", item.id))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
}

#[actix_web::test]
async fn missing_news_is_not_found() {
    let pool = test_pool();
    let app = spawn_app(&pool).await;

    let res =
        test::call_service(&app, test::TestRequest::get().uri("/news/99").to_request()).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[rstest]
#[case("edit")]
#[case("delete")]
#[actix_web::test]
async fn comment_pages_answer_ok_for_the_author(#[case] action: &str) {
    let pool = test_pool();
    let app = spawn_app(&pool).await;
    let item = seed_news(&pool, "Новость", Utc::now()).await;
    let (author, cookie) = authed_user(&pool, &app, "author").await;
    let comment = seed_comment(&pool, item.id, author, "Текст комментария", Utc::now()).await;

    let res = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/comments/{}/{action}", comment.id))
            .cookie(cookie)
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::OK);
}

#[rstest]
#[case("edit")]
#[case("delete")]
#[actix_web::test]
async fn anonymous_comment_pages_redirect_to_login(#[case] action: &str) {
    let pool = test_pool();
    let app = spawn_app(&pool).await;
    let item = seed_news(&pool, "Новость", Utc::now()).await;
    let (author, _) = authed_user(&pool, &app, "author").await;
    let comment = seed_comment(&pool, item.id, author, "Текст комментария", Utc::now()).await;

    let path = format!("/comments/{}/{action}", comment.id);
    let res = test::call_service(&app, test::TestRequest::get().uri(&path).to_request()).await;

    assert_eq!(res.status(), StatusCode::FOUND);
    assert_eq!(location(&res), format!("/auth/login?next={path}"));
}

#[rstest]
#[case("edit")]
#[case("delete")]
#[actix_web::test]
async fn foreign_comment_pages_are_not_found(#[case] action: &str) {
    let pool = test_pool();
    let app = spawn_app(&pool).await;
    let item = seed_news(&pool, "Новость", Utc::now()).await;
    let (author, _) = authed_user(&pool, &app, "author").await;
    let comment = seed_comment(&pool, item.id, author, "Текст комментария", Utc::now()).await;
    let (_, reader_cookie) = authed_user(&pool, &app, "reader").await;

    let res = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/comments/{}/{action}", comment.id))
            .cookie(reader_cookie)
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}
