//! Shared fixtures for end-to-end HTTP tests.
//!
//! Each test builds the real app over an in-memory SQLite database. The pool
//! is capped at one connection so every request sees the same database;
//! fixtures reach the store directly through the Diesel repositories.

use actix_web::cookie::{Cookie, Key, SameSite};
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{http::StatusCode, test};
use chrono::{DateTime, Utc};
use serde_json::json;

use backend::domain::auth::PasswordDigest;
use backend::domain::comment::{Comment, NewComment};
use backend::domain::news::{NewNews, News};
use backend::domain::note::{NewNote, Note};
use backend::domain::ports::{CommentRepository, NewsRepository, NoteRepository, UserRepository};
use backend::domain::slug::Slug;
use backend::domain::user::{User, UserId, Username};
use backend::outbound::persistence::{
    DbPool, DieselCommentRepository, DieselNewsRepository, DieselNoteRepository,
    DieselUserRepository, PoolConfig,
};
use backend::server::{build_app, build_http_state, AppDependencies};

/// Build a migrated single-connection in-memory pool.
pub fn test_pool() -> DbPool {
    let pool =
        DbPool::new(&PoolConfig::new(":memory:").with_max_size(1)).expect("pool should build");
    pool.run_migrations().expect("migrations should apply");
    pool
}

/// Initialise the full app over the given pool.
pub async fn spawn_app(
    pool: &DbPool,
) -> impl Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error> {
    test::init_service(build_app(AppDependencies {
        http_state: build_http_state(pool),
        key: Key::generate(),
        cookie_secure: false,
        same_site: SameSite::Lax,
    }))
    .await
}

/// Register a user directly in the store.
pub async fn register_user(pool: &DbPool, username: &str, password: &str) -> UserId {
    let id = UserId::random();
    DieselUserRepository::new(pool.clone())
        .insert(User {
            id,
            username: Username::new(username).expect("valid fixture username"),
            password: PasswordDigest::digest(password).expect("digest"),
        })
        .await
        .expect("user fixture");
    id
}

/// Log in over HTTP and return the session cookie.
pub async fn login<S>(app: &S, username: &str, password: &str) -> Cookie<'static>
where
    S: Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    let res = test::call_service(
        app,
        test::TestRequest::post()
            .uri("/auth/login")
            .set_json(json!({ "username": username, "password": password }))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::FOUND, "login should redirect");
    res.response()
        .cookies()
        .find(|cookie| cookie.name() == "session")
        .expect("session cookie")
        .into_owned()
}

/// Register a user and log them in, returning id and cookie.
pub async fn authed_user<S>(
    pool: &DbPool,
    app: &S,
    username: &str,
) -> (UserId, Cookie<'static>)
where
    S: Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    let id = register_user(pool, username, "s3cret").await;
    let cookie = login(app, username, "s3cret").await;
    (id, cookie)
}

/// Insert a news item directly in the store.
pub async fn seed_news(pool: &DbPool, title: &str, date: DateTime<Utc>) -> News {
    DieselNewsRepository::new(pool.clone())
        .insert(NewNews {
            title: title.to_owned(),
            text: "Просто текст.".to_owned(),
            date,
        })
        .await
        .expect("news fixture")
}

/// Insert a note directly in the store.
pub async fn seed_note(pool: &DbPool, author: UserId, slug: &str) -> Note {
    DieselNoteRepository::new(pool.clone())
        .insert(NewNote {
            title: "Заголовок".to_owned(),
            text: "Текст заметки".to_owned(),
            slug: Slug::new(slug).expect("valid fixture slug"),
            author,
        })
        .await
        .expect("note fixture")
}

/// Insert a comment directly in the store.
pub async fn seed_comment(
    pool: &DbPool,
    news_id: i32,
    author: UserId,
    text: &str,
    created: DateTime<Utc>,
) -> Comment {
    DieselCommentRepository::new(pool.clone())
        .insert(NewComment {
            news_id,
            author,
            text: text.to_owned(),
            created,
        })
        .await
        .expect("comment fixture")
}

/// The notes currently stored for an author.
pub async fn notes_of(pool: &DbPool, author: UserId) -> Vec<Note> {
    DieselNoteRepository::new(pool.clone())
        .list_by_author(&author)
        .await
        .expect("note listing")
}

/// Look a note up by slug regardless of author.
pub async fn note_by_slug(pool: &DbPool, slug: &str) -> Option<Note> {
    DieselNoteRepository::new(pool.clone())
        .find_by_slug(&Slug::new(slug).expect("valid fixture slug"))
        .await
        .expect("note lookup")
}

/// The comments currently stored for a news item, oldest first.
pub async fn comments_for(pool: &DbPool, news_id: i32) -> Vec<Comment> {
    DieselCommentRepository::new(pool.clone())
        .list_for_news(news_id)
        .await
        .expect("comment listing")
}

/// Read the `Location` header of a redirect response.
pub fn location(res: &ServiceResponse) -> String {
    res.headers()
        .get(actix_web::http::header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .expect("location header")
        .to_owned()
}
