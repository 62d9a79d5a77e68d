//! Server assembly: wires adapters to services and builds the Actix app.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_session::config::{CookieContentSecurity, PersistentSession};
use actix_session::{storage::CookieSessionStore, SessionMiddleware};
use actix_web::cookie::{Key, SameSite};
use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{web, App, HttpServer};

use crate::domain::{AuthServiceImpl, NewsServiceImpl, NotesServiceImpl};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::{auth, news, notes};
use crate::middleware::RequestLog;
use crate::outbound::persistence::{
    DbPool, DieselCommentRepository, DieselNewsRepository, DieselNoteRepository,
    DieselUserRepository,
};

/// Wire the Diesel repositories into the three driving services.
pub fn build_http_state(pool: &DbPool) -> web::Data<HttpState> {
    let users = Arc::new(DieselUserRepository::new(pool.clone()));
    let note_repo = Arc::new(DieselNoteRepository::new(pool.clone()));
    let news_repo = Arc::new(DieselNewsRepository::new(pool.clone()));
    let comments = Arc::new(DieselCommentRepository::new(pool.clone()));

    web::Data::new(HttpState::new(
        Arc::new(AuthServiceImpl::new(users)),
        Arc::new(NotesServiceImpl::new(note_repo)),
        Arc::new(NewsServiceImpl::new(news_repo, comments)),
    ))
}

/// Session and state inputs for one worker's app instance.
#[derive(Clone)]
pub struct AppDependencies {
    pub http_state: web::Data<HttpState>,
    pub key: Key,
    pub cookie_secure: bool,
    pub same_site: SameSite,
}

/// Build the Actix app with routing, session handling, and logging.
///
/// Literal note routes (`/notes/add`, `/notes/done`) are registered before
/// the `/notes/{slug}` routes so a slugged lookup never shadows them.
pub fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        http_state,
        key,
        cookie_secure,
        same_site,
    } = deps;

    let session = SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_name("session".into())
        .cookie_path("/".into())
        .cookie_secure(cookie_secure)
        .cookie_http_only(true)
        .cookie_content_security(CookieContentSecurity::Private)
        .cookie_same_site(same_site)
        .session_lifecycle(
            PersistentSession::default().session_ttl(actix_web::cookie::time::Duration::hours(2)),
        )
        .build();

    App::new()
        .app_data(http_state)
        .wrap(session)
        .wrap(RequestLog)
        .service(news::home_page)
        .service(news::news_detail)
        .service(news::add_comment)
        .service(news::edit_comment_form)
        .service(news::edit_comment)
        .service(news::delete_comment_confirm)
        .service(news::delete_comment)
        .service(notes::list_notes)
        .service(notes::add_note_form)
        .service(notes::add_note)
        .service(notes::note_done)
        .service(notes::note_detail)
        .service(notes::edit_note_form)
        .service(notes::edit_note)
        .service(notes::delete_note_confirm)
        .service(notes::delete_note)
        .service(auth::signup_form)
        .service(auth::signup)
        .service(auth::login_form)
        .service(auth::login)
        .service(auth::logout)
}

/// Construct an Actix HTTP server from the provided configuration.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(config: ServerConfig) -> std::io::Result<Server> {
    let ServerConfig {
        key,
        cookie_secure,
        same_site,
        bind_addr,
        db_pool,
    } = config;
    let http_state = build_http_state(&db_pool);

    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            http_state: http_state.clone(),
            key: key.clone(),
            cookie_secure,
            same_site,
        })
    })
    .bind(bind_addr)?
    .run();

    Ok(server)
}
