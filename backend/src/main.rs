//! Backend entry-point: builds the pool, runs migrations, serves HTTP.

use std::env;
use std::net::SocketAddr;

use actix_web::cookie::{Key, SameSite};
use tracing::warn;
use tracing_subscriber::{fmt, EnvFilter};

use backend::outbound::persistence::{DbPool, PoolConfig};
use backend::server::{create_server, ServerConfig};

/// Load the session signing key, or mint a throwaway one in development.
///
/// Outside debug builds an ephemeral key must be opted into with
/// `SESSION_ALLOW_EPHEMERAL=1`; otherwise a missing key file is fatal.
fn session_key() -> std::io::Result<Key> {
    let path =
        env::var("SESSION_KEY_FILE").unwrap_or_else(|_| "/var/run/secrets/session_key".into());
    match std::fs::read(&path) {
        Ok(bytes) => Ok(Key::derive_from(&bytes)),
        Err(read_err) => {
            let ephemeral_ok = cfg!(debug_assertions)
                || env::var("SESSION_ALLOW_EPHEMERAL").ok().as_deref() == Some("1");
            if ephemeral_ok {
                warn!(path = %path, error = %read_err, "no session key file, generating an ephemeral key");
                Ok(Key::generate())
            } else {
                Err(std::io::Error::other(format!(
                    "cannot read session key {path}: {read_err}"
                )))
            }
        }
    }
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let key = session_key()?;
    let cookie_secure = env::var("SESSION_COOKIE_SECURE")
        .map(|v| v != "0")
        .unwrap_or(true);

    let database_url = env::var("DATABASE_URL").unwrap_or_else(|_| "app.db".into());
    let pool = DbPool::new(&PoolConfig::new(database_url))
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    pool.run_migrations()
        .map_err(|e| std::io::Error::other(e.to_string()))?;

    let bind_addr: SocketAddr = env::var("BIND_ADDR")
        .unwrap_or_else(|_| "127.0.0.1:8080".into())
        .parse()
        .map_err(|e| std::io::Error::other(format!("invalid BIND_ADDR: {e}")))?;

    let config = ServerConfig::new(key, cookie_secure, SameSite::Lax, bind_addr, pool);
    create_server(config)?.await
}
