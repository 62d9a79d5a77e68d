//! SQLite-backed [`UserRepository`] implementation using Diesel.

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;

use crate::domain::ports::{PersistenceError, UserRepository};
use crate::domain::user::{User, UserId, Username};

use super::models::{NewUserRow, UserRow};
use super::pool::DbPool;
use super::schema::users;
use super::{map_diesel_error, run_blocking};

/// Diesel-backed implementation of the [`UserRepository`] port.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn insert(&self, user: User) -> Result<(), PersistenceError> {
        let pool = self.pool.clone();
        run_blocking(move || {
            let mut conn = pool.get()?;
            diesel::insert_into(users::table)
                .values(NewUserRow::from_domain(user, Utc::now().naive_utc()))
                .execute(&mut conn)
                .map_err(map_diesel_error)?;
            Ok(())
        })
        .await
    }

    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<User>, PersistenceError> {
        let pool = self.pool.clone();
        let username = username.as_ref().to_owned();
        run_blocking(move || {
            let mut conn = pool.get()?;
            users::table
                .filter(users::username.eq(username))
                .first::<UserRow>(&mut conn)
                .optional()
                .map_err(map_diesel_error)?
                .map(UserRow::into_domain)
                .transpose()
        })
        .await
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, PersistenceError> {
        let pool = self.pool.clone();
        let id = id.to_string();
        run_blocking(move || {
            let mut conn = pool.get()?;
            users::table
                .find(id)
                .first::<UserRow>(&mut conn)
                .optional()
                .map_err(map_diesel_error)?
                .map(UserRow::into_domain)
                .transpose()
        })
        .await
    }
}
