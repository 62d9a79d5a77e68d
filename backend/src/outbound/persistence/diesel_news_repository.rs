//! SQLite-backed [`NewsRepository`] implementation using Diesel.

use async_trait::async_trait;
use diesel::prelude::*;

use crate::domain::news::{NewNews, News};
use crate::domain::ports::{NewsRepository, PersistenceError};

use super::models::{NewNewsRow, NewsRow};
use super::pool::DbPool;
use super::schema::news;
use super::{map_diesel_error, run_blocking};

/// Diesel-backed implementation of the [`NewsRepository`] port.
#[derive(Clone)]
pub struct DieselNewsRepository {
    pool: DbPool,
}

impl DieselNewsRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NewsRepository for DieselNewsRepository {
    async fn insert(&self, item: NewNews) -> Result<News, PersistenceError> {
        let pool = self.pool.clone();
        run_blocking(move || {
            let mut conn = pool.get()?;
            let row: NewsRow = diesel::insert_into(news::table)
                .values(NewNewsRow::from(item))
                .get_result(&mut conn)
                .map_err(map_diesel_error)?;
            Ok(row.into_domain())
        })
        .await
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<News>, PersistenceError> {
        let pool = self.pool.clone();
        run_blocking(move || {
            let mut conn = pool.get()?;
            Ok(news::table
                .find(id)
                .first::<NewsRow>(&mut conn)
                .optional()
                .map_err(map_diesel_error)?
                .map(NewsRow::into_domain))
        })
        .await
    }

    async fn list_newest(&self, limit: i64) -> Result<Vec<News>, PersistenceError> {
        let pool = self.pool.clone();
        run_blocking(move || {
            let mut conn = pool.get()?;
            Ok(news::table
                .order(news::date.desc())
                .limit(limit)
                .load::<NewsRow>(&mut conn)
                .map_err(map_diesel_error)?
                .into_iter()
                .map(NewsRow::into_domain)
                .collect())
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outbound::persistence::PoolConfig;
    use chrono::{Duration, Utc};

    fn repo() -> DieselNewsRepository {
        let pool = DbPool::new(&PoolConfig::new(":memory:").with_max_size(1))
            .expect("pool should build");
        pool.run_migrations().expect("migrations should apply");
        DieselNewsRepository::new(pool)
    }

    fn dated_item(days_ago: i64) -> NewNews {
        NewNews {
            title: format!("Новость {days_ago}"),
            text: "Просто текст.".to_owned(),
            date: Utc::now() - Duration::days(days_ago),
        }
    }

    #[tokio::test]
    async fn insert_then_find_round_trips() {
        let repo = repo();
        let inserted = repo.insert(dated_item(0)).await.expect("insert");

        let found = repo
            .find_by_id(inserted.id)
            .await
            .expect("lookup")
            .expect("present");
        assert_eq!(found, inserted);
    }

    #[tokio::test]
    async fn list_newest_orders_descending_and_caps() {
        let repo = repo();
        for days_ago in 0..5 {
            repo.insert(dated_item(days_ago)).await.expect("insert");
        }

        let newest = repo.list_newest(3).await.expect("list");
        assert_eq!(newest.len(), 3);
        assert!(newest.windows(2).all(|pair| pair[0].date >= pair[1].date));
    }

    #[tokio::test]
    async fn missing_item_resolves_to_none() {
        let repo = repo();
        assert!(repo.find_by_id(99).await.expect("lookup").is_none());
    }
}
