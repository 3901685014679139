//! PostgreSQL implementation of the statistics repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::Link;
use crate::domain::repositories::{StatsOverview, StatsRepository};
use crate::error::AppError;

/// PostgreSQL repository for access counters and aggregate statistics.
///
/// The counter lives on the `links` row itself; a single atomic `UPDATE`
/// keeps increments safe under concurrent redirects.
pub struct PgStatsRepository {
    pool: Arc<PgPool>,
}

impl PgStatsRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StatsRepository for PgStatsRepository {
    async fn increment_access(&self, slug: &str) -> Result<bool, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE links
            SET access_count = access_count + 1
            WHERE slug = $1
            "#,
        )
        .bind(slug)
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn overview(&self, top_n: i64) -> Result<StatsOverview, AppError> {
        let (total_urls, total_clicks) = sqlx::query_as::<_, (i64, i64)>(
            "SELECT COUNT(*), COALESCE(SUM(access_count), 0)::BIGINT FROM links",
        )
        .fetch_one(self.pool.as_ref())
        .await?;

        let top = sqlx::query_as::<_, Link>(
            r#"
            SELECT id, slug, long_url, created_at, access_count
            FROM links
            ORDER BY access_count DESC, created_at ASC
            LIMIT $1
            "#,
        )
        .bind(top_n)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(StatsOverview {
            total_urls,
            total_clicks,
            top,
        })
    }
}
