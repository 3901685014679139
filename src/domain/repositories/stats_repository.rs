//! Repository trait for access counting and aggregate statistics.

use crate::domain::entities::Link;
use crate::error::AppError;
use async_trait::async_trait;

/// Aggregate statistics across all links.
#[derive(Debug, Clone)]
pub struct StatsOverview {
    pub total_urls: i64,
    /// Sum of `access_count` over all links.
    pub total_clicks: i64,
    /// Links ranked by `access_count` descending.
    pub top: Vec<Link>,
}

/// Repository interface for the stats aggregator and access counters.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgStatsRepository`] - PostgreSQL implementation
/// - In-memory doubles used by integration tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StatsRepository: Send + Sync {
    /// Increments the access counter for a slug by one.
    ///
    /// Returns `Ok(true)` if a link was updated, `Ok(false)` if the slug
    /// is unknown (the link may have raced with cache state).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn increment_access(&self, slug: &str) -> Result<bool, AppError>;

    /// Computes totals and the top `top_n` links by access count.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn overview(&self, top_n: i64) -> Result<StatsOverview, AppError>;
}
