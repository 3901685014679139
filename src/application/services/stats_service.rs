//! Aggregate statistics service.

use std::sync::Arc;

use crate::domain::repositories::{StatsOverview, StatsRepository};
use crate::error::AppError;

/// Number of links returned in the `top_urls` ranking.
const TOP_N: i64 = 5;

/// Service computing dashboard statistics: totals and a top-N ranking
/// by access count.
pub struct StatsService {
    repository: Arc<dyn StatsRepository>,
}

impl StatsService {
    /// Creates a new statistics service.
    pub fn new(repository: Arc<dyn StatsRepository>) -> Self {
        Self { repository }
    }

    /// Computes the stats overview: total link count, total clicks, and the
    /// top 5 links by access count descending.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn overview(&self) -> Result<StatsOverview, AppError> {
        self.repository.overview(TOP_N).await
    }
}
