//! DTOs for the aggregate statistics endpoint.

use serde::Serialize;

use crate::api::dto::info::LinkInfo;

/// Dashboard statistics: totals plus the most-clicked links.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub total_urls: i64,
    pub total_clicks: i64,
    /// Ranked by `access_count` descending, at most 5 entries.
    pub top_urls: Vec<LinkInfo>,
}
