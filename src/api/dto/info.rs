//! Per-link metadata DTO.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Public view of a stored link, as returned by the info endpoint and the
/// `top_urls` list of the stats endpoint.
#[derive(Debug, Serialize)]
pub struct LinkInfo {
    pub short_url: String,
    pub long_url: String,
    pub created_at: DateTime<Utc>,
    pub access_count: i64,
}
