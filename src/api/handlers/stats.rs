//! Handler for aggregate click statistics.

use axum::{Json, extract::State};

use crate::api::dto::info::LinkInfo;
use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns aggregate statistics for the dashboard view.
///
/// # Endpoint
///
/// `GET /admin/stats`
///
/// # Response
///
/// ```json
/// {
///   "total_urls": 12,
///   "total_clicks": 340,
///   "top_urls": [
///     {
///       "short_url": "http://localhost:8080/abc123",
///       "long_url": "https://example.com/page",
///       "created_at": "2026-08-26T10:00:00Z",
///       "access_count": 120
///     }
///   ]
/// }
/// ```
///
/// `top_urls` holds at most 5 entries, ranked by access count descending.
pub async fn stats_handler(
    State(state): State<AppState>,
) -> Result<Json<StatsResponse>, AppError> {
    let overview = state.stats_service.overview().await?;

    let top_urls = overview
        .top
        .into_iter()
        .map(|link| LinkInfo {
            short_url: state.link_service.short_url(&link.slug),
            long_url: link.long_url,
            created_at: link.created_at,
            access_count: link.access_count,
        })
        .collect();

    Ok(Json(StatsResponse {
        total_urls: overview.total_urls,
        total_clicks: overview.total_clicks,
        top_urls,
    }))
}
