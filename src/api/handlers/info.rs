//! Handler for per-link metadata lookup.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::info::LinkInfo;
use crate::error::AppError;
use crate::state::AppState;

/// Returns stored metadata for a short link.
///
/// # Endpoint
///
/// `GET /api/info/{slug}`
///
/// # Response
///
/// ```json
/// {
///   "short_url": "http://localhost:8080/abc123",
///   "long_url": "https://example.com/page",
///   "created_at": "2026-08-26T10:00:00Z",
///   "access_count": 42
/// }
/// ```
///
/// The access count reflects persisted clicks; increments queued in the
/// click worker may lag by a moment.
///
/// # Errors
///
/// Returns 404 Not Found if the slug doesn't exist.
pub async fn info_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<LinkInfo>, AppError> {
    let link = state.link_service.get_link(&slug).await?;

    Ok(Json(LinkInfo {
        short_url: state.link_service.short_url(&link.slug),
        long_url: link.long_url,
        created_at: link.created_at,
        access_count: link.access_count,
    }))
}
