//! Handler for the shorten endpoint.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link for a long URL.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// { "long_url": "https://example.com/page", "custom_slug": "promo2025" }
/// ```
///
/// `custom_slug` is optional; without it a random slug is generated.
/// Shortening the same URL twice (without a custom slug) returns the
/// existing short link.
///
/// # Response
///
/// ```json
/// { "short_url": "http://localhost:8080/promo2025", "long_url": "https://example.com/page" }
/// ```
///
/// # Errors
///
/// - 400 Bad Request for malformed URLs or invalid custom slugs
/// - 409 Conflict when the custom slug is already taken
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    payload.validate()?;

    let link = state
        .link_service
        .create_short_link(payload.long_url, payload.custom_slug)
        .await?;

    Ok(Json(ShortenResponse {
        short_url: state.link_service.short_url(&link.slug),
        long_url: link.long_url,
    }))
}
