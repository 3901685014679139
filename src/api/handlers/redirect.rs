//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect},
};
use tracing::{debug, error};

use crate::domain::click_event::ClickEvent;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects a slug to its original URL.
///
/// # Endpoint
///
/// `GET /{slug}`
///
/// # Request Flow
///
/// 1. Check the cache for the slug
/// 2. On miss (or cache error), query the database
/// 3. Asynchronously backfill the cache
/// 4. Enqueue a click event for the background counter
/// 5. Return 307 Temporary Redirect
///
/// 307 is used instead of 301 so browsers keep resolving through the
/// service and every visit is counted.
///
/// # Click Tracking
///
/// Click events go into a bounded channel; when the queue is full the
/// event is dropped rather than delaying the redirect.
///
/// # Errors
///
/// Returns 404 Not Found if the slug doesn't exist.
pub async fn redirect_handler(
    Path(slug): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let long_url = match state.cache.get_url(&slug).await {
        Ok(Some(cached_url)) => {
            debug!("Cache HIT for {}", slug);
            cached_url
        }
        Ok(None) => {
            debug!("Cache MISS for {}", slug);

            let link = state.link_service.get_link(&slug).await?;

            // Backfill the cache off the request path.
            let cache = state.cache.clone();
            let cache_slug = slug.clone();
            let url = link.long_url.clone();
            tokio::spawn(async move {
                if let Err(e) = cache.set_url(&cache_slug, &url, None).await {
                    error!("Failed to cache URL for {}: {}", cache_slug, e);
                }
            });

            link.long_url
        }
        Err(e) => {
            error!("Cache error for {}: {}", slug, e);

            let link = state.link_service.get_link(&slug).await?;
            link.long_url
        }
    };

    // Fire-and-forget: a full queue drops the click instead of blocking.
    let _ = state.click_sender.try_send(ClickEvent::new(slug));

    Ok(Redirect::temporary(&long_url))
}
