//! API route groups.

use crate::api::handlers::{info_handler, shorten_handler, stats_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Routes nested under `/api`.
///
/// - `POST /shorten`     - create a short link
/// - `GET  /info/{slug}` - per-link metadata
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/info/{slug}", get(info_handler))
}

/// Routes nested under `/admin`.
///
/// - `GET /stats` - aggregate click statistics
pub fn admin_routes() -> Router<AppState> {
    Router::new().route("/stats", get(stats_handler))
}
