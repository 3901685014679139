//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /{slug}`          - short link redirect (public)
//! - `GET  /health`          - health check: DB, cache, click queue
//! - `POST /api/shorten`     - create a short link
//! - `GET  /api/info/{slug}` - per-link metadata
//! - `GET  /admin/stats`     - aggregate click statistics
//!
//! Fixed routes (`/health`, `/api/*`, `/admin/*`) take precedence over the
//! `/{slug}` catch-all; slug validation additionally refuses to mint slugs
//! matching those reserved segments.
//!
//! # Middleware
//!
//! - **Tracing** - structured request/response logging
//! - **Path normalization** - trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::{Router, routing::get};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/{slug}", get(redirect_handler))
        .route("/health", get(health_handler))
        .nest("/api", api::routes::api_routes())
        .nest("/admin", api::routes::admin_routes())
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
