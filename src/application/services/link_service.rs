//! Link creation and retrieval service.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::slug::{generate_slug, validate_custom_slug};
use crate::utils::url_normalizer::normalize_url;

/// Service for creating and retrieving shortened links.
///
/// Handles URL normalization, slug generation/validation, and deduplication
/// so that repeated shorten requests for the same target stay idempotent.
pub struct LinkService {
    link_repository: Arc<dyn LinkRepository>,
    base_url: String,
}

impl LinkService {
    /// Creates a new link service.
    ///
    /// `base_url` is the public origin short URLs are built from, e.g.
    /// `http://localhost:8080`.
    pub fn new(link_repository: Arc<dyn LinkRepository>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            link_repository,
            base_url,
        }
    }

    /// Creates a short link for a long URL.
    ///
    /// # Deduplication
    ///
    /// Without a custom slug, shortening the same normalized URL twice
    /// returns the existing link instead of minting a second slug.
    ///
    /// # Slug selection
    ///
    /// - With `custom_slug`: validated, then rejected with a conflict if taken
    /// - Without: a random 6-character slug, retried on collision
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for malformed/unsupported URLs or an
    /// invalid custom slug, and [`AppError::Conflict`] if the custom slug
    /// already exists.
    pub async fn create_short_link(
        &self,
        long_url: String,
        custom_slug: Option<String>,
    ) -> Result<Link, AppError> {
        let normalized_url = normalize_url(&long_url).map_err(|e| {
            AppError::bad_request("Invalid URL format", json!({ "reason": e.to_string() }))
        })?;

        let slug = match custom_slug {
            Some(custom) => {
                validate_custom_slug(&custom)?;

                if self.link_repository.find_by_slug(&custom).await?.is_some() {
                    return Err(AppError::conflict(
                        "Short URL already exists",
                        json!({ "slug": custom }),
                    ));
                }

                custom
            }
            None => {
                if let Some(existing) = self
                    .link_repository
                    .find_by_long_url(&normalized_url)
                    .await?
                {
                    return Ok(existing);
                }

                self.generate_unique_slug().await?
            }
        };

        let new_link = NewLink {
            slug,
            long_url: normalized_url,
        };

        self.link_repository.create(new_link).await
    }

    /// Retrieves a link by its slug.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches the slug.
    pub async fn get_link(&self, slug: &str) -> Result<Link, AppError> {
        self.link_repository
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| AppError::not_found("Short link not found", json!({ "slug": slug })))
    }

    /// Counts all stored links. Used by the health check.
    pub async fn count_links(&self) -> Result<i64, AppError> {
        self.link_repository.count().await
    }

    /// Constructs the full short URL for a slug.
    pub fn short_url(&self, slug: &str) -> String {
        format!("{}/{}", self.base_url, slug)
    }

    /// Generates a slug not yet present in the store.
    ///
    /// Attempts up to 10 times before failing.
    async fn generate_unique_slug(&self) -> Result<String, AppError> {
        const MAX_ATTEMPTS: usize = 10;

        for _ in 0..MAX_ATTEMPTS {
            let slug = generate_slug();

            if self.link_repository.find_by_slug(&slug).await?.is_none() {
                return Ok(slug);
            }
        }

        Err(AppError::internal(
            "Failed to generate unique slug",
            json!({ "reason": "Too many collisions" }),
        ))
    }
}
