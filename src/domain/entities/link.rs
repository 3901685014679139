//! Short link entity.

use chrono::{DateTime, Utc};

/// A stored short link: the mapping from a slug to its target URL,
/// plus the persisted access counter.
///
/// `short_url` is intentionally absent; it is derived from the configured
/// base URL at the API boundary and never stored.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Link {
    pub id: i64,
    pub slug: String,
    pub long_url: String,
    pub created_at: DateTime<Utc>,
    pub access_count: i64,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(
        id: i64,
        slug: String,
        long_url: String,
        created_at: DateTime<Utc>,
        access_count: i64,
    ) -> Self {
        Self {
            id,
            slug,
            long_url,
            created_at,
            access_count,
        }
    }
}

/// Input data for creating a new link.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub slug: String,
    pub long_url: String,
}
