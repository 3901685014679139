//! Cache service trait and error types.

use async_trait::async_trait;
use std::fmt;

/// Errors that can occur during cache operations.
#[derive(Debug)]
pub enum CacheError {
    ConnectionError(String),
    OperationError(String),
}

impl fmt::Display for CacheError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::ConnectionError(e) => write!(f, "Cache connection error: {}", e),
            Self::OperationError(e) => write!(f, "Cache operation error: {}", e),
        }
    }
}

impl std::error::Error for CacheError {}

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Trait for caching slug → long URL mappings on the redirect path.
///
/// Implementations are fail-open: cache trouble degrades to a database
/// lookup, it never fails a redirect.
#[async_trait]
pub trait CacheService: Send + Sync {
    /// Retrieves the long URL for a slug.
    ///
    /// Returns `Ok(Some(url))` on a hit, `Ok(None)` on a miss.
    async fn get_url(&self, slug: &str) -> CacheResult<Option<String>>;

    /// Stores a slug → URL mapping with an optional TTL override in seconds.
    ///
    /// Implementations log failures and return `Ok(())` so callers never
    /// block on the cache.
    async fn set_url(&self, slug: &str, long_url: &str, ttl_seconds: Option<u64>)
    -> CacheResult<()>;

    /// Reports whether the cache backend is reachable. Used by the health
    /// endpoint.
    async fn health_check(&self) -> bool;
}
