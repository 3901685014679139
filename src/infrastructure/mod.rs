//! Infrastructure layer: concrete implementations of domain interfaces.
//!
//! - [`cache`] - caching abstractions (Redis and no-op implementations)
//! - [`persistence`] - PostgreSQL repository implementations

pub mod cache;
pub mod persistence;
