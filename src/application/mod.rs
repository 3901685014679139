//! Application layer orchestrating domain operations.
//!
//! Services consume repository traits and expose a clean API for handlers:
//!
//! - [`services::LinkService`] - shorten, lookup, short URL construction
//! - [`services::StatsService`] - aggregate click statistics

pub mod services;
