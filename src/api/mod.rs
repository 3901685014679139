//! REST API layer for HTTP request/response handling.
//!
//! - [`dto`] - request/response serialization types
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - request tracing
//! - [`routes`] - route group composition

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
