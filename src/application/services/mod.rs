//! Business logic services consumed by HTTP handlers.

mod link_service;
mod stats_service;

pub use link_service::LinkService;
pub use stats_service::StatsService;
