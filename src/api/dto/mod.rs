//! Data Transfer Objects for request/response serialization.

pub mod health;
pub mod info;
pub mod shorten;
pub mod stats;
