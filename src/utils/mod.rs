//! Shared utilities: slug generation and URL normalization.

pub mod slug;
pub mod url_normalizer;
