//! Slug generation and validation.
//!
//! Generated slugs are random alphanumeric strings sourced from the OS
//! CSPRNG. Custom slugs are validated for charset and reserved words.

use crate::error::AppError;
use serde_json::json;

/// Length of generated slugs.
const SLUG_LENGTH: usize = 6;

/// Maximum accepted length for user-supplied custom slugs.
const MAX_CUSTOM_SLUG_LENGTH: usize = 64;

const CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Path segments routed to system endpoints, never usable as slugs.
const RESERVED_SLUGS: &[&str] = &["api", "admin", "health", "static"];

/// Generates a random 6-character alphanumeric slug.
///
/// # Panics
///
/// Panics if the system random number generator fails (extremely rare).
pub fn generate_slug() -> String {
    let mut buffer = [0u8; SLUG_LENGTH];

    getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

    buffer
        .iter()
        .map(|b| CHARSET[*b as usize % CHARSET.len()] as char)
        .collect()
}

/// Validates a user-provided custom slug.
///
/// # Rules
///
/// - 1 to 64 characters
/// - ASCII letters and digits only
/// - Not a reserved system path segment
///
/// # Errors
///
/// Returns [`AppError::Validation`] if any rule is violated.
pub fn validate_custom_slug(slug: &str) -> Result<(), AppError> {
    if slug.is_empty() || slug.len() > MAX_CUSTOM_SLUG_LENGTH {
        return Err(AppError::bad_request(
            "Custom slug must be 1-64 characters",
            json!({ "provided_length": slug.len() }),
        ));
    }

    if !slug.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(AppError::bad_request(
            "Custom slug must be alphanumeric",
            json!({ "slug": slug }),
        ));
    }

    if RESERVED_SLUGS.contains(&slug) {
        return Err(AppError::bad_request(
            "This slug is reserved",
            json!({ "slug": slug }),
        ));
    }

    Ok(())
}
