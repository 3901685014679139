//! Click event model for asynchronous access counting.

/// A resolved redirect, queued for counting off the request path.
///
/// Created in the redirect handler and sent over a bounded channel to
/// [`crate::domain::click_worker::run_click_worker`], which performs the
/// counter update. This keeps redirects fast and makes counting
/// fire-and-forget: a full queue drops the event instead of blocking.
#[derive(Debug, Clone)]
pub struct ClickEvent {
    pub slug: String,
}

impl ClickEvent {
    pub fn new(slug: impl Into<String>) -> Self {
        Self { slug: slug.into() }
    }
}
