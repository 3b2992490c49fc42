//! Application state - shared across all handlers.

use std::sync::Arc;

use blog_core::ports::BlogPostRepository;

/// Shared application state.
///
/// The repository is injected by whoever builds the app, so every server or
/// test instance talks to its own store.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn BlogPostRepository>,
}

impl AppState {
    pub fn new(posts: Arc<dyn BlogPostRepository>) -> Self {
        Self { posts }
    }
}
