//! Ports - trait definitions for external dependencies.
//! Storage backends in `blog-infra` implement these.

mod repository;

pub use repository::{BaseRepository, BlogPostRepository};
