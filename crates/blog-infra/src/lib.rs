//! # Blog Infrastructure
//!
//! Storage backends for the `BlogPostRepository` port defined in `blog-core`.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - PostgreSQL store via SeaORM
//!
//! The in-memory store is always available.

pub mod database;

pub use database::{DatabaseConfig, InMemoryBlogPostRepository, StoreConnection};

#[cfg(feature = "postgres")]
pub use database::PostgresBlogPostRepository;
