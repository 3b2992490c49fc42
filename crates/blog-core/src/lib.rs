//! # Blog Core
//!
//! The domain layer of the blog post API: the `BlogPost` model, request
//! validation, and the repository port that storage backends implement.
//! No infrastructure dependencies live here.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::{DomainError, RepoError};
