//! # Blog Shared
//!
//! Wire types for the blog post API: request bodies, the public post
//! representation, and RFC 7807 error documents.

pub mod dto;
pub mod response;

pub use dto::{AuthorRequest, BlogPostResponse, CreateBlogPostRequest, UpdateBlogPostRequest};
pub use response::ErrorResponse;
