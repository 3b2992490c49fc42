//! Domain entities.

mod blog_post;

pub use blog_post::{Author, BlogPost, BlogPostInput, BlogPostPatch, NewBlogPost};
