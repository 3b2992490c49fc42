//! Conversions between wire DTOs and the domain model.

use chrono::SecondsFormat;

use blog_core::domain::{BlogPost, BlogPostInput};
use blog_shared::dto::{AuthorRequest, BlogPostResponse, CreateBlogPostRequest, UpdateBlogPostRequest};

/// The public representation. The composite author is flattened and never
/// leaves the process as an object.
pub fn to_public(post: &BlogPost) -> BlogPostResponse {
    BlogPostResponse {
        id: post.id.to_string(),
        author: post.author.full_name(),
        title: post.title.clone(),
        content: post.content.clone(),
        created: post.created.to_rfc3339_opts(SecondsFormat::Millis, true),
    }
}

fn input(author: Option<AuthorRequest>, title: Option<String>, content: Option<String>) -> BlogPostInput {
    let AuthorRequest {
        first_name,
        last_name,
    } = author.unwrap_or_default();

    BlogPostInput {
        author_first_name: first_name,
        author_last_name: last_name,
        title,
        content,
    }
}

pub fn create_input(req: CreateBlogPostRequest) -> BlogPostInput {
    input(req.author, req.title, req.content)
}

/// The body `id` is checked by the handler and not carried over.
pub fn update_input(req: UpdateBlogPostRequest) -> BlogPostInput {
    input(req.author, req.title, req.content)
}
