//! Data Transfer Objects - request/response types for the posts API.
//!
//! Request fields are optional at this layer so that a missing field reaches
//! validation and is reported by name instead of failing deserialization.

use serde::{Deserialize, Serialize};

/// Author as sent by clients: `{"firstName": .., "lastName": ..}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

/// Body of `POST /posts`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateBlogPostRequest {
    #[serde(default)]
    pub author: Option<AuthorRequest>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

/// Body of `PUT /posts/{id}`. Every field is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateBlogPostRequest {
    /// When present, must name the same post as the path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<AuthorRequest>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// Public representation of a blog post. The only post shape that goes out
/// over the wire; `author` is the flattened "first last" name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPostResponse {
    pub id: String,
    pub author: String,
    pub title: String,
    pub content: String,
    pub created: String,
}
