//! The blog post model, its validated inputs and merge-on-update.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Post author as stored. Both names are non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub first_name: String,
    pub last_name: String,
}

impl Author {
    /// "first last", the form clients see.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// BlogPost entity - a single document in the posts collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: Uuid,
    pub author: Author,
    pub title: String,
    pub content: String,
    pub created: DateTime<Utc>,
}

impl BlogPost {
    /// Create a post from validated input, assigning its id and creation time.
    pub fn new(input: NewBlogPost) -> Self {
        Self {
            id: Uuid::new_v4(),
            author: input.author,
            title: input.title,
            content: input.content,
            created: Utc::now(),
        }
    }

    /// Overwrite only the fields present in `patch`.
    pub fn apply(&mut self, patch: BlogPostPatch) {
        if let Some(first_name) = patch.author_first_name {
            self.author.first_name = first_name;
        }
        if let Some(last_name) = patch.author_last_name {
            self.author.last_name = last_name;
        }
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(content) = patch.content {
            self.content = content;
        }
    }
}

/// Post fields as received from a client, not yet validated.
///
/// `None` means the field was absent from the request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlogPostInput {
    pub author_first_name: Option<String>,
    pub author_last_name: Option<String>,
    pub title: Option<String>,
    pub content: Option<String>,
}

/// Validated input for creating a post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBlogPost {
    pub author: Author,
    pub title: String,
    pub content: String,
}

impl TryFrom<BlogPostInput> for NewBlogPost {
    type Error = DomainError;

    /// Every field is required and must not be blank.
    fn try_from(input: BlogPostInput) -> Result<Self, Self::Error> {
        Ok(Self {
            author: Author {
                first_name: required("author.firstName", input.author_first_name)?,
                last_name: required("author.lastName", input.author_last_name)?,
            },
            title: required("title", input.title)?,
            content: required("content", input.content)?,
        })
    }
}

/// Validated partial update. `None` means "leave unchanged".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlogPostPatch {
    pub author_first_name: Option<String>,
    pub author_last_name: Option<String>,
    pub title: Option<String>,
    pub content: Option<String>,
}

impl BlogPostPatch {
    /// True when the patch would change nothing.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

impl TryFrom<BlogPostInput> for BlogPostPatch {
    type Error = DomainError;

    /// Any subset of fields may be present; present ones must not be blank.
    fn try_from(input: BlogPostInput) -> Result<Self, Self::Error> {
        Ok(Self {
            author_first_name: optional("author.firstName", input.author_first_name)?,
            author_last_name: optional("author.lastName", input.author_last_name)?,
            title: optional("title", input.title)?,
            content: optional("content", input.content)?,
        })
    }
}

fn required(field: &str, value: Option<String>) -> Result<String, DomainError> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(DomainError::Validation(format!(
            "Missing `{field}` in request body"
        ))),
    }
}

fn optional(field: &str, value: Option<String>) -> Result<Option<String>, DomainError> {
    match value {
        Some(value) if value.trim().is_empty() => Err(DomainError::Validation(format!(
            "`{field}` must not be empty"
        ))),
        other => Ok(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(first: &str, last: &str, title: &str, content: &str) -> BlogPostInput {
        BlogPostInput {
            author_first_name: Some(first.to_string()),
            author_last_name: Some(last.to_string()),
            title: Some(title.to_string()),
            content: Some(content.to_string()),
        }
    }

    fn sample_post() -> BlogPost {
        BlogPost::new(NewBlogPost::try_from(input("Ada", "Lovelace", "Notes", "On engines")).unwrap())
    }

    #[test]
    fn full_name_joins_with_single_space() {
        assert_eq!(sample_post().author.full_name(), "Ada Lovelace");
    }

    #[test]
    fn new_posts_get_distinct_ids() {
        assert_ne!(sample_post().id, sample_post().id);
    }

    #[test]
    fn create_rejects_missing_author_name() {
        let mut req = input("Jane", "Doe", "T", "C");
        req.author_first_name = None;

        let err = NewBlogPost::try_from(req).unwrap_err();
        assert!(matches!(err, DomainError::Validation(msg) if msg.contains("`author.firstName`")));
    }

    #[test]
    fn create_rejects_blank_last_name() {
        let err = NewBlogPost::try_from(input("Jane", "  ", "T", "C")).unwrap_err();
        assert!(matches!(err, DomainError::Validation(msg) if msg.contains("author.lastName")));
    }

    #[test]
    fn create_rejects_missing_content() {
        let mut req = input("Jane", "Doe", "T", "C");
        req.content = None;

        let err = NewBlogPost::try_from(req).unwrap_err();
        assert!(matches!(err, DomainError::Validation(msg) if msg.contains("`content`")));
    }

    #[test]
    fn patch_touching_content_keeps_author_and_title() {
        let mut post = sample_post();
        let before = post.clone();

        let patch = BlogPostPatch::try_from(BlogPostInput {
            content: Some("insert something witty here".to_string()),
            ..Default::default()
        })
        .unwrap();
        post.apply(patch);

        assert_eq!(post.content, "insert something witty here");
        assert_eq!(post.author, before.author);
        assert_eq!(post.title, before.title);
        assert_eq!(post.id, before.id);
        assert_eq!(post.created, before.created);
    }

    #[test]
    fn patch_sets_author_names_independently() {
        let mut post = sample_post();

        let patch = BlogPostPatch::try_from(BlogPostInput {
            author_last_name: Some("Byron".to_string()),
            ..Default::default()
        })
        .unwrap();
        post.apply(patch);

        assert_eq!(post.author.full_name(), "Ada Byron");
    }

    #[test]
    fn patch_rejects_empty_title() {
        let err = BlogPostPatch::try_from(BlogPostInput {
            title: Some(String::new()),
            ..Default::default()
        })
        .unwrap_err();

        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn empty_input_yields_empty_patch() {
        let patch = BlogPostPatch::try_from(BlogPostInput::default()).unwrap();
        assert!(patch.is_empty());
    }
}
