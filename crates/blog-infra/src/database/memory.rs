//! In-memory blog post store - used by tests and when running without a database.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use blog_core::domain::BlogPost;
use blog_core::error::RepoError;
use blog_core::ports::{BaseRepository, BlogPostRepository};

/// Blog posts kept in insertion order behind an async RwLock.
///
/// Note: Data is lost on process restart.
pub struct InMemoryBlogPostRepository {
    posts: RwLock<Vec<BlogPost>>,
}

impl InMemoryBlogPostRepository {
    pub fn new() -> Self {
        Self {
            posts: RwLock::new(Vec::new()),
        }
    }

    /// Drop every stored post.
    pub async fn clear(&self) {
        let mut posts = self.posts.write().await;
        tracing::debug!(removed = posts.len(), "Clearing in-memory blog posts");
        posts.clear();
    }
}

impl Default for InMemoryBlogPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<BlogPost, Uuid> for InMemoryBlogPostRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<BlogPost>, RepoError> {
        let posts = self.posts.read().await;
        Ok(posts.iter().find(|p| p.id == id).cloned())
    }

    async fn insert(&self, post: BlogPost) -> Result<BlogPost, RepoError> {
        let mut posts = self.posts.write().await;

        if posts.iter().any(|p| p.id == post.id) {
            return Err(RepoError::Constraint(format!(
                "blog post {} already exists",
                post.id
            )));
        }

        posts.push(post.clone());
        Ok(post)
    }

    async fn update(&self, post: BlogPost) -> Result<BlogPost, RepoError> {
        let mut posts = self.posts.write().await;
        let slot = posts
            .iter_mut()
            .find(|p| p.id == post.id)
            .ok_or(RepoError::NotFound)?;

        *slot = post.clone();
        Ok(post)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut posts = self.posts.write().await;
        let index = posts
            .iter()
            .position(|p| p.id == id)
            .ok_or(RepoError::NotFound)?;

        posts.remove(index);
        Ok(())
    }
}

#[async_trait]
impl BlogPostRepository for InMemoryBlogPostRepository {
    async fn list(&self) -> Result<Vec<BlogPost>, RepoError> {
        Ok(self.posts.read().await.clone())
    }

    async fn count(&self) -> Result<u64, RepoError> {
        Ok(self.posts.read().await.len() as u64)
    }
}
