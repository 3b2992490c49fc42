use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::BlogPost;
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Insert a new entity. Fails with `RepoError::Constraint` if the ID is taken.
    async fn insert(&self, entity: T) -> Result<T, RepoError>;

    /// Replace a stored entity. Fails with `RepoError::NotFound` if it is gone.
    async fn update(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID. Fails with `RepoError::NotFound` if absent.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// The blog post collection.
#[async_trait]
pub trait BlogPostRepository: BaseRepository<BlogPost, Uuid> {
    /// All posts, oldest first.
    async fn list(&self) -> Result<Vec<BlogPost>, RepoError>;

    /// Number of stored posts.
    async fn count(&self) -> Result<u64, RepoError>;
}
