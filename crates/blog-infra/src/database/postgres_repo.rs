//! PostgreSQL blog post repository.

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, DbConn, DbErr, EntityTrait, PaginatorTrait, QueryOrder, SqlErr,
};
use uuid::Uuid;

use blog_core::domain::BlogPost;
use blog_core::error::RepoError;
use blog_core::ports::{BaseRepository, BlogPostRepository};

use super::entity::blog_post::{self, Entity as BlogPostEntity};

/// Blog posts stored in the `blog_posts` table.
pub struct PostgresBlogPostRepository {
    db: Arc<DbConn>,
}

impl PostgresBlogPostRepository {
    /// Repository over a shared connection pool.
    pub fn new(db: Arc<DbConn>) -> Self {
        Self { db }
    }
}

fn map_db_err(err: DbErr) -> RepoError {
    if let Some(SqlErr::UniqueConstraintViolation(detail)) = err.sql_err() {
        return RepoError::Constraint(detail);
    }
    match err {
        DbErr::RecordNotFound(_) | DbErr::RecordNotUpdated => RepoError::NotFound,
        DbErr::Conn(e) => RepoError::Connection(e.to_string()),
        DbErr::ConnectionAcquire(e) => RepoError::Connection(e.to_string()),
        other => RepoError::Query(other.to_string()),
    }
}

#[async_trait]
impl BaseRepository<BlogPost, Uuid> for PostgresBlogPostRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<BlogPost>, RepoError> {
        let result = BlogPostEntity::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }

    async fn insert(&self, post: BlogPost) -> Result<BlogPost, RepoError> {
        let active_model: blog_post::ActiveModel = post.into();
        let model = active_model.insert(self.db.as_ref()).await.map_err(map_db_err)?;

        Ok(model.into())
    }

    async fn update(&self, post: BlogPost) -> Result<BlogPost, RepoError> {
        let active_model: blog_post::ActiveModel = post.into();
        let model = active_model.update(self.db.as_ref()).await.map_err(map_db_err)?;

        Ok(model.into())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let result = BlogPostEntity::delete_by_id(id)
            .exec(self.db.as_ref())
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }
}

#[async_trait]
impl BlogPostRepository for PostgresBlogPostRepository {
    async fn list(&self) -> Result<Vec<BlogPost>, RepoError> {
        let result = BlogPostEntity::find()
            .order_by_asc(blog_post::Column::Created)
            .all(self.db.as_ref())
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn count(&self) -> Result<u64, RepoError> {
        BlogPostEntity::find()
            .count(self.db.as_ref())
            .await
            .map_err(map_db_err)
    }
}
