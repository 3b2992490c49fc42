//! Blog post resource handlers.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use blog_core::domain::{BlogPost, BlogPostPatch, NewBlogPost};
use blog_core::error::{DomainError, RepoError};
use blog_core::ports::{BaseRepository, BlogPostRepository};
use blog_shared::dto::{BlogPostResponse, CreateBlogPostRequest, UpdateBlogPostRequest};

use super::mapping::{create_input, to_public, update_input};
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

const ENTITY: &str = "BlogPost";

fn not_found(id: Uuid) -> AppError {
    DomainError::NotFound {
        entity_type: ENTITY,
        id,
    }
    .into()
}

/// GET /posts
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.list().await?;
    let body: Vec<BlogPostResponse> = posts.iter().map(to_public).collect();

    Ok(HttpResponse::Ok().json(body))
}

/// GET /posts/{id}
pub async fn get_post(state: web::Data<AppState>, path: web::Path<Uuid>) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let post = state.posts.find_by_id(id).await?.ok_or_else(|| not_found(id))?;

    Ok(HttpResponse::Ok().json(to_public(&post)))
}

/// POST /posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<CreateBlogPostRequest>,
) -> AppResult<HttpResponse> {
    // Validate before touching the store
    let input = NewBlogPost::try_from(create_input(body.into_inner()))?;

    let saved = state.posts.insert(BlogPost::new(input)).await?;
    tracing::info!(post_id = %saved.id, "Blog post created");

    Ok(HttpResponse::Created().json(to_public(&saved)))
}

/// PUT /posts/{id}
///
/// Merges the provided fields into the stored post. Responds 201.
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<UpdateBlogPostRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let req = body.into_inner();

    if let Some(body_id) = req.id.as_deref() {
        if Uuid::parse_str(body_id).ok() != Some(id) {
            return Err(AppError::BadRequest(format!(
                "Request path id ({}) and request body id ({}) must match",
                id, body_id
            )));
        }
    }

    let patch = BlogPostPatch::try_from(update_input(req))?;
    if patch.is_empty() {
        tracing::debug!(post_id = %id, "Update request carries no fields");
    }

    let mut post = state.posts.find_by_id(id).await?.ok_or_else(|| not_found(id))?;
    post.apply(patch);

    let updated = state.posts.update(post).await.map_err(|e| match e {
        // Deleted between the read and the write
        RepoError::NotFound => not_found(id),
        other => other.into(),
    })?;
    tracing::info!(post_id = %id, "Blog post updated");

    Ok(HttpResponse::Created().json(to_public(&updated)))
}

/// DELETE /posts/{id}
pub async fn delete_post(state: web::Data<AppState>, path: web::Path<Uuid>) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    state.posts.delete(id).await.map_err(|e| match e {
        RepoError::NotFound => not_found(id),
        other => other.into(),
    })?;
    tracing::info!(post_id = %id, "Blog post deleted");

    Ok(HttpResponse::NoContent().finish())
}
