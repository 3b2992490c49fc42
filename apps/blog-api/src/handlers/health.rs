//! Health check endpoint.

use actix_web::{HttpResponse, web};
use blog_core::ports::BlogPostRepository;
use blog_shared::ErrorResponse;
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub timestamp: String,
    pub posts: u64,
}

/// Health check endpoint - reports whether the store answers.
///
/// GET /health
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    match state.posts.count().await {
        Ok(posts) => HttpResponse::Ok().json(HealthResponse {
            status: "ok",
            version: env!("CARGO_PKG_VERSION"),
            timestamp: chrono::Utc::now().to_rfc3339(),
            posts,
        }),
        Err(e) => {
            tracing::warn!(error = %e, "Health check could not reach the store");
            HttpResponse::ServiceUnavailable()
                .json(ErrorResponse::service_unavailable().with_detail("Store unreachable"))
        }
    }
}
