//! HTTP handlers and route configuration.

mod health;
mod mapping;
mod posts;

use actix_web::web;

use crate::middleware::error::{json_error_handler, path_error_handler};

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler))
        .route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/posts")
                .route("", web::get().to(posts::list_posts))
                .route("", web::post().to(posts::create_post))
                .route("/{id}", web::get().to(posts::get_post))
                .route("/{id}", web::put().to(posts::update_post))
                .route("/{id}", web::delete().to(posts::delete_post)),
        );
}
