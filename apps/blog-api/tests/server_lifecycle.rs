//! Starts a real listener on an ephemeral port and shuts it down again.

use blog_api::{AppConfig, BlogServer};
use serde_json::{Value, json};

#[actix_web::test]
async fn server_serves_requests_until_stopped() {
    let server = BlogServer::start(&AppConfig::ephemeral()).await.unwrap();
    let base = format!("http://{}", server.local_addr());

    let created: Value = reqwest::Client::new()
        .post(format!("{base}/posts"))
        .json(&json!({
            "author": {"firstName": "Jane", "lastName": "Doe"},
            "title": "T",
            "content": "C"
        }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(created["author"], "Jane Doe");

    let resp = reqwest::get(format!("{base}/posts")).await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
    assert!(resp.headers().contains_key("x-request-id"));
    let posts: Vec<Value> = resp.json().await.unwrap();
    assert_eq!(posts.len(), 1);

    server.stop().await.unwrap();

    assert!(reqwest::get(format!("{base}/posts")).await.is_err());
}

#[actix_web::test]
async fn start_fails_when_port_is_taken() {
    let first = BlogServer::start(&AppConfig::ephemeral()).await.unwrap();

    let mut config = AppConfig::ephemeral();
    config.port = first.local_addr().port();

    let second = BlogServer::start(&config).await;
    assert!(matches!(second, Err(blog_api::ServerError::Bind(_))));

    first.stop().await.unwrap();
}
