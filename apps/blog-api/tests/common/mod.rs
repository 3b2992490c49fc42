//! Shared fixtures for the HTTP integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use rand::Rng;
use rand::seq::SliceRandom;
use uuid::Uuid;

use blog_core::domain::{Author, BlogPost, NewBlogPost};
use blog_core::error::RepoError;
use blog_core::ports::{BaseRepository, BlogPostRepository};

const FIRST_NAMES: &[&str] = &["Ada", "Grace", "Alan", "Edsger", "Barbara", "Donald", "Frances"];
const LAST_NAMES: &[&str] = &["Lovelace", "Hopper", "Turing", "Dijkstra", "Liskov", "Knuth", "Allen"];
const WORDS: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed", "do",
];

/// Number of posts every seeded test starts with.
pub const SEED_COUNT: usize = 9;

fn sentence<R: Rng>(rng: &mut R, words: std::ops::Range<usize>) -> String {
    let len = rng.gen_range(words);
    WORDS
        .choose_multiple(rng, len)
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}

/// A random, valid post.
pub fn generate_blog_post() -> BlogPost {
    let mut rng = rand::thread_rng();
    let first_name = FIRST_NAMES.choose(&mut rng).copied().unwrap_or("Ada");
    let last_name = LAST_NAMES.choose(&mut rng).copied().unwrap_or("Lovelace");

    BlogPost::new(NewBlogPost {
        author: Author {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
        },
        title: sentence(&mut rng, 2..5),
        content: sentence(&mut rng, 5..WORDS.len()),
    })
}

/// Insert `SEED_COUNT` generated posts.
pub async fn seed_blog_posts(repo: &Arc<dyn BlogPostRepository>) -> Vec<BlogPost> {
    let mut seeded = Vec::with_capacity(SEED_COUNT);
    for _ in 0..SEED_COUNT {
        seeded.push(repo.insert(generate_blog_post()).await.expect("seed insert"));
    }
    seeded
}

/// Build an initialized actix test service over the given repository.
#[allow(unused_macros)]
macro_rules! test_app {
    ($repo:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new(blog_api::AppState::new($repo)))
                .configure(blog_api::handlers::configure_routes),
        )
        .await
    };
}

/// A store whose every call fails as if the database were unreachable.
pub struct FailingBlogPostRepository;

fn unreachable_store() -> RepoError {
    RepoError::Connection("connection refused (password=hunter2)".to_string())
}

#[async_trait]
impl BaseRepository<BlogPost, Uuid> for FailingBlogPostRepository {
    async fn find_by_id(&self, _id: Uuid) -> Result<Option<BlogPost>, RepoError> {
        Err(unreachable_store())
    }

    async fn insert(&self, _post: BlogPost) -> Result<BlogPost, RepoError> {
        Err(unreachable_store())
    }

    async fn update(&self, _post: BlogPost) -> Result<BlogPost, RepoError> {
        Err(unreachable_store())
    }

    async fn delete(&self, _id: Uuid) -> Result<(), RepoError> {
        Err(unreachable_store())
    }
}

#[async_trait]
impl BlogPostRepository for FailingBlogPostRepository {
    async fn list(&self) -> Result<Vec<BlogPost>, RepoError> {
        Err(unreachable_store())
    }

    async fn count(&self) -> Result<u64, RepoError> {
        Err(unreachable_store())
    }
}
