use std::sync::Arc;
#[cfg(feature = "postgres")]
use std::time::Duration;

use blog_core::error::RepoError;
use blog_core::ports::BlogPostRepository;

#[cfg(feature = "postgres")]
use sea_orm::{ConnectOptions, Database, DbConn};

use super::memory::InMemoryBlogPostRepository;
#[cfg(feature = "postgres")]
use super::postgres_repo::PostgresBlogPostRepository;

/// URL scheme that selects the in-process store.
pub const MEMORY_URL_SCHEME: &str = "memory:";

/// Configuration for the blog post store.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

impl DatabaseConfig {
    /// Configuration for the in-process store.
    pub fn in_memory() -> Self {
        Self {
            url: format!("{MEMORY_URL_SCHEME}//"),
            max_connections: 1,
            min_connections: 1,
        }
    }

    pub fn is_in_memory(&self) -> bool {
        self.url.starts_with(MEMORY_URL_SCHEME)
    }
}

/// An open connection to the blog post store.
///
/// Acquired once at startup and closed once at shutdown. Repositories handed
/// out by [`StoreConnection::repository`] share the underlying pool.
///
/// # Example
/// ```ignore
/// let store = StoreConnection::connect(&config).await?;
/// let posts = store.repository();
/// let all = posts.list().await?;
/// store.close().await?;
/// ```
pub enum StoreConnection {
    #[cfg(feature = "postgres")]
    Postgres(Arc<DbConn>),
    Memory(Arc<InMemoryBlogPostRepository>),
}

impl StoreConnection {
    /// Open the store described by `config`.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, RepoError> {
        if config.is_in_memory() {
            tracing::info!("Using in-memory blog post store");
            return Ok(Self::in_memory());
        }

        Self::connect_postgres(config).await
    }

    pub fn in_memory() -> Self {
        Self::Memory(Arc::new(InMemoryBlogPostRepository::new()))
    }

    #[cfg(feature = "postgres")]
    async fn connect_postgres(config: &DatabaseConfig) -> Result<Self, RepoError> {
        tracing::info!("Connecting to blog post database...");

        let opts = ConnectOptions::new(&config.url)
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .connect_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .sqlx_logging(true)
            .to_owned();

        let conn = Database::connect(opts)
            .await
            .map_err(|e| RepoError::Connection(e.to_string()))?;

        tracing::info!(
            "Blog post database connected (pool: {})",
            config.max_connections
        );

        Ok(Self::Postgres(Arc::new(conn)))
    }

    #[cfg(not(feature = "postgres"))]
    async fn connect_postgres(config: &DatabaseConfig) -> Result<Self, RepoError> {
        Err(RepoError::Connection(format!(
            "cannot open {}: built without the postgres feature",
            config.url
        )))
    }

    /// A repository bound to this connection.
    pub fn repository(&self) -> Arc<dyn BlogPostRepository> {
        match self {
            #[cfg(feature = "postgres")]
            Self::Postgres(conn) => Arc::new(PostgresBlogPostRepository::new(Arc::clone(conn))),
            Self::Memory(repo) => repo.clone(),
        }
    }

    /// Release the connection. Repositories obtained earlier stop working.
    pub async fn close(self) -> Result<(), RepoError> {
        match self {
            #[cfg(feature = "postgres")]
            Self::Postgres(conn) => {
                conn.close_by_ref()
                    .await
                    .map_err(|e| RepoError::Connection(e.to_string()))?;
                tracing::info!("Blog post database connection closed");
            }
            Self::Memory(repo) => {
                repo.clear().await;
                tracing::info!("In-memory blog post store released");
            }
        }
        Ok(())
    }
}
