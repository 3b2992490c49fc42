//! Server lifecycle - the store connection and the HTTP listener are
//! acquired together and released together.

use std::net::SocketAddr;

use actix_web::dev::ServerHandle;
use actix_web::{App, HttpServer, web};
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing_actix_web::TracingLogger;

use blog_core::error::RepoError;
use blog_infra::StoreConnection;

use crate::config::AppConfig;
use crate::handlers;
use crate::observability::RequestIdMiddleware;
use crate::state::AppState;

/// Seconds in-flight requests get to finish once stop is requested.
const SHUTDOWN_TIMEOUT_SECS: u64 = 10;

/// Startup and shutdown failures.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("store unavailable: {0}")]
    Store(#[from] RepoError),

    #[error("failed to bind HTTP listener: {0}")]
    Bind(#[from] std::io::Error),
}

/// A running blog API: listener plus the store it serves.
pub struct BlogServer {
    handle: ServerHandle,
    task: JoinHandle<std::io::Result<()>>,
    store: StoreConnection,
    addrs: Vec<SocketAddr>,
}

impl BlogServer {
    /// Open the store, then bind and start the listener.
    ///
    /// If binding fails the store is closed again before returning.
    pub async fn start(config: &AppConfig) -> Result<Self, ServerError> {
        let store = StoreConnection::connect(&config.database).await?;
        let state = AppState::new(store.repository());

        let bound = HttpServer::new(move || {
            App::new()
                .wrap(RequestIdMiddleware)
                .wrap(TracingLogger::default())
                .app_data(web::Data::new(state.clone()))
                .configure(handlers::configure_routes)
        })
        .disable_signals()
        .shutdown_timeout(SHUTDOWN_TIMEOUT_SECS)
        .bind((config.host.as_str(), config.port));

        let server = match bound {
            Ok(server) => server,
            Err(e) => {
                if let Err(close_err) = store.close().await {
                    tracing::warn!(error = %close_err, "Failed to close store after bind error");
                }
                return Err(e.into());
            }
        };

        let addrs = server.addrs();
        let server = server.run();
        let handle = server.handle();
        let task = tokio::spawn(server);

        tracing::info!(?addrs, "Blog API listening");

        Ok(Self {
            handle,
            task,
            store,
            addrs,
        })
    }

    /// First bound address. Useful when started on port 0.
    pub fn local_addr(&self) -> SocketAddr {
        self.addrs[0]
    }

    /// Stop accepting connections, drain in-flight requests, then close the store.
    pub async fn stop(self) -> Result<(), ServerError> {
        tracing::info!("Stopping HTTP listener");
        self.handle.stop(true).await;

        match self.task.await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => tracing::warn!(error = %e, "HTTP server exited with error"),
            Err(e) => tracing::warn!(error = %e, "HTTP server task failed"),
        }

        self.store.close().await?;
        tracing::info!("Blog API stopped");
        Ok(())
    }
}
