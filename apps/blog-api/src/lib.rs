//! # Blog API
//!
//! Actix-web server exposing the blog post collection over HTTP.
//! The binary in `main.rs` wires configuration, telemetry and
//! [`server::BlogServer`]; tests build the same routes against an
//! in-memory store.

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod observability;
pub mod server;
pub mod state;
pub mod telemetry;

pub use config::AppConfig;
pub use server::{BlogServer, ServerError};
pub use state::AppState;
