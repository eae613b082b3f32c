//! HTTP server layer
//!
//! Axum server with:
//! - Server-rendered HTML pages (askama templates)
//! - Allowed-hosts check
//! - Request tracing
//! - Graceful shutdown

pub mod error;
pub mod extractors;
pub mod hosts;
pub mod routes;
pub mod server;
pub mod templates;

pub use error::ApiError;
pub use server::{build_router, run_server, ServerConfig, ServerError};
