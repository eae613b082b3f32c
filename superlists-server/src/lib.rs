//! superlists-server: to-do lists, one URL per list
//!
//! Visitors start a list from the home page, get redirected to the
//! list's own URL and keep appending items there. No accounts, no
//! sharing: knowing the URL is the only way to see a list.

pub mod db;
pub mod http;
pub mod models;
pub mod state;

pub use db::{connect, DbError, ListStore};
pub use http::{build_router, run_server, ServerConfig, ServerError};
pub use state::AppState;
