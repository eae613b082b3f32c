//! Database layer - repository interface and its sqlx backends
//!
//! # Design Principles
//!
//! - Handlers only see `ListStore`, never a concrete pool
//! - Connection pool with a fixed upper bound
//! - Multi-step writes run in a transaction
//! - Items are always read back in insertion order

pub mod postgres;
pub mod sqlite;
pub mod store;

pub use postgres::PgStore;
pub use sqlite::SqliteStore;
pub use store::{connect, DbError, ListStore, DEFAULT_MAX_CONNECTIONS};
