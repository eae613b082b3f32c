//! Repository interface for lists and items

use std::sync::Arc;

use async_trait::async_trait;

use super::{PgStore, SqliteStore};
use crate::models::{Item, ItemText, ListId, TodoList};

/// Default maximum connections for the pool.
/// Kept low, every request does at most a couple of queries.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },

    #[error("unsupported database url '{0}' (expected sqlite: or postgres:)")]
    UnsupportedUrl(String),
}

impl DbError {
    pub(crate) fn list_not_found(id: ListId) -> Self {
        Self::NotFound {
            resource: "list",
            id: id.to_string(),
        }
    }
}

/// Storage for to-do lists and their items.
///
/// Every method is a single round trip or a single transaction.
#[async_trait]
pub trait ListStore: Send + Sync {
    /// Create the tables if they don't exist yet.
    async fn migrate(&self) -> Result<(), DbError>;

    /// Round trip to the database; fails when it can't be reached.
    async fn ping(&self) -> Result<(), DbError>;

    /// Create an empty list.
    async fn create_list(&self) -> Result<TodoList, DbError>;

    /// Append an item to an existing list.
    ///
    /// Fails with `DbError::NotFound` if the list doesn't exist.
    async fn create_item(&self, list_id: ListId, text: &ItemText) -> Result<Item, DbError>;

    /// Fetch a list by id.
    async fn get_list(&self, id: ListId) -> Result<TodoList, DbError>;

    /// All items of a list, oldest first.
    async fn list_items(&self, list_id: ListId) -> Result<Vec<Item>, DbError>;

    /// Create a list together with its first item (atomic).
    async fn create_list_with_item(&self, text: &ItemText) -> Result<(TodoList, Item), DbError>;
}

/// Open a store for the given database URL.
///
/// `sqlite:` URLs open (or create) a SQLite database,
/// `postgres:`/`postgresql:` URLs connect to PostgreSQL.
///
/// # Example
///
/// ```ignore
/// let store = connect("sqlite://superlists.db", DEFAULT_MAX_CONNECTIONS).await?;
/// store.migrate().await?;
/// ```
pub async fn connect(
    database_url: &str,
    max_connections: u32,
) -> Result<Arc<dyn ListStore>, DbError> {
    if database_url.starts_with("sqlite:") {
        let store = SqliteStore::connect(database_url, max_connections).await?;
        tracing::debug!("Using SQLite store");
        Ok(Arc::new(store))
    } else if database_url.starts_with("postgres:") || database_url.starts_with("postgresql:") {
        let store = PgStore::connect(database_url, max_connections).await?;
        tracing::debug!("Using PostgreSQL store");
        Ok(Arc::new(store))
    } else {
        Err(DbError::UnsupportedUrl(database_url.to_owned()))
    }
}
