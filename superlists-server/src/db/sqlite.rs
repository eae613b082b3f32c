//! SQLite-backed list store
//!
//! Default backend for development and tests. The file is created on
//! first connect and foreign keys are enforced.

use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};

use super::{DbError, ListStore};
use crate::models::{Item, ItemText, ListId, TodoList};

const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS lists (
        id INTEGER PRIMARY KEY AUTOINCREMENT
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS items (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        text TEXT NOT NULL,
        list_id INTEGER NOT NULL REFERENCES lists(id)
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_items_list ON items(list_id, id)",
];

/// SQLite list store
#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Connect to a SQLite database, creating the file if missing.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, DbError> {
        let options = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(5))
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await?;

        Ok(Self { pool })
    }

    /// Private in-memory database with the schema already applied.
    ///
    /// Each SQLite connection to `:memory:` gets its own database, so
    /// the pool holds exactly one connection and never recycles it.
    pub async fn in_memory() -> Result<Self, DbError> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        let store = Self { pool };
        store.migrate().await?;
        Ok(store)
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl ListStore for SqliteStore {
    async fn migrate(&self) -> Result<(), DbError> {
        tracing::info!("Running SQLite migrations...");
        for statement in SCHEMA {
            sqlx::query(statement).execute(&self.pool).await?;
        }
        Ok(())
    }

    async fn ping(&self) -> Result<(), DbError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn create_list(&self) -> Result<TodoList, DbError> {
        let result = sqlx::query("INSERT INTO lists DEFAULT VALUES")
            .execute(&self.pool)
            .await?;

        Ok(TodoList {
            id: ListId::new(result.last_insert_rowid()),
        })
    }

    async fn create_item(&self, list_id: ListId, text: &ItemText) -> Result<Item, DbError> {
        // One statement: the existence check and the write share the write lock
        let result = sqlx::query("INSERT INTO items (text, list_id) SELECT ?, id FROM lists WHERE id = ?")
            .bind(text.as_str())
            .bind(list_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::list_not_found(list_id));
        }

        Ok(Item {
            id: result.last_insert_rowid(),
            text: text.as_str().to_owned(),
            list_id,
        })
    }

    async fn get_list(&self, id: ListId) -> Result<TodoList, DbError> {
        sqlx::query_as::<_, TodoList>("SELECT id FROM lists WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| DbError::list_not_found(id))
    }

    async fn list_items(&self, list_id: ListId) -> Result<Vec<Item>, DbError> {
        let items = sqlx::query_as::<_, Item>(
            "SELECT id, text, list_id FROM items WHERE list_id = ? ORDER BY id ASC",
        )
        .bind(list_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }

    async fn create_list_with_item(&self, text: &ItemText) -> Result<(TodoList, Item), DbError> {
        let mut tx = self.pool.begin().await?;

        let list_id = sqlx::query("INSERT INTO lists DEFAULT VALUES")
            .execute(&mut *tx)
            .await?
            .last_insert_rowid();
        let list_id = ListId::new(list_id);

        let item_id = sqlx::query("INSERT INTO items (text, list_id) VALUES (?, ?)")
            .bind(text.as_str())
            .bind(list_id)
            .execute(&mut *tx)
            .await?
            .last_insert_rowid();

        tx.commit().await?;

        Ok((
            TodoList { id: list_id },
            Item {
                id: item_id,
                text: text.as_str().to_owned(),
                list_id,
            },
        ))
    }
}
