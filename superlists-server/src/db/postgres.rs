//! PostgreSQL-backed list store

use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions};

use super::{DbError, ListStore};
use crate::models::{Item, ItemText, ListId, TodoList};

const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS lists (
        id BIGSERIAL PRIMARY KEY
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS items (
        id BIGSERIAL PRIMARY KEY,
        text TEXT NOT NULL,
        list_id BIGINT NOT NULL REFERENCES lists(id)
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_items_list ON items(list_id, id)",
];

/// PostgreSQL list store
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Create a PostgreSQL connection pool.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection fails.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, DbError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;

        Ok(Self { pool })
    }
}

#[async_trait]
impl ListStore for PgStore {
    async fn migrate(&self) -> Result<(), DbError> {
        tracing::info!("Running PostgreSQL migrations...");
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
        let list = sqlx::query_as::<_, TodoList>("INSERT INTO lists DEFAULT VALUES RETURNING id")
            .fetch_one(&self.pool)
            .await?;

        Ok(list)
    }

    async fn create_item(&self, list_id: ListId, text: &ItemText) -> Result<Item, DbError> {
        sqlx::query_as::<_, Item>(
            r#"
            INSERT INTO items (text, list_id)
            SELECT $1, id FROM lists WHERE id = $2
            RETURNING id, text, list_id
            "#,
        )
        .bind(text.as_str())
        .bind(list_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DbError::list_not_found(list_id))
    }

    async fn get_list(&self, id: ListId) -> Result<TodoList, DbError> {
        sqlx::query_as::<_, TodoList>("SELECT id FROM lists WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| DbError::list_not_found(id))
    }

    async fn list_items(&self, list_id: ListId) -> Result<Vec<Item>, DbError> {
        let items = sqlx::query_as::<_, Item>(
            "SELECT id, text, list_id FROM items WHERE list_id = $1 ORDER BY id ASC",
        )
        .bind(list_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }

    async fn create_list_with_item(&self, text: &ItemText) -> Result<(TodoList, Item), DbError> {
        let mut tx = self.pool.begin().await?;

        let list = sqlx::query_as::<_, TodoList>("INSERT INTO lists DEFAULT VALUES RETURNING id")
            .fetch_one(&mut *tx)
            .await?;

        let item = sqlx::query_as::<_, Item>(
            r#"
            INSERT INTO items (text, list_id)
            VALUES ($1, $2)
            RETURNING id, text, list_id
            "#,
        )
        .bind(text.as_str())
        .bind(list.id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok((list, item))
    }
}
