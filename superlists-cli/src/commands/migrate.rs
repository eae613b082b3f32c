//! Schema setup command

use anyhow::{Context, Result};
use clap::Parser;

use super::DatabaseArgs;

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    #[command(flatten)]
    pub db: DatabaseArgs,
}

/// Create the lists/items tables if they don't exist
pub async fn run_migrate(args: MigrateArgs) -> Result<()> {
    let store = superlists_server::connect(&args.db.database_url, args.db.max_connections)
        .await
        .context("Failed to open database")?;

    store.migrate().await.context("Migration failed")?;

    tracing::info!("Database schema is up to date");
    Ok(())
}
