//! Command implementations for the superlists CLI

pub mod migrate;
pub mod serve;

pub use migrate::run_migrate;
pub use serve::run_serve;

use clap::Args;

/// Database connection options shared by every command
#[derive(Args, Debug, Clone)]
pub struct DatabaseArgs {
    /// Database URL (sqlite://path or postgres://...)
    #[arg(long, env = "DATABASE_URL", default_value = "sqlite://superlists.db")]
    pub database_url: String,

    /// Maximum pooled database connections
    #[arg(long, default_value_t = superlists_server::db::DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,
}
