//! HTTP server command
//!
//! Runs the to-do list web app until Ctrl+C / SIGTERM.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use superlists_server::{connect, run_server, ServerConfig};

use super::DatabaseArgs;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "SUPERLISTS_BIND", default_value = "127.0.0.1:8000")]
    pub bind: SocketAddr,

    /// Host name to accept in the Host header (repeatable, comma separated
    /// in the environment). Leave unset to accept any host.
    #[arg(long = "allowed-host", env = "SITENAME", value_delimiter = ',')]
    pub allowed_hosts: Vec<String>,

    /// Directory served under /static (defaults to the bundled assets)
    #[arg(long, env = "SUPERLISTS_STATIC_DIR")]
    pub static_dir: Option<PathBuf>,

    #[command(flatten)]
    pub db: DatabaseArgs,
}

impl ServeArgs {
    fn server_config(&self) -> ServerConfig {
        let defaults = ServerConfig::default();
        ServerConfig {
            bind_addr: self.bind,
            allowed_hosts: self.allowed_hosts.clone(),
            static_dir: self.static_dir.clone().unwrap_or(defaults.static_dir),
        }
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    tracing::info!("Starting superlists server on {}", args.bind);

    let store = connect(&args.db.database_url, args.db.max_connections)
        .await
        .context("Failed to open database")?;

    // Blocks until shutdown
    run_server(store, args.server_config())
        .await
        .context("Server error")?;

    Ok(())
}
