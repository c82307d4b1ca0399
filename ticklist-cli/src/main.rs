//! ticklist CLI - single-table to-do list served over HTTP
//!
//! This is the entry point for the `ticklist` command-line tool, which
//! provides:
//! - HTTP server hosting the to-do home page and its add/update/delete
//!   routes (`serve` subcommand)
//! - Configuration resolution from flags, `TICKLIST_DB`, and the optional
//!   `~/.ticklist/config.toml`

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod config;

#[derive(Parser, Debug)]
#[command(
    name = "ticklist",
    author,
    version,
    about = "Minimal to-do list served over HTTP",
    long_about = "Serve a single-table to-do list as a plain HTML page. Records \
                  live in one SQLite file; add, toggle, and delete them from the \
                  rendered page."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP server (home page, add/update/delete routes)
    Serve(commands::serve::ServeArgs),
}

fn init_tracing() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing().ok();
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await?,
    }
    Ok(())
}
