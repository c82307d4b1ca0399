//! HTTP server command
//!
//! Resolves listen address and database path (flag > config file > default),
//! then runs the to-do server until shutdown.

use anyhow::{Context, Result};
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

use ticklist_server::{default_db_path, run_server, ServerConfig};

use crate::config::AppConfig;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Port to listen on (default: 5000)
    #[arg(long, short = 'p')]
    pub port: Option<u16>,

    /// Address to bind (default: 127.0.0.1)
    #[arg(long, short = 'b')]
    pub bind: Option<String>,

    /// Database file (default: ~/.ticklist/todos.db)
    #[arg(long, env = "TICKLIST_DB")]
    pub db_path: Option<PathBuf>,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let file = AppConfig::load().context("Failed to load config")?;
    let config = resolve(args, file)?;

    tracing::info!("Starting ticklist server on {}", config.bind_addr);

    // Run server (blocks until shutdown)
    run_server(config).await.context("Server error")?;

    Ok(())
}

/// Merge CLI flags over config-file values over built-in defaults
fn resolve(args: ServeArgs, file: AppConfig) -> Result<ServerConfig> {
    let bind = args
        .bind
        .or(file.server.bind)
        .unwrap_or_else(|| "127.0.0.1".to_string());
    let port = args.port.or(file.server.port).unwrap_or(5000);
    let db_path = args
        .db_path
        .or(file.storage.db_path)
        .unwrap_or_else(default_db_path);

    let bind_addr: SocketAddr = format!("{bind}:{port}")
        .parse()
        .context(format!("Invalid bind address: {bind}:{port}"))?;

    Ok(ServerConfig { bind_addr, db_path })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_args() -> ServeArgs {
        ServeArgs {
            port: None,
            bind: None,
            db_path: None,
        }
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = resolve(no_args(), AppConfig::default()).unwrap();

        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:5000");
        assert!(config.db_path.ends_with(".ticklist/todos.db"));
    }

    #[test]
    fn config_file_overrides_defaults() {
        let file: AppConfig = toml::from_str(
            "[server]\nbind = \"0.0.0.0\"\nport = 8080\n\n[storage]\ndb_path = \"/tmp/file.db\"\n",
        )
        .unwrap();

        let config = resolve(no_args(), file).unwrap();
        assert_eq!(config.bind_addr.to_string(), "0.0.0.0:8080");
        assert_eq!(config.db_path, PathBuf::from("/tmp/file.db"));
    }

    #[test]
    fn flags_override_config_file() {
        let file: AppConfig = toml::from_str(
            "[server]\nbind = \"0.0.0.0\"\nport = 8080\n\n[storage]\ndb_path = \"/tmp/file.db\"\n",
        )
        .unwrap();

        let args = ServeArgs {
            port: Some(9000),
            bind: None,
            db_path: Some(PathBuf::from("/tmp/flag.db")),
        };

        // Flags win where given; the file still supplies the bind address
        let config = resolve(args, file).unwrap();
        assert_eq!(config.bind_addr.to_string(), "0.0.0.0:9000");
        assert_eq!(config.db_path, PathBuf::from("/tmp/flag.db"));
    }

    #[test]
    fn bad_bind_address_is_an_error() {
        let args = ServeArgs {
            port: None,
            bind: Some("not an address".to_string()),
            db_path: None,
        };

        assert!(resolve(args, AppConfig::default()).is_err());
    }
}
