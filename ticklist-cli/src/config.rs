//! Optional TOML configuration for the ticklist CLI
//!
//! Loaded from `~/.ticklist/config.toml`. Every key is optional and a missing
//! file is not an error; the application runs with zero configuration.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// On-disk configuration
///
/// ```toml
/// [server]
/// bind = "127.0.0.1"
/// port = 5000
///
/// [storage]
/// db_path = "/var/lib/ticklist/todos.db"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerSection,
    #[serde(default)]
    pub storage: StorageSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServerSection {
    pub bind: Option<String>,
    pub port: Option<u16>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StorageSection {
    pub db_path: Option<PathBuf>,
}

impl AppConfig {
    /// Load config from the default location
    ///
    /// A missing file yields defaults. A file that exists but does not parse
    /// is a hard error.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .context(format!("Failed to read config file: {:?}", path))?;

        toml::from_str(&content)
            .context(format!("Failed to parse config file (invalid TOML): {:?}", path))
    }

    /// Get config file path: ~/.ticklist/config.toml
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".ticklist/config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_from(&dir.path().join("config.toml")).unwrap();

        assert!(config.server.bind.is_none());
        assert!(config.server.port.is_none());
        assert!(config.storage.db_path.is_none());
    }

    #[test]
    fn full_file_parses() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "[server]\nbind = \"0.0.0.0\"\nport = 8080\n\n[storage]\ndb_path = \"/tmp/todos.db\"\n",
        )
        .unwrap();

        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.server.bind.as_deref(), Some("0.0.0.0"));
        assert_eq!(config.server.port, Some(8080));
        assert_eq!(config.storage.db_path, Some(PathBuf::from("/tmp/todos.db")));
    }

    #[test]
    fn partial_file_leaves_other_keys_unset() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[server]\nport = 9999\n").unwrap();

        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.server.port, Some(9999));
        assert!(config.server.bind.is_none());
        assert!(config.storage.db_path.is_none());
    }

    #[test]
    fn invalid_toml_is_a_hard_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[server\nport = oops").unwrap();

        assert!(AppConfig::load_from(&path).is_err());
    }
}
