//! Configuration for the coral client.
//!
//! Config directory resolution order:
//! 1. Explicit path passed to Config::load_from()
//! 2. CORAL_ROOT environment variable
//! 3. Default: ~/.config/coral

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Coral client configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Endpoint path that composed queries are issued against.
    #[serde(default = "default_query_path")]
    pub query_path: String,

    /// Page size applied to requests that leave `size` unset.
    #[serde(default)]
    pub default_page_size: Option<u64>,
}

fn default_query_path() -> String {
    "query".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            query_path: default_query_path(),
            default_page_size: None,
        }
    }
}

impl Config {
    /// Load config using the default directory resolution order.
    pub fn load() -> Result<Self> {
        Self::load_from(&resolve_coral_root()?)
    }

    /// Load config from `<coral_root>/config.toml`, or create a default.
    pub fn load_from(coral_root: &Path) -> Result<Self> {
        let config_path = coral_root.join("config.toml");

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path)?;
            toml::from_str(&contents)
                .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))
        } else {
            Ok(Self::default())
        }
    }

    /// Save config to `<coral_root>/config.toml`.
    pub fn save_to(&self, coral_root: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(coral_root.join("config.toml"), contents)?;
        Ok(())
    }

    /// Set the default page size.
    pub fn with_default_page_size(mut self, size: u64) -> Self {
        self.default_page_size = Some(size);
        self
    }

    /// Set the query endpoint path.
    pub fn with_query_path(mut self, path: impl Into<String>) -> Self {
        self.query_path = path.into();
        self
    }
}

/// Resolve the config directory using the standard resolution order.
fn resolve_coral_root() -> Result<PathBuf> {
    // 1. Environment variable
    if let Ok(path) = std::env::var("CORAL_ROOT") {
        return Ok(PathBuf::from(path));
    }

    // 2. XDG config directory (via directories crate)
    if let Some(proj_dirs) = ProjectDirs::from("", "", "coral") {
        return Ok(proj_dirs.config_dir().to_path_buf());
    }

    // 3. Fallback to ~/.config/coral
    let home = std::env::var("HOME")
        .map_err(|_| Error::Config("Could not determine home directory".to_string()))?;
    Ok(PathBuf::from(home).join(".config/coral"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert_eq!(config.query_path, "query");
        assert!(config.default_page_size.is_none());
    }

    #[test]
    fn test_config_builders() {
        let config = Config::default()
            .with_default_page_size(64)
            .with_query_path("v2/query");
        assert_eq!(config.default_page_size, Some(64));
        assert_eq!(config.query_path, "v2/query");
    }

    #[test]
    fn test_config_load_missing_file_is_default() {
        let tmp = TempDir::new().unwrap();
        let config = Config::load_from(tmp.path()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_config_save_load() {
        let tmp = TempDir::new().unwrap();

        let config = Config::default().with_default_page_size(128);
        config.save_to(tmp.path()).unwrap();

        let loaded = Config::load_from(tmp.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_config_rejects_invalid_toml() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("config.toml"), "query_path = [not toml").unwrap();

        let result = Config::load_from(tmp.path());
        assert!(matches!(result, Err(Error::Config(_))));
    }
}
