//! Session configuration.
//!
//! Configuration is a small YAML document; every field is optional:
//!
//! ```yaml
//! search_delay_ms: 1000
//! favorites_key: favorites
//! storage_dir: /var/lib/recipe-quest
//! catalog_path: ./recipes.yaml
//! ```

use crate::favorites::DEFAULT_FAVORITES_KEY;
use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};
use std::fs;
use std::time::Duration;
use thiserror::Error;

/// Default simulated search latency.
pub const DEFAULT_SEARCH_DELAY_MS: u64 = 1000;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] serde_yaml::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscoveryConfig {
    /// Artificial latency before a submitted search commits its results
    pub search_delay_ms: u64,
    /// Storage key for the favourites set
    pub favorites_key: String,
    /// Directory for persisted state; favourites stay in memory when unset
    pub storage_dir: Option<Utf8PathBuf>,
    /// YAML catalog document (a file) or recipe directory; the built-in
    /// sample catalog is used when unset
    pub catalog_path: Option<Utf8PathBuf>,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        DiscoveryConfig {
            search_delay_ms: DEFAULT_SEARCH_DELAY_MS,
            favorites_key: DEFAULT_FAVORITES_KEY.to_string(),
            storage_dir: None,
            catalog_path: None,
        }
    }
}

impl DiscoveryConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_path(path: &Utf8Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    pub fn search_delay(&self) -> Duration {
        Duration::from_millis(self.search_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = DiscoveryConfig::default();
        assert_eq!(config.search_delay(), Duration::from_secs(1));
        assert_eq!(config.favorites_key, "favorites");
        assert!(config.storage_dir.is_none());
        assert!(config.catalog_path.is_none());

        assert_eq!(DiscoveryConfig::from_yaml_str("").unwrap(), config);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = DiscoveryConfig::from_yaml_str("search_delay_ms: 250").unwrap();
        assert_eq!(config.search_delay(), Duration::from_millis(250));
        assert_eq!(config.favorites_key, "favorites");
    }

    #[test]
    fn test_from_path() {
        let temp_dir = TempDir::new().unwrap();
        let dir = Utf8PathBuf::from_path_buf(temp_dir.path().to_path_buf()).unwrap();
        let path = dir.join("config.yaml");
        fs::write(
            &path,
            indoc! {r#"
                search_delay_ms: 0
                favorites_key: saved
                storage_dir: /var/lib/recipe-quest
                catalog_path: recipes.yaml
            "#},
        )
        .unwrap();

        let config = DiscoveryConfig::from_path(&path).unwrap();
        assert_eq!(config.search_delay_ms, 0);
        assert_eq!(config.favorites_key, "saved");
        assert_eq!(
            config.storage_dir.as_deref(),
            Some(Utf8Path::new("/var/lib/recipe-quest"))
        );
        assert_eq!(config.catalog_path.as_deref(), Some(Utf8Path::new("recipes.yaml")));
    }

    #[test]
    fn test_invalid_yaml() {
        let result = DiscoveryConfig::from_yaml_str("search_delay_ms: soon");
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }
}
