//! Catalog endpoint configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Configuration for the Data Dragon roster catalog.
///
/// Every field has a sensible default, so `CatalogConfig::default()`
/// talks to the public CDN; a TOML file can override any subset (e.g.
/// to point at a mirror or pin a patch).
#[derive(Debug, Clone, Getters, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Version manifest URL (a JSON array, newest first).
    #[serde(default = "default_version_url")]
    version_url: String,

    /// Champion manifest URL template; `{version}` and `{language}` are
    /// substituted.
    #[serde(default = "default_champion_url")]
    champion_url: String,

    /// Champion image URL template; `{version}` and `{image}` are
    /// substituted.
    #[serde(default = "default_image_url")]
    image_url: String,

    /// Manifest language code.
    #[serde(default = "default_language")]
    language: String,

    /// Patch used when the version manifest cannot be retrieved.
    #[serde(default = "default_fallback_version")]
    fallback_version: String,
}

#[instrument]
fn default_version_url() -> String {
    "https://ddragon.leagueoflegends.com/api/versions.json".to_string()
}

#[instrument]
fn default_champion_url() -> String {
    "https://ddragon.leagueoflegends.com/cdn/{version}/data/{language}/champion.json".to_string()
}

#[instrument]
fn default_image_url() -> String {
    "https://ddragon.leagueoflegends.com/cdn/{version}/img/champion/{image}".to_string()
}

#[instrument]
fn default_language() -> String {
    "en_US".to_string()
}

#[instrument]
fn default_fallback_version() -> String {
    "14.1.1".to_string()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            version_url: default_version_url(),
            champion_url: default_champion_url(),
            image_url: default_image_url(),
            language: default_language(),
            fallback_version: default_fallback_version(),
        }
    }
}

impl CatalogConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading catalog config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(version_url = %config.version_url, "Catalog config loaded");
        Ok(config)
    }

    /// Champion manifest URL for the given patch.
    pub fn champion_manifest_url(&self, version: &str) -> String {
        self.champion_url
            .replace("{version}", version)
            .replace("{language}", &self.language)
    }

    /// Image URL for the given patch and image file name.
    pub fn champion_image_url(&self, version: &str, image: &str) -> String {
        self.image_url
            .replace("{version}", version)
            .replace("{image}", image)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_targets_data_dragon() {
        let config = CatalogConfig::default();
        assert!(config.version_url().contains("ddragon"));
        assert_eq!(
            config.champion_manifest_url("15.3.1"),
            "https://ddragon.leagueoflegends.com/cdn/15.3.1/data/en_US/champion.json"
        );
        assert_eq!(
            config.champion_image_url("15.3.1", "Aatrox.png"),
            "https://ddragon.leagueoflegends.com/cdn/15.3.1/img/champion/Aatrox.png"
        );
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "language = \"ko_KR\"").unwrap();
        writeln!(file, "fallback_version = \"15.1.1\"").unwrap();

        let config = CatalogConfig::from_file(file.path()).expect("valid config");
        assert_eq!(config.language(), "ko_KR");
        assert_eq!(config.fallback_version(), "15.1.1");
        // Unspecified fields fall back to the CDN defaults.
        assert!(config.champion_url().contains("{version}"));
    }

    #[test]
    fn test_missing_file_errors() {
        let result = CatalogConfig::from_file("/nonexistent/catalog.toml");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Failed to read"));
    }
}
