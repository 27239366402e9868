//! Data Dragon roster catalog client.
//!
//! The only asynchronous boundary of the tool: everything downstream of
//! the fetch is pure state. Retrieval failures surface as a
//! [`CatalogError`]; the session translates them into a failed-roster
//! flag without touching the draft engine.

use crate::config::CatalogConfig;
use crate::roles;
use derive_getters::Getters;
use derive_more::{Display, Error};
use fearless_engine::{Champion, ChampionId};
use serde::Deserialize;
use std::collections::HashMap;
use tracing::{debug, error, info, instrument, warn};

/// A fetched roster: the patch it was built from and its champions.
#[derive(Debug, Clone, Getters)]
pub struct Roster {
    /// Patch version the manifest was fetched for.
    version: String,
    /// Champions, sorted by display name.
    champions: Vec<Champion>,
}

impl Roster {
    /// Builds a roster from already-loaded champions (e.g. a cached or
    /// offline manifest).
    pub fn new(version: impl Into<String>, champions: Vec<Champion>) -> Self {
        Self {
            version: version.into(),
            champions,
        }
    }

    /// Looks up a champion by id.
    pub fn get(&self, id: ChampionId) -> Option<&Champion> {
        self.champions.iter().find(|champion| champion.id == id)
    }

    /// Number of champions in the roster.
    pub fn len(&self) -> usize {
        self.champions.len()
    }

    /// True if the roster holds no champions.
    pub fn is_empty(&self) -> bool {
        self.champions.is_empty()
    }
}

/// HTTP client for the champion catalog.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    config: CatalogConfig,
    client: reqwest::Client,
}

impl CatalogClient {
    /// Creates a client over the given configuration.
    #[instrument(skip(config))]
    pub fn new(config: CatalogConfig) -> Self {
        info!("Creating catalog client");
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    /// Returns the configuration in use.
    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Fetches the latest patch version from the version manifest.
    #[instrument(skip(self))]
    pub async fn latest_version(&self) -> Result<String, CatalogError> {
        debug!("Fetching version manifest");
        let versions: Vec<String> = self
            .client
            .get(self.config.version_url().as_str())
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Version manifest request failed");
                CatalogError::new(format!("Version manifest request failed: {}", e))
            })?
            .json()
            .await
            .map_err(|e| {
                error!(error = ?e, "Failed to parse version manifest");
                CatalogError::new(format!("Failed to parse version manifest: {}", e))
            })?;

        versions
            .into_iter()
            .next()
            .ok_or_else(|| CatalogError::new("Version manifest is empty".to_string()))
    }

    /// Fetches the champion manifest for `version` and maps it into
    /// engine champions.
    #[instrument(skip(self))]
    pub async fn fetch_champions(&self, version: &str) -> Result<Vec<Champion>, CatalogError> {
        let url = self.config.champion_manifest_url(version);
        debug!(%url, "Fetching champion manifest");

        let manifest: ChampionManifest = self
            .client
            .get(url.as_str())
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Champion manifest request failed");
                CatalogError::new(format!("Champion manifest request failed: {}", e))
            })?
            .json()
            .await
            .map_err(|e| {
                error!(error = ?e, "Failed to parse champion manifest");
                CatalogError::new(format!("Failed to parse champion manifest: {}", e))
            })?;

        let champions = champions_from_manifest(&self.config, version, manifest)?;
        info!(count = champions.len(), version, "Champion manifest loaded");
        Ok(champions)
    }

    /// Fetches the full roster: latest version, then its champions.
    ///
    /// A failed version lookup falls back to the configured pinned
    /// patch; a failed champion fetch is an error for the caller to
    /// surface.
    #[instrument(skip(self))]
    pub async fn load_roster(&self) -> Result<Roster, CatalogError> {
        let version = match self.latest_version().await {
            Ok(version) => version,
            Err(e) => {
                warn!(error = %e, fallback = %self.config.fallback_version(), "Using fallback patch version");
                self.config.fallback_version().clone()
            }
        };

        let champions = self.fetch_champions(&version).await?;
        Ok(Roster { version, champions })
    }
}

// ─────────────────────────────────────────────────────────────
//  Manifest payload
// ─────────────────────────────────────────────────────────────

/// Wire shape of the champion manifest.
#[derive(Debug, Deserialize)]
struct ChampionManifest {
    data: HashMap<String, ChampionEntry>,
}

/// One champion record in the manifest.
#[derive(Debug, Deserialize)]
struct ChampionEntry {
    /// Catalog slug, e.g. "Aatrox".
    id: String,
    /// Numeric key as a string, e.g. "266".
    key: String,
    name: String,
    #[serde(default)]
    tags: Vec<String>,
    image: ImageRef,
}

#[derive(Debug, Deserialize)]
struct ImageRef {
    full: String,
}

/// Maps a parsed manifest into engine champions, sorted by name.
fn champions_from_manifest(
    config: &CatalogConfig,
    version: &str,
    manifest: ChampionManifest,
) -> Result<Vec<Champion>, CatalogError> {
    let mut champions = Vec::with_capacity(manifest.data.len());

    for entry in manifest.data.into_values() {
        let key: i32 = entry.key.parse().map_err(|_| {
            CatalogError::new(format!(
                "Champion {} has non-numeric key {:?}",
                entry.id, entry.key
            ))
        })?;

        champions.push(Champion {
            id: ChampionId(key),
            roles: roles::infer_roles(&entry.id, &entry.tags),
            image: config.champion_image_url(version, &entry.image.full),
            slug: entry.id,
            name: entry.name,
        });
    }

    champions.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(champions)
}

/// Catalog retrieval error.
#[derive(Debug, Clone, Display, Error)]
#[display("Catalog error: {} at {}:{}", message, file, line)]
pub struct CatalogError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl CatalogError {
    /// Creates a new catalog error.
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
    use fearless_engine::Role;

    const FIXTURE: &str = r#"{
        "type": "champion",
        "version": "15.3.1",
        "data": {
            "Aatrox": {
                "id": "Aatrox",
                "key": "266",
                "name": "Aatrox",
                "tags": ["Fighter"],
                "image": { "full": "Aatrox.png" }
            },
            "Graves": {
                "id": "Graves",
                "key": "104",
                "name": "Graves",
                "tags": ["Marksman"],
                "image": { "full": "Graves.png" }
            }
        }
    }"#;

    #[test]
    fn test_manifest_mapping() {
        let manifest: ChampionManifest = serde_json::from_str(FIXTURE).expect("valid fixture");
        let config = CatalogConfig::default();
        let champions = champions_from_manifest(&config, "15.3.1", manifest).expect("maps");

        assert_eq!(champions.len(), 2);
        // Sorted by name.
        assert_eq!(champions[0].slug, "Aatrox");
        assert_eq!(champions[0].id, ChampionId(266));
        assert_eq!(champions[0].roles, vec![Role::Top, Role::Jungle]);
        assert_eq!(
            champions[0].image,
            "https://ddragon.leagueoflegends.com/cdn/15.3.1/img/champion/Aatrox.png"
        );
        // Override table corrects the Marksman tag.
        assert_eq!(champions[1].roles, vec![Role::Jungle]);
    }

    #[test]
    fn test_non_numeric_key_rejected() {
        let broken = FIXTURE.replace("\"266\"", "\"not-a-key\"");
        let manifest: ChampionManifest = serde_json::from_str(&broken).expect("valid json");
        let result = champions_from_manifest(&CatalogConfig::default(), "15.3.1", manifest);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("non-numeric key"));
    }

    #[test]
    fn test_roster_lookup() {
        let manifest: ChampionManifest = serde_json::from_str(FIXTURE).expect("valid fixture");
        let champions =
            champions_from_manifest(&CatalogConfig::default(), "15.3.1", manifest).unwrap();
        let roster = Roster {
            version: "15.3.1".to_string(),
            champions,
        };

        assert_eq!(roster.len(), 2);
        assert_eq!(roster.get(ChampionId(104)).unwrap().slug, "Graves");
        assert!(roster.get(ChampionId(1)).is_none());
        assert!(roster.get(ChampionId::SKIP).is_none());
    }
}
