//! Public version catalog model and the bundled fallback asset

use std::sync::OnceLock;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::config::LATEST_VERSION_KEY;

/// A single entry of the public version catalog
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct VersionEntry {
    pub version: String,
    #[serde(default)]
    pub support: Option<String>,
    #[serde(default)]
    pub lts: Option<bool>,
}

/// The public UI5 version catalog, keyed by version string with a
/// distinguished "latest" entry resolving to the newest release.
///
/// Iteration order is the delivered order (newest first) - the
/// relevance computation depends on it.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Ui5VersionCatalog {
    entries: IndexMap<String, VersionEntry>,
}

impl Ui5VersionCatalog {
    pub fn new(entries: IndexMap<String, VersionEntry>) -> Self {
        Self { entries }
    }

    /// The newest released version, resolved through the "latest" key.
    pub fn latest_version(&self) -> Option<&str> {
        self.entries
            .get(LATEST_VERSION_KEY)
            .map(|entry| entry.version.as_str())
    }

    /// Released versions in delivered order, excluding the "latest" alias.
    pub fn released_versions(&self) -> impl Iterator<Item = &str> {
        self.entries
            .keys()
            .filter(|key| *key != LATEST_VERSION_KEY)
            .map(String::as_str)
    }

    pub fn get(&self, version: &str) -> Option<&VersionEntry> {
        self.entries.get(version)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

static FALLBACK: OnceLock<Ui5VersionCatalog> = OnceLock::new();

/// The bundled fallback catalog, used when the public endpoint cannot
/// be reached. A curated data asset refreshed with UI5 releases, never
/// computed at runtime.
pub fn fallback_catalog() -> &'static Ui5VersionCatalog {
    FALLBACK.get_or_init(|| {
        serde_json::from_str(include_str!("data/fallback-versions.json"))
            .expect("bundled fallback catalog is valid JSON")
    })
}
