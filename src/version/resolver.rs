//! Relevant-version computation and manifest decisions
//!
//! The resolver owns the per-session memoization of both remote
//! catalogs and turns a system-detected version plus the base-layer
//! classification (customer vs. internal) into the list of versions
//! offered for selection.

use std::sync::{Arc, OnceLock};

use indexmap::IndexSet;
use regex::Regex;
use tokio::sync::OnceCell;
use tracing::warn;

use crate::config::{
    BASELINE_FEATURE_VERSION, LATEST_LABEL, MIN_MANIFEST_MINOR, SNAPSHOT_UNTESTED_VERSION,
    SNAPSHOT_VERSION, SYSTEM_VERSION_LABEL,
};
use crate::version::catalog::{Ui5VersionCatalog, fallback_catalog};
use crate::version::cdn::CdnVersionSource;
use crate::version::error::ResolverError;
use crate::version::format::{add_snapshot, remove_timestamp_from_version};
use crate::version::semver::{is_feature_supported_version, parse_ui5_version};
use crate::version::source::Ui5VersionSource;

/// Pattern a system-detected version must match to be usable:
/// major.minor.patch with an optional trailing build qualifier.
const SYSTEM_VERSION_PATTERN: &str = r"^[1-9]\.\d{1,3}\.\d{1,2}\.*";

/// Gate a system-detected version on the supported pattern.
///
/// Returns the version unchanged when it matches, `None` for missing or
/// malformed input - downstream logic treats both as "not detected".
pub fn check_system_version_pattern(version: Option<&str>) -> Option<String> {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    let pattern = PATTERN
        .get_or_init(|| Regex::new(SYSTEM_VERSION_PATTERN).expect("version pattern is valid"));

    version
        .filter(|v| pattern.is_match(v))
        .map(str::to_string)
}

/// Display labels derived from a system-detected version
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VersionLabels {
    /// The version reduced to major.minor.patch
    pub formatted: String,
    /// "-snapshot" when the system runs an unreleased build, else ""
    pub snapshot: String,
    /// " (latest)" when the formatted version is the public latest, else ""
    pub latest: String,
}

impl VersionLabels {
    /// The entry advertising the system-detected version in a selection list
    pub fn system_entry(&self) -> String {
        format!(
            "{}{}{}{}",
            self.formatted, self.snapshot, SYSTEM_VERSION_LABEL, self.latest
        )
    }
}

/// Derive display labels for a system-detected version. All labels are
/// empty when no version was detected.
pub fn version_labels(version: Option<&str>, latest_version: &str) -> VersionLabels {
    let Some(version) = version else {
        return VersionLabels::default();
    };

    let formatted = remove_timestamp_from_version(version);
    let snapshot = add_snapshot(version, latest_version).to_string();
    let latest = if formatted == latest_version {
        LATEST_LABEL.to_string()
    } else {
        String::new()
    };

    VersionLabels {
        formatted,
        snapshot,
        latest,
    }
}

/// Whether manifest.json should pin a minUI5Version: only systems
/// detected at 1.90 or newer get one. Malformed input means false,
/// never an error.
pub fn should_set_min_ui5_version(system_version: Option<&str>) -> bool {
    let Some(version) = check_system_version_pattern(system_version) else {
        return false;
    };

    version
        .split('.')
        .nth(1)
        .and_then(|minor| minor.parse::<u64>().ok())
        .is_some_and(|minor| minor >= MIN_MANIFEST_MINOR)
}

/// Resolves the UI5 versions relevant to one logical session.
///
/// Both remote catalogs are fetched lazily on first use and memoized
/// for the life of the instance; create a new resolver to force a
/// refresh.
pub struct Ui5VersionResolver {
    source: Arc<dyn Ui5VersionSource>,
    public_cache: OnceCell<Ui5VersionCatalog>,
    internal_cache: OnceCell<Vec<String>>,
}

impl Ui5VersionResolver {
    /// Create a resolver over the given source
    pub fn new(source: Arc<dyn Ui5VersionSource>) -> Self {
        Self {
            source,
            public_cache: OnceCell::new(),
            internal_cache: OnceCell::new(),
        }
    }

    /// Create a resolver against the production CDN endpoints
    pub fn from_cdn() -> Self {
        Self::new(Arc::new(CdnVersionSource::default()))
    }

    /// The public version catalog.
    ///
    /// Falls back to the bundled catalog when the endpoint cannot be
    /// reached, so callers keep working offline. Never fails.
    pub async fn public_versions(&self) -> &Ui5VersionCatalog {
        self.public_cache
            .get_or_init(|| async {
                match self.source.fetch_public_catalog().await {
                    Ok(catalog) => catalog,
                    Err(err) => {
                        warn!("Falling back to bundled version catalog: {}", err);
                        fallback_catalog().clone()
                    }
                }
            })
            .await
    }

    /// The newest released public version
    pub async fn latest_version(&self) -> String {
        self.public_versions()
            .await
            .latest_version()
            .unwrap_or_default()
            .to_string()
    }

    /// The internal route versions, labeled and filtered to the
    /// baseline feature version.
    ///
    /// Unlike [`Self::public_versions`] a fetch failure propagates:
    /// the internal list is only exercised for internal-base users,
    /// who are assumed network-connected.
    pub async fn internal_versions(&self) -> Result<&[String], ResolverError> {
        let latest = self.latest_version().await;

        let versions = self
            .internal_cache
            .get_or_try_init(|| async {
                let routes = self.source.fetch_internal_routes().await?;
                Ok::<_, ResolverError>(
                    routes
                        .into_iter()
                        .filter(|route| {
                            is_feature_supported_version(BASELINE_FEATURE_VERSION, route)
                        })
                        .map(|route| {
                            if route == latest {
                                format!("{route}{LATEST_LABEL}")
                            } else {
                                route
                            }
                        })
                        .collect(),
                )
            })
            .await?;

        Ok(versions)
    }

    /// Versions from the public catalog strictly newer than `baseline`
    /// on the (minor, micro) pair, ascending, with the latest entry
    /// labeled.
    pub async fn higher_versions(&self, baseline: &str) -> Vec<String> {
        higher_versions_in(self.public_versions().await, baseline)
    }

    /// The ordered, deduplicated list of versions offered for selection.
    ///
    /// Internal-base systems always get the two snapshot sentinels up
    /// front and the full internal list behind them; customer-base
    /// systems get the detected version plus everything newer, or just
    /// the latest release when nothing usable was detected.
    pub async fn relevant_versions(
        &self,
        system_version: Option<&str>,
        is_customer_base: bool,
    ) -> Result<Vec<String>, ResolverError> {
        let version = check_system_version_pattern(system_version);
        let latest = self.latest_version().await;
        let labels = version_labels(version.as_deref(), &latest);

        let versions = if !is_customer_base {
            let mut list = vec![
                SNAPSHOT_VERSION.to_string(),
                SNAPSHOT_UNTESTED_VERSION.to_string(),
            ];
            if version.is_some() {
                list.push(labels.system_entry());
            }
            for internal in self.internal_versions().await? {
                if version.is_some() && *internal == labels.formatted {
                    list.push(format!(
                        "{}{}{}",
                        labels.formatted, labels.snapshot, SYSTEM_VERSION_LABEL
                    ));
                } else {
                    list.push(internal.clone());
                }
            }
            list
        } else if version.is_some() && labels.snapshot.is_empty() {
            let mut list = self.higher_versions(&labels.formatted).await;
            list.insert(0, labels.system_entry());
            list
        } else {
            vec![format!("{latest}{LATEST_LABEL}")]
        };

        let deduped: IndexSet<String> = versions.into_iter().collect();
        Ok(deduped.into_iter().collect())
    }

    /// The minUI5Version to write into manifest.json: the detected
    /// system version when it is a released build, else the public
    /// latest.
    pub async fn min_ui5_version_for_manifest(&self, system_version: Option<&str>) -> String {
        match system_version {
            Some(version) if !version.is_empty() && !version.contains(SNAPSHOT_VERSION) => {
                version.to_string()
            }
            _ => self.latest_version().await,
        }
    }
}

fn higher_versions_in(catalog: &Ui5VersionCatalog, baseline: &str) -> Vec<String> {
    let Some(base) = parse_ui5_version(baseline) else {
        return Vec::new();
    };
    let latest = catalog.latest_version().unwrap_or_default();

    let mut higher: Vec<String> = catalog
        .released_versions()
        .filter(|candidate| {
            parse_ui5_version(candidate).is_some_and(|v| {
                v.minor > base.minor || (v.minor == base.minor && v.patch > base.patch)
            })
        })
        .map(|candidate| {
            if candidate == latest {
                format!("{candidate}{LATEST_LABEL}")
            } else {
                candidate.to_string()
            }
        })
        .collect();

    // The catalog is delivered newest first; selection lists want
    // ascending order.
    higher.reverse();
    higher
}
