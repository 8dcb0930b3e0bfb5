// =============================================================================
// Endpoint constants
// =============================================================================

/// Public UI5 CDN serving released versions and the version catalog
pub const UI5_CDN_URL: &str = "https://ui5.sap.com";

/// Internal preview CDN serving snapshot builds
pub const UI5_PREVIEW_CDN_URL: &str = "https://sapui5preview.int.sap.eu2.hana.ondemand.com";

/// Resource path of the public version catalog
pub const PUBLIC_VERSIONS_RESOURCE: &str = "version.json";

/// Resource path of the internal route descriptor (also used as the
/// reachability probe target for snapshot versions)
pub const NEO_APP_RESOURCE: &str = "neo-app.json";

/// User agent sent with every CDN request
pub const USER_AGENT: &str = "ui5-version-resolver";

// =============================================================================
// Sentinels and display labels
// =============================================================================

/// Selectable sentinel for the rolling snapshot build
pub const SNAPSHOT_VERSION: &str = "snapshot";

/// Selectable sentinel for the untested rolling snapshot build
pub const SNAPSHOT_UNTESTED_VERSION: &str = "snapshot-untested";

/// Suffix marking an unreleased build of an otherwise released version
pub const SNAPSHOT_SUFFIX: &str = "-snapshot";

/// Display label appended to the newest released version
pub const LATEST_LABEL: &str = " (latest)";

/// Display label appended to the version detected on the system
pub const SYSTEM_VERSION_LABEL: &str = " (system version)";

/// Distinguished catalog key resolving to the newest released entry
pub const LATEST_VERSION_KEY: &str = "latest";

// =============================================================================
// Version gates
// =============================================================================

/// Oldest UI5 version the tooling supports as a deployment target
pub const BASELINE_FEATURE_VERSION: &str = "1.71.0";

/// Minimum minor version for which manifest.json gets a minUI5Version
pub const MIN_MANIFEST_MINOR: u64 = 90;
