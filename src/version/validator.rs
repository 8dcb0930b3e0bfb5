//! CDN reachability validation of user-entered versions
//!
//! Used as a prompt validator: every outcome is a value, never an
//! error, and the message is shown to the user as-is.

use tracing::warn;

use crate::config::{
    NEO_APP_RESOURCE, SNAPSHOT_VERSION, UI5_CDN_URL, UI5_PREVIEW_CDN_URL, USER_AGENT,
};
use crate::version::format::get_trimmed_version;
use crate::version::offline::is_offline_error;

/// Outcome of validating a user-entered version
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    Invalid(String),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }
}

/// Validates that a version string was entered at all
pub fn validate_non_empty(version: &str) -> ValidationResult {
    if version.trim().is_empty() {
        ValidationResult::Invalid("Please provide a UI5 version.".to_string())
    } else {
        ValidationResult::Valid
    }
}

/// The CDN base serving a given version: snapshot builds only exist on
/// the preview CDN.
pub fn cdn_base_for(version: &str) -> &'static str {
    if version.contains(SNAPSHOT_VERSION) {
        UI5_PREVIEW_CDN_URL
    } else {
        UI5_CDN_URL
    }
}

/// Probes the CDNs to confirm a chosen version is still served
pub struct Ui5VersionValidator {
    client: reqwest::Client,
    public_base: String,
    preview_base: String,
}

impl Ui5VersionValidator {
    /// Creates a new validator with custom base URLs
    pub fn new(public_base: &str, preview_base: &str) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent(USER_AGENT)
                .build()
                .expect("Failed to create HTTP client"),
            public_base: public_base.to_string(),
            preview_base: preview_base.to_string(),
        }
    }

    /// Checks that the given version is still served by its CDN.
    ///
    /// Connectivity problems are benign: when the CDN cannot be reached
    /// at all the version is assumed valid rather than blocking the
    /// user. A definitive 400/404 on a released version means it has
    /// been retired from the CDN.
    pub async fn validate_version_exists(&self, version: &str) -> ValidationResult {
        if let ValidationResult::Invalid(message) = validate_non_empty(version) {
            return ValidationResult::Invalid(message);
        }

        let trimmed = get_trimmed_version(version);
        let is_snapshot = trimmed.contains(SNAPSHOT_VERSION);
        let (base, resource) = if is_snapshot {
            (self.preview_base.as_str(), NEO_APP_RESOURCE)
        } else {
            (self.public_base.as_str(), trimmed)
        };
        let url = format!("{base}/{resource}");

        match self.client.get(&url).send().await {
            Ok(response) if response.status().is_success() => ValidationResult::Valid,
            Ok(response) => {
                let status = response.status();
                if is_snapshot {
                    ValidationResult::Invalid(format!("Unable to reach the snapshot CDN at {url}."))
                } else if status == reqwest::StatusCode::BAD_REQUEST
                    || status == reqwest::StatusCode::NOT_FOUND
                {
                    ValidationResult::Invalid(format!(
                        "UI5 version {trimmed} is outdated and no longer available. Please provide a newer version."
                    ))
                } else {
                    ValidationResult::Invalid(format!(
                        "Failed to validate UI5 version {trimmed}: status {status}."
                    ))
                }
            }
            Err(error) if is_offline_error(&error) => {
                warn!("Skipping UI5 version validation, CDN unreachable: {}", error);
                ValidationResult::Valid
            }
            Err(error) => {
                if is_snapshot {
                    ValidationResult::Invalid(format!("Unable to reach the snapshot CDN at {url}."))
                } else {
                    ValidationResult::Invalid(format!(
                        "Failed to validate UI5 version {trimmed}: {error}."
                    ))
                }
            }
        }
    }
}

impl Default for Ui5VersionValidator {
    fn default() -> Self {
        Self::new(UI5_CDN_URL, UI5_PREVIEW_CDN_URL)
    }
}
