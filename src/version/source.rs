//! Source trait for fetching UI5 version data

#[cfg(test)]
use mockall::automock;

use crate::version::catalog::Ui5VersionCatalog;
use crate::version::error::SourceError;

/// Trait for fetching UI5 version data from the CDN endpoints
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait Ui5VersionSource: Send + Sync {
    /// Fetches the public version catalog
    ///
    /// # Returns
    /// * `Ok(Ui5VersionCatalog)` - Released versions newest first, plus the "latest" alias
    /// * `Err(SourceError)` - If the fetch fails
    async fn fetch_public_catalog(&self) -> Result<Ui5VersionCatalog, SourceError>;

    /// Fetches the raw internal route versions, newest first
    ///
    /// These are the `target.version` values of the preview CDN's route
    /// descriptor, unlabeled and unfiltered.
    async fn fetch_internal_routes(&self) -> Result<Vec<String>, SourceError>;
}
