//! CDN-backed implementation of the version source

use serde::Deserialize;
use tracing::warn;

use crate::config::{
    NEO_APP_RESOURCE, PUBLIC_VERSIONS_RESOURCE, UI5_CDN_URL, UI5_PREVIEW_CDN_URL, USER_AGENT,
};
use crate::version::catalog::Ui5VersionCatalog;
use crate::version::error::SourceError;
use crate::version::source::Ui5VersionSource;

/// Route descriptor served by the internal preview CDN
#[derive(Debug, Deserialize)]
struct NeoAppResponse {
    routes: Vec<NeoAppRoute>,
}

#[derive(Debug, Deserialize)]
struct NeoAppRoute {
    target: NeoAppTarget,
}

#[derive(Debug, Deserialize)]
struct NeoAppTarget {
    version: String,
}

/// Version source backed by the public and preview UI5 CDNs
pub struct CdnVersionSource {
    client: reqwest::Client,
    public_base: String,
    preview_base: String,
}

impl CdnVersionSource {
    /// Creates a new CdnVersionSource with custom base URLs
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
}

impl Default for CdnVersionSource {
    fn default() -> Self {
        Self::new(UI5_CDN_URL, UI5_PREVIEW_CDN_URL)
    }
}

#[async_trait::async_trait]
impl Ui5VersionSource for CdnVersionSource {
    async fn fetch_public_catalog(&self) -> Result<Ui5VersionCatalog, SourceError> {
        let url = format!("{}/{}", self.public_base, PUBLIC_VERSIONS_RESOURCE);

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!("public version endpoint returned status {}: {}", status, url);
            return Err(SourceError::UnexpectedStatus(status));
        }

        let catalog: Ui5VersionCatalog = response.json().await.map_err(|e| {
            warn!("Failed to parse public version catalog: {}", e);
            SourceError::InvalidResponse(e.to_string())
        })?;

        Ok(catalog)
    }

    async fn fetch_internal_routes(&self) -> Result<Vec<String>, SourceError> {
        let url = format!("{}/{}", self.preview_base, NEO_APP_RESOURCE);

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!("preview CDN returned status {}: {}", status, url);
            return Err(SourceError::UnexpectedStatus(status));
        }

        let descriptor: NeoAppResponse = response.json().await.map_err(|e| {
            warn!("Failed to parse route descriptor: {}", e);
            SourceError::InvalidResponse(e.to_string())
        })?;

        Ok(descriptor
            .routes
            .into_iter()
            .map(|route| route.target.version)
            .collect())
    }
}
