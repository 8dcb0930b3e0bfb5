//! UI5 runtime version resolution for SAP Fiori development tooling.
//!
//! Given a version string detected from an ABAP system and the remote
//! version catalogs served by the UI5 CDNs, this crate computes the
//! ordered, labeled list of UI5 versions a user can pick from, and
//! answers the auxiliary questions project generation needs (minimum
//! manifest version, feature-version support, CDN reachability of a
//! chosen version).
//!
//! The entry point is [`version::resolver::Ui5VersionResolver`], one
//! instance per logical session:
//!
//! ```no_run
//! use ui5_version_resolver::version::resolver::Ui5VersionResolver;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let resolver = Ui5VersionResolver::from_cdn();
//! let choices = resolver.relevant_versions(Some("1.119.1"), true).await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod version;

pub use version::resolver::Ui5VersionResolver;
pub use version::validator::{Ui5VersionValidator, ValidationResult};
