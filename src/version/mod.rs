//! Version resolution layer for UI5 systems
//!
//! This module computes which UI5 versions are offered for selection
//! given what was detected on the target system and what the CDNs
//! currently serve.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Source    │────▶│   Resolver  │────▶│  Validator  │
//! │  (fetch)    │     │ (relevance) │     │ (CDN probe) │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!        │                   │
//!        ▼                   ▼
//! ┌─────────────┐     ┌─────────────┐
//! │   Catalog   │     │ format /    │
//! │ (+fallback) │     │ semver      │
//! └─────────────┘     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`catalog`]: Public version catalog model and the bundled fallback asset
//! - [`cdn`]: CDN-backed implementation of the version source
//! - [`error`]: Error types for sources and the resolver
//! - [`format`]: Pure string helpers for version display
//! - [`offline`]: Classification of benign network failures
//! - [`resolver`]: Relevant-version computation and manifest decisions
//! - [`semver`]: Numeric version parsing and feature-support checks
//! - [`source`]: Source trait for fetching version data
//! - [`validator`]: CDN reachability validation of user-entered versions

pub mod catalog;
pub mod cdn;
pub mod error;
pub mod format;
pub mod offline;
pub mod resolver;
pub mod semver;
pub mod source;
pub mod validator;
