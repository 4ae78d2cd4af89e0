//! Connector registration, loading and bundling.
//!
//! This crate turns connector directories (`connector.toml` plus an optional
//! `README.md`) into validated [`ConnectorInfo`](connector_sdk_core::ConnectorInfo)
//! values, keeps them in a slug-keyed [`ConnectorRegistry`], and packs them
//! into hash-sealed [`ConnectorBundle`] files for distribution.
//!
//! # Quick start
//!
//! ```no_run
//! use connector_sdk_registry::{ConnectorRegistry, RegistryConfig};
//!
//! // Load every connector directory under `connectors/`
//! let registry = ConnectorRegistry::from_dir("connectors/").unwrap();
//! for slug in registry.slugs() {
//!     println!("{slug}");
//! }
//!
//! // Restrict loading with a YAML config
//! let config = RegistryConfig::load("connectors.yml").unwrap();
//! let registry = ConnectorRegistry::builder()
//!     .with_config(config)
//!     .from_dir("connectors/")
//!     .from_bundle("connectors.json")
//!     .build()
//!     .unwrap();
//!
//! // Ship it
//! let mut bundle = registry.to_bundle("1.0.0", "2026-01-01T00:00:00Z");
//! bundle.seal().unwrap();
//! bundle.save("connectors.json").unwrap();
//! ```

mod bundle;
mod config;
mod error;
mod loader;
mod manifest;
mod slug;

pub use bundle::ConnectorBundle;
pub use config::{RegistryConfig, ValidationConfig};
pub use error::{RegistryError, Result};
pub use loader::{ConnectorRegistry, RegistryBuilder, RegistrySource};
pub use manifest::{
    ConnectorManifest, ConnectorSection, MANIFEST_FILE, README_FILE, load_connector_dir,
};
pub use slug::slugify;
