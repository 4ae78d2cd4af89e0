//! Error types for connector registry operations.
//!
//! Covers I/O, the three serialization formats the registry reads (JSON
//! bundles, YAML config, TOML manifests), connector validation and bundle
//! checksum verification.

use std::path::PathBuf;

use connector_sdk_core::ValidationError;
use thiserror::Error;

/// Errors that can occur while loading, registering or bundling connectors.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// File I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing or serialization failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parsing or serialization failure.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// `connector.toml` could not be parsed.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Directory has no `connector.toml`.
    #[error("missing connector.toml in {}", .0.display())]
    MissingManifest(PathBuf),

    /// Connector has no README but the registry config requires one.
    #[error("connector `{0}` has no README.md")]
    MissingReadme(String),

    /// Connector metadata failed validation.
    #[error("invalid connector `{slug}`: {}", join_errors(.errors))]
    InvalidConnector {
        slug: String,
        errors: Vec<ValidationError>,
    },

    /// A connector with the same slug is already registered.
    #[error("duplicate connector: {0}")]
    DuplicateConnector(String),

    /// Bundle hash is missing or does not match its content.
    #[error("invalid checksum: {0}")]
    InvalidChecksum(String),

    /// All configured loader sources failed.
    #[error("no connector sources available")]
    NoSourcesAvailable,
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Convenience alias for results with [`RegistryError`].
pub type Result<T> = std::result::Result<T, RegistryError>;
