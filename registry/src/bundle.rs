//! Versioned connector bundles.
//!
//! A bundle is a single JSON file holding many connectors, used to ship a
//! registry to the host. Sealing sorts the connectors by slug and stores the
//! SHA-256 of their serialized form so a loaded bundle can be checked for
//! tampering or corruption.

use std::io::{BufReader, BufWriter};
use std::path::Path;

use connector_sdk_core::{ConnectorInfo, SCHEMA_CONTRACT_VERSION};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::{RegistryError, Result};

/// Serializable collection of connectors for distribution.
///
/// # Examples
///
/// ```
/// use connector_sdk_core::ConnectorInfo;
/// use connector_sdk_registry::ConnectorBundle;
///
/// let mut bundle = ConnectorBundle::new("1.0.0", "2026-01-15T10:30:00Z");
/// bundle.connectors.push(ConnectorInfo::new("Slack", "Messaging", "1.0.0").with_slug("slack"));
/// bundle.seal().unwrap();
///
/// assert!(bundle.verify().is_ok());
/// bundle.connectors[0].description = "edited".into();
/// assert!(bundle.verify().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectorBundle {
    /// AutoForm contract version the schemas were built against.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema_version: Option<String>,
    /// Bundle format version.
    pub version: String,
    pub name: Option<String>,
    pub description: Option<String>,
    /// RFC 3339 creation timestamp.
    pub generated_at: String,
    /// SHA-256 hex digest of `connectors`, set by [`seal`](Self::seal).
    pub bundle_hash: Option<String>,
    pub connectors: Vec<ConnectorInfo>,
}

impl ConnectorBundle {
    /// Creates an empty, unsealed bundle.
    pub fn new(version: impl Into<String>, generated_at: impl Into<String>) -> Self {
        Self {
            schema_version: Some(SCHEMA_CONTRACT_VERSION.to_string()),
            version: version.into(),
            name: None,
            description: None,
            generated_at: generated_at.into(),
            bundle_hash: None,
            connectors: Vec::new(),
        }
    }

    /// Returns the number of connectors in this bundle.
    pub fn connector_count(&self) -> usize {
        self.connectors.len()
    }

    /// Computes the SHA-256 hex digest of the serialized connectors.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Json`] if serialization fails.
    pub fn content_hash(&self) -> Result<String> {
        let bytes = serde_json::to_vec(&self.connectors)?;
        Ok(format!("{:x}", Sha256::digest(&bytes)))
    }

    /// Sorts connectors by slug and records the content hash.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Json`] if serialization fails.
    pub fn seal(&mut self) -> Result<()> {
        self.connectors.sort_by(|a, b| a.slug.cmp(&b.slug));
        self.bundle_hash = Some(self.content_hash()?);
        Ok(())
    }

    /// Checks the recorded hash against the current content.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidChecksum`] if the bundle was never
    /// sealed or its content changed since.
    pub fn verify(&self) -> Result<()> {
        let Some(expected) = &self.bundle_hash else {
            return Err(RegistryError::InvalidChecksum(
                "bundle is not sealed".to_string(),
            ));
        };
        let actual = self.content_hash()?;
        if *expected != actual {
            return Err(RegistryError::InvalidChecksum(format!(
                "expected {expected}, found {actual}"
            )));
        }
        Ok(())
    }

    /// Loads a bundle from a JSON file without verifying it.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Io`] if the file cannot be read, or
    /// [`RegistryError::Json`] if parsing fails.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let reader = BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }

    /// Saves the bundle as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Io`] if the file cannot be written, or
    /// [`RegistryError::Json`] if serialization fails.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }
}
