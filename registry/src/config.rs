//! Registry configuration.
//!
//! Controls which connectors a registry accepts and how strictly connector
//! directories are checked while loading.
//!
//! # Example YAML
//!
//! ```yaml
//! version: "1.0"
//! allowlist:
//!   - slack
//!   - github
//! exclude:
//!   - legacy-crm
//! validation:
//!   require_readme: true
//!   strict: false
//! ```

use std::io::{BufReader, BufWriter};
use std::path::Path;

use connector_sdk_core::ConnectorInfo;
use serde::{Deserialize, Serialize};

use crate::error::{RegistryError, Result};

/// Checks applied to each connector directory.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Reject connectors without a `README.md`.
    #[serde(default)]
    pub require_readme: bool,
    /// Treat subdirectories without `connector.toml` as errors instead of
    /// skipping them.
    #[serde(default)]
    pub strict: bool,
}

/// Top-level registry configuration.
///
/// Loaded from a YAML file (typically `connectors.yml` next to the connector
/// directories).
///
/// # Examples
///
/// ```no_run
/// use connector_sdk_registry::RegistryConfig;
///
/// let config = RegistryConfig::load("connectors.yml").unwrap();
/// if config.is_allowed("slack") {
///     println!("slack will be registered");
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Configuration format version (e.g., `"1.0"`).
    pub version: String,
    /// Connector slugs to register (empty = register everything found).
    #[serde(default)]
    pub allowlist: Vec<String>,
    /// Connector slugs to skip.
    #[serde(default)]
    pub exclude: Vec<String>,
    #[serde(default)]
    pub validation: ValidationConfig,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            allowlist: Vec::new(),
            exclude: Vec::new(),
            validation: ValidationConfig::default(),
        }
    }
}

impl RegistryConfig {
    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`Io`](crate::RegistryError::Io) if the file cannot be read,
    /// or [`Yaml`](crate::RegistryError::Yaml) if parsing fails.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let reader = BufReader::new(file);
        let config = serde_yaml::from_reader(reader)?;
        Ok(config)
    }

    /// Saves the configuration as YAML.
    ///
    /// # Errors
    ///
    /// Returns [`Io`](crate::RegistryError::Io) if the file cannot be
    /// written, or [`Yaml`](crate::RegistryError::Yaml) if serialization
    /// fails.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = BufWriter::new(file);
        serde_yaml::to_writer(writer, self)?;
        Ok(())
    }

    /// Returns `true` if `slug` is in the exclusion list.
    pub fn is_excluded(&self, slug: &str) -> bool {
        self.exclude.iter().any(|s| s == slug)
    }

    /// Returns `true` if the connector with `slug` may be registered.
    ///
    /// An empty allowlist allows every connector that is not excluded.
    /// Exclusions always win.
    ///
    /// # Examples
    ///
    /// ```
    /// # let yaml = r#"
    /// # version: "1.0"
    /// # allowlist: [slack, github]
    /// # exclude: [github]
    /// # "#;
    /// # let config: connector_sdk_registry::RegistryConfig = serde_yaml::from_str(yaml).unwrap();
    /// assert!(config.is_allowed("slack"));
    /// assert!(!config.is_allowed("jira"));
    /// assert!(!config.is_allowed("github"));
    /// ```
    pub fn is_allowed(&self, slug: &str) -> bool {
        if self.is_excluded(slug) {
            return false;
        }
        self.allowlist.is_empty() || self.allowlist.iter().any(|s| s == slug)
    }

    /// Applies the per-connector rules to a loaded connector.
    ///
    /// Returns `Ok(false)` when the connector is not allowed and should be
    /// skipped.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::MissingReadme`] if `validation.require_readme`
    /// is set and the connector has no documentation.
    pub fn admit(&self, connector: &ConnectorInfo) -> Result<bool> {
        if !self.is_allowed(&connector.slug) {
            return Ok(false);
        }
        if self.validation.require_readme && connector.documentation.is_none() {
            return Err(RegistryError::MissingReadme(connector.slug.clone()));
        }
        Ok(true)
    }
}
