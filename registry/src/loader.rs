//! The slug-keyed [`ConnectorRegistry`] and the ways to fill it.
//!
//! Connectors arrive from a checkout of connector directories during
//! development and from a sealed bundle in deployed hosts.
//! [`RegistryBuilder`] lists both so one call works in either setting.
//!
//! # Loading patterns
//!
//! ```no_run
//! use connector_sdk_registry::ConnectorRegistry;
//!
//! // Every subdirectory holding a connector.toml
//! let registry = ConnectorRegistry::from_dir("connectors/").unwrap();
//! assert!(registry.get("slack").is_some());
//!
//! // A sealed bundle
//! let registry = ConnectorRegistry::from_bundle("connectors.json").unwrap();
//!
//! // Fallback chain
//! let registry = ConnectorRegistry::builder()
//!     .from_dir("connectors/")
//!     .from_bundle("connectors.json")
//!     .build()
//!     .unwrap();
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use connector_sdk_core::{ConnectorInfo, validate_connector};
use tracing::{debug, warn};

use crate::bundle::ConnectorBundle;
use crate::config::RegistryConfig;
use crate::error::{RegistryError, Result};
use crate::manifest::{MANIFEST_FILE, load_connector_dir};
use crate::slug::slugify;

/// Describes where a [`ConnectorRegistry`] was loaded from.
#[derive(Debug, Clone, PartialEq)]
pub enum RegistrySource {
    /// Built in memory through [`ConnectorRegistry::register`].
    Memory,
    /// Loaded from a directory of connector directories.
    Directory(PathBuf),
    /// Loaded from a single [`ConnectorBundle`] JSON file.
    Bundle(PathBuf),
    /// Picked from the listed sources by a [`RegistryBuilder`].
    Multiple(Vec<RegistrySource>),
}

/// In-memory collection of validated connectors keyed by slug.
///
/// # Examples
///
/// ```
/// use connector_sdk_core::{ConnectorInfo, OperationInfo};
/// use connector_sdk_registry::ConnectorRegistry;
///
/// let mut registry = ConnectorRegistry::new();
/// registry
///     .register(
///         ConnectorInfo::new("Google Drive", "Files", "1.0.0")
///             .with_operation(OperationInfo::new("upload", "Uploads a file")),
///     )
///     .unwrap();
///
/// assert!(registry.contains("google-drive"));
/// assert!(registry.register(ConnectorInfo::new("Google Drive", "Again", "1.0.0")).is_err());
/// ```
#[derive(Debug)]
pub struct ConnectorRegistry {
    connectors: HashMap<String, ConnectorInfo>,
    source: RegistrySource,
}

impl ConnectorRegistry {
    /// Creates an empty in-memory registry.
    pub fn new() -> Self {
        Self {
            connectors: HashMap::new(),
            source: RegistrySource::Memory,
        }
    }

    /// Starts a [`RegistryBuilder`].
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Loads every connector directory under `path` with the default
    /// configuration.
    ///
    /// # Errors
    ///
    /// See [`from_dir_with_config`](Self::from_dir_with_config).
    pub fn from_dir(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_dir_with_config(path, &RegistryConfig::default())
    }

    /// Loads every connector directory under `path`.
    ///
    /// Subdirectories without `connector.toml` are skipped, or rejected when
    /// `validation.strict` is set. Connectors that the config does not allow
    /// are skipped after loading.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Io`] if the directory cannot be read, the
    /// manifest error of any connector that fails to load,
    /// [`RegistryError::MissingReadme`] when a README is required but absent,
    /// and the [`register`](Self::register) errors.
    pub fn from_dir_with_config(path: impl AsRef<Path>, config: &RegistryConfig) -> Result<Self> {
        let path = path.as_ref();
        let mut dirs = Vec::new();
        for entry in std::fs::read_dir(path)? {
            let entry_path = entry?.path();
            if entry_path.is_dir() {
                dirs.push(entry_path);
            }
        }
        dirs.sort();

        let mut registry = Self::new();
        for dir in dirs {
            if !dir.join(MANIFEST_FILE).is_file() {
                if config.validation.strict {
                    return Err(RegistryError::MissingManifest(dir));
                }
                warn!(path = %dir.display(), "Skipping directory without connector.toml");
                continue;
            }

            let connector = load_connector_dir(&dir)?;
            if !config.admit(&connector)? {
                debug!(slug = %connector.slug, "Connector not allowed by config");
                continue;
            }
            registry.register(connector)?;
        }

        registry.source = RegistrySource::Directory(path.to_path_buf());
        Ok(registry)
    }

    /// Loads connectors from a [`ConnectorBundle`] JSON file.
    ///
    /// Sealed bundles are verified before any connector is registered.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Io`] or [`RegistryError::Json`] if the file
    /// cannot be read, [`RegistryError::InvalidChecksum`] if a sealed bundle
    /// fails verification, and the [`register`](Self::register) errors.
    pub fn from_bundle(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bundle = ConnectorBundle::load(path)?;
        if bundle.bundle_hash.is_some() {
            bundle.verify()?;
        }

        let mut registry = Self::new();
        for connector in bundle.connectors {
            registry.register(connector)?;
        }

        registry.source = RegistrySource::Bundle(path.to_path_buf());
        Ok(registry)
    }

    /// Validates and adds a connector.
    ///
    /// An empty slug is filled in from the connector name.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidConnector`] with every validation
    /// error found, or [`RegistryError::DuplicateConnector`] if the slug is
    /// already taken.
    pub fn register(&mut self, mut connector: ConnectorInfo) -> Result<()> {
        if connector.slug.is_empty() {
            connector.slug = slugify(&connector.name);
        }

        let errors = validate_connector(&connector);
        if !errors.is_empty() {
            return Err(RegistryError::InvalidConnector {
                slug: connector.slug,
                errors,
            });
        }
        if self.connectors.contains_key(&connector.slug) {
            return Err(RegistryError::DuplicateConnector(connector.slug));
        }

        debug!(
            slug = %connector.slug,
            operations = connector.operations.len(),
            triggers = connector.triggers.len(),
            "Registered connector"
        );
        self.connectors.insert(connector.slug.clone(), connector);
        Ok(())
    }

    /// Looks up a connector by slug.
    pub fn get(&self, slug: &str) -> Option<&ConnectorInfo> {
        self.connectors.get(slug)
    }

    /// Looks up a mutable reference to a connector by slug.
    pub fn get_mut(&mut self, slug: &str) -> Option<&mut ConnectorInfo> {
        self.connectors.get_mut(slug)
    }

    /// Returns `true` if a connector with `slug` is registered.
    pub fn contains(&self, slug: &str) -> bool {
        self.connectors.contains_key(slug)
    }

    /// Returns the number of registered connectors.
    pub fn len(&self) -> usize {
        self.connectors.len()
    }

    /// Returns `true` if no connectors are registered.
    pub fn is_empty(&self) -> bool {
        self.connectors.is_empty()
    }

    /// Returns the registered slugs in sorted order.
    pub fn slugs(&self) -> Vec<&str> {
        let mut slugs: Vec<&str> = self.connectors.keys().map(String::as_str).collect();
        slugs.sort_unstable();
        slugs
    }

    /// Returns the connectors sorted by slug.
    pub fn connectors(&self) -> Vec<&ConnectorInfo> {
        let mut connectors: Vec<&ConnectorInfo> = self.connectors.values().collect();
        connectors.sort_by(|a, b| a.slug.cmp(&b.slug));
        connectors
    }

    /// Returns a reference to the source metadata.
    pub fn source(&self) -> &RegistrySource {
        &self.source
    }

    /// Copies every connector into an unsealed bundle.
    pub fn to_bundle(
        &self,
        version: impl Into<String>,
        generated_at: impl Into<String>,
    ) -> ConnectorBundle {
        let mut bundle = ConnectorBundle::new(version, generated_at);
        bundle.connectors = self.connectors().into_iter().cloned().collect();
        bundle
    }
}

impl Default for ConnectorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Picks the first connector source that loads cleanly.
///
/// A source is either a connector directory tree, checked against the
/// builder's [`RegistryConfig`], or a bundle file. Sources are not merged:
/// the registry comes entirely from one of them, and a failing source is
/// logged and passed over.
///
/// # Example
///
/// ```no_run
/// use connector_sdk_registry::ConnectorRegistry;
///
/// let registry = ConnectorRegistry::builder()
///     .from_dir("/opt/connectors/")
///     .from_bundle("/opt/connectors.json")
///     .build()
///     .unwrap();
/// ```
pub struct RegistryBuilder {
    sources: Vec<RegistrySource>,
    config: RegistryConfig,
}

impl RegistryBuilder {
    /// Creates a builder with no sources and the default config.
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
            config: RegistryConfig::default(),
        }
    }

    /// Sets the config applied to directory sources.
    pub fn with_config(mut self, config: RegistryConfig) -> Self {
        self.config = config;
        self
    }

    /// Adds a directory of connector directories as a source.
    pub fn from_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.sources.push(RegistrySource::Directory(path.into()));
        self
    }

    /// Adds a [`ConnectorBundle`] file as a source.
    pub fn from_bundle(mut self, path: impl Into<PathBuf>) -> Self {
        self.sources.push(RegistrySource::Bundle(path.into()));
        self
    }

    /// Loads the registry from the first source that succeeds.
    ///
    /// The registry's [`source`](ConnectorRegistry::source) records every
    /// listed source.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NoSourcesAvailable`] when no source was added
    /// or none of them loaded.
    pub fn build(self) -> Result<ConnectorRegistry> {
        if self.sources.is_empty() {
            return Err(RegistryError::NoSourcesAvailable);
        }

        let all_sources = self.sources.clone();

        for source in &self.sources {
            let result = match source {
                RegistrySource::Directory(path) => {
                    ConnectorRegistry::from_dir_with_config(path, &self.config)
                }
                RegistrySource::Bundle(path) => ConnectorRegistry::from_bundle(path),
                RegistrySource::Memory | RegistrySource::Multiple(_) => continue,
            };

            match result {
                Ok(mut registry) => {
                    registry.source = RegistrySource::Multiple(all_sources);
                    return Ok(registry);
                }
                Err(err) => warn!(source = ?source, error = %err, "Connector source failed"),
            }
        }

        Err(RegistryError::NoSourcesAvailable)
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}
