//! Connector manifests (`connector.toml`).
//!
//! Every connector directory carries a TOML manifest with its catalog
//! metadata and, optionally, a `README.md` used as long-form documentation.
//!
//! # Example manifest
//!
//! ```toml
//! [connector]
//! name = "Google Sheets"
//! description = "Read and write spreadsheet rows"
//! version = "1.2.0"
//! category = "productivity"
//! icon = "sheets.svg"
//! authors = ["Integrations Team"]
//! tags = ["spreadsheet", "google"]
//! ```

use std::path::Path;

use connector_sdk_core::{ConnectorCategory, ConnectorInfo};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{RegistryError, Result};
use crate::slug::slugify;

/// File name of the manifest inside a connector directory.
pub const MANIFEST_FILE: &str = "connector.toml";

/// File name of the optional connector documentation.
pub const README_FILE: &str = "README.md";

/// Parsed `connector.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectorManifest {
    pub connector: ConnectorSection,
}

/// The `[connector]` table of a manifest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectorSection {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    pub description: String,
    pub version: String,
    #[serde(default)]
    pub category: ConnectorCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default)]
    pub authors: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl ConnectorManifest {
    /// Parses a manifest from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Toml`] if the text is not a valid manifest,
    /// including unknown `category` values.
    ///
    /// # Examples
    ///
    /// ```
    /// use connector_sdk_registry::ConnectorManifest;
    ///
    /// let manifest = ConnectorManifest::parse(r#"
    /// [connector]
    /// name = "Slack"
    /// description = "Team messaging"
    /// version = "1.0.0"
    /// category = "communication"
    /// "#).unwrap();
    ///
    /// let info = manifest.into_connector_info();
    /// assert_eq!(info.slug, "slack");
    /// ```
    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Reads and parses a manifest file.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Io`] if the file cannot be read, or
    /// [`RegistryError::Toml`] if parsing fails.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// Converts the manifest into connector metadata with a slug derived
    /// from the name.
    pub fn into_connector_info(self) -> ConnectorInfo {
        let section = self.connector;
        let slug = slugify(&section.name);
        let mut info = ConnectorInfo::new(section.name, section.description, section.version)
            .with_slug(slug)
            .with_category(section.category);
        info.display_name = section.display_name;
        info.icon = section.icon;
        info.authors = section.authors;
        info.tags = section.tags;
        info
    }
}

/// Loads a connector directory: `connector.toml` plus an optional
/// `README.md`.
///
/// # Errors
///
/// Returns [`RegistryError::MissingManifest`] if the directory has no
/// manifest, or the manifest's read/parse error.
pub fn load_connector_dir(dir: impl AsRef<Path>) -> Result<ConnectorInfo> {
    let dir = dir.as_ref();
    let manifest_path = dir.join(MANIFEST_FILE);
    if !manifest_path.is_file() {
        return Err(RegistryError::MissingManifest(dir.to_path_buf()));
    }

    let mut info = ConnectorManifest::load(&manifest_path)?.into_connector_info();

    let readme_path = dir.join(README_FILE);
    if readme_path.is_file() {
        info.documentation = Some(std::fs::read_to_string(&readme_path)?);
    }

    debug!(
        slug = %info.slug,
        path = %dir.display(),
        has_readme = info.documentation.is_some(),
        "Loaded connector manifest"
    );
    Ok(info)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MANIFEST: &str = r#"
[connector]
name = "GitHub Issues"
display_name = "GitHub"
description = "Track issues and pull requests"
version = "0.4.2"
category = "developer_tools"
authors = ["Platform Team"]
tags = ["git", "issues"]
"#;

    #[test]
    fn test_parse_full_manifest() {
        let manifest = ConnectorManifest::parse(MANIFEST).unwrap();
        let section = &manifest.connector;
        assert_eq!(section.name, "GitHub Issues");
        assert_eq!(section.display_name.as_deref(), Some("GitHub"));
        assert_eq!(section.category, ConnectorCategory::DeveloperTools);
        assert_eq!(section.tags, vec!["git", "issues"]);
        assert!(section.icon.is_none());
    }

    #[test]
    fn test_into_connector_info_derives_slug() {
        let info = ConnectorManifest::parse(MANIFEST)
            .unwrap()
            .into_connector_info();
        assert_eq!(info.slug, "github-issues");
        assert_eq!(info.title(), "GitHub");
        assert_eq!(info.version, "0.4.2");
        assert_eq!(info.authors, vec!["Platform Team"]);
    }

    #[test]
    fn test_optional_fields_default() {
        let manifest = ConnectorManifest::parse(
            "[connector]\nname = \"Echo\"\ndescription = \"Echo\"\nversion = \"1.0.0\"\n",
        )
        .unwrap();
        assert_eq!(manifest.connector.category, ConnectorCategory::App);
        assert!(manifest.connector.authors.is_empty());
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        let result = ConnectorManifest::parse(
            "[connector]\nname = \"X\"\ndescription = \"X\"\nversion = \"1.0.0\"\ncategory = \"games\"\n",
        );
        assert!(matches!(result, Err(RegistryError::Toml(_))));
    }

    #[test]
    fn test_missing_connector_table_is_rejected() {
        let result = ConnectorManifest::parse("name = \"X\"\n");
        assert!(matches!(result, Err(RegistryError::Toml(_))));
    }
}
