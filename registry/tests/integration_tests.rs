use std::fs;
use std::path::Path;

use connector_sdk_core::{
    AuthSecretField, AuthType, ConnectorCategory, ConnectorInfo, Field, JsonField, OperationInfo,
    Presentable, SelectField, SelectOption, ShortTextField, TriggerInfo, TriggerStrategy,
};
use serde_json::Value;
use connector_sdk_registry::{
    ConnectorBundle, ConnectorRegistry, RegistryConfig, RegistryError, load_connector_dir,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn write_connector(root: &Path, dir_name: &str, manifest: &str, readme: Option<&str>) {
    let dir = root.join(dir_name);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("connector.toml"), manifest).unwrap();
    if let Some(readme) = readme {
        fs::write(dir.join("README.md"), readme).unwrap();
    }
}

fn manifest(name: &str, category: &str) -> String {
    format!(
        r#"[connector]
name = "{name}"
description = "{name} integration"
version = "1.0.0"
category = "{category}"
tags = ["test"]
"#
    )
}

fn seed_connectors(root: &Path) {
    write_connector(
        root,
        "slack",
        &manifest("Slack", "communication"),
        Some("# Slack\n\nPost messages.\n"),
    );
    write_connector(root, "github", &manifest("GitHub", "developer_tools"), None);
    write_connector(root, "stripe", &manifest("Stripe", "finance"), Some("# Stripe\n"));
}

// ---------------------------------------------------------------------------
// Directory loading
// ---------------------------------------------------------------------------

#[test]
fn test_directory_loading() {
    let root = tempfile::tempdir().unwrap();
    seed_connectors(root.path());

    let registry = ConnectorRegistry::from_dir(root.path()).unwrap();
    assert_eq!(registry.len(), 3);
    assert_eq!(registry.slugs(), vec!["github", "slack", "stripe"]);

    let slack = registry.get("slack").unwrap();
    assert_eq!(slack.category, ConnectorCategory::Communication);
    assert_eq!(
        slack.documentation.as_deref(),
        Some("# Slack\n\nPost messages.\n")
    );
    assert_eq!(slack.tags, vec!["test"]);
}

#[test]
fn test_load_single_connector_dir() {
    let root = tempfile::tempdir().unwrap();
    seed_connectors(root.path());

    let info = load_connector_dir(root.path().join("github")).unwrap();
    assert_eq!(info.slug, "github");
    assert!(info.documentation.is_none());

    let result = load_connector_dir(root.path());
    assert!(matches!(result, Err(RegistryError::MissingManifest(_))));
}

#[test]
fn test_invalid_manifest_fails_directory_load() {
    let root = tempfile::tempdir().unwrap();
    seed_connectors(root.path());
    write_connector(
        root.path(),
        "broken",
        "[connector]\nname = \"Broken\"\ndescription = \"x\"\nversion = \"1.0\"\n",
        None,
    );

    let result = ConnectorRegistry::from_dir(root.path());
    match result {
        Err(RegistryError::InvalidConnector { slug, errors }) => {
            assert_eq!(slug, "broken");
            assert_eq!(errors.len(), 1);
        }
        other => panic!("expected invalid connector, got {other:?}"),
    }
}

#[test]
fn test_config_filters_connectors() {
    let root = tempfile::tempdir().unwrap();
    seed_connectors(root.path());

    let config_path = root.path().join("connectors.yml");
    fs::write(
        &config_path,
        "version: \"1.0\"\nexclude:\n  - stripe\nvalidation:\n  require_readme: false\n",
    )
    .unwrap();
    let config = RegistryConfig::load(&config_path).unwrap();

    let registry = ConnectorRegistry::from_dir_with_config(root.path(), &config).unwrap();
    assert_eq!(registry.slugs(), vec!["github", "slack"]);
}

// ---------------------------------------------------------------------------
// Registration with code-defined operations
// ---------------------------------------------------------------------------

#[test]
fn test_register_loaded_connector_with_operations() {
    let root = tempfile::tempdir().unwrap();
    seed_connectors(root.path());

    let info = load_connector_dir(root.path().join("slack"))
        .unwrap()
        .with_auth(AuthSecretField::new().build())
        .with_operation(
            OperationInfo::new("send_message", "Posts a message").with_input([(
                "channel",
                ShortTextField::new().with_required(true).build(),
            )]),
        )
        .with_trigger(TriggerInfo::new(
            "new_message",
            "A message was posted",
            TriggerStrategy::AppWebhook,
        ));

    let mut registry = ConnectorRegistry::new();
    registry.register(info).unwrap();

    let slack = registry.get("slack").unwrap();
    assert_eq!(slack.auth_type(), AuthType::Secret);
    assert!(slack.find_operation("send_message").is_some());
    assert!(slack.find_trigger("new_message").is_some());
}

// ---------------------------------------------------------------------------
// Bundles
// ---------------------------------------------------------------------------

#[test]
fn test_bundle_round_trip_through_registry() {
    let root = tempfile::tempdir().unwrap();
    seed_connectors(root.path());
    let bundle_path = root.path().join("connectors.json");

    let registry = ConnectorRegistry::from_dir(root.path()).unwrap();
    let mut bundle = registry.to_bundle("1.0.0", "2026-03-01T12:00:00Z");
    bundle.name = Some("default".to_string());
    bundle.seal().unwrap();
    bundle.save(&bundle_path).unwrap();

    let loaded = ConnectorBundle::load(&bundle_path).unwrap();
    assert_eq!(loaded.connector_count(), 3);
    loaded.verify().unwrap();

    let from_bundle = ConnectorRegistry::from_bundle(&bundle_path).unwrap();
    assert_eq!(from_bundle.slugs(), registry.slugs());
    assert_eq!(from_bundle.get("slack"), registry.get("slack"));
}

#[test]
fn test_sealed_bundle_with_null_values_verifies_after_reload() {
    let root = tempfile::tempdir().unwrap();
    let bundle_path = root.path().join("connectors.json");

    let operation = OperationInfo::new("upsert", "Writes a record")
        .with_input([
            ("payload", JsonField::new().with_default(Value::Null).build()),
            (
                "mode",
                SelectField::new()
                    .with_options(vec![
                        SelectOption::new("None", Value::Null),
                        SelectOption::new("Merge", "merge"),
                    ])
                    .build(),
            ),
        ])
        .with_sample_output(Value::Null);
    let connector = ConnectorInfo::new("Records", "Record store", "1.0.0").with_operation(operation);

    let mut registry = ConnectorRegistry::new();
    registry.register(connector).unwrap();
    let mut bundle = registry.to_bundle("1.0.0", "2026-03-01T12:00:00Z");
    bundle.seal().unwrap();
    bundle.save(&bundle_path).unwrap();

    let loaded = ConnectorBundle::load(&bundle_path).unwrap();
    loaded.verify().unwrap();
    assert_eq!(loaded, bundle);

    let reloaded = ConnectorRegistry::from_bundle(&bundle_path).unwrap();
    assert_eq!(reloaded.get("records"), registry.get("records"));
}

#[test]
fn test_unsealed_bundle_loads_without_verification() {
    let root = tempfile::tempdir().unwrap();
    let bundle_path = root.path().join("connectors.json");

    let mut bundle = ConnectorBundle::new("1.0.0", "2026-03-01T12:00:00Z");
    bundle.connectors.push(
        ConnectorInfo::new("Echo", "Echoes input", "0.1.0").with_slug("echo"),
    );
    bundle.save(&bundle_path).unwrap();

    let registry = ConnectorRegistry::from_bundle(&bundle_path).unwrap();
    assert!(registry.contains("echo"));
}

#[test]
fn test_builder_prefers_first_working_source() {
    let root = tempfile::tempdir().unwrap();
    let connectors = root.path().join("connectors");
    fs::create_dir_all(&connectors).unwrap();
    seed_connectors(&connectors);

    let bundle_path = root.path().join("connectors.json");
    let mut bundle = ConnectorBundle::new("1.0.0", "2026-03-01T12:00:00Z");
    bundle.connectors.push(
        ConnectorInfo::new("Echo", "Echoes input", "0.1.0").with_slug("echo"),
    );
    bundle.seal().unwrap();
    bundle.save(&bundle_path).unwrap();

    let registry = ConnectorRegistry::builder()
        .from_dir(&connectors)
        .from_bundle(&bundle_path)
        .build()
        .unwrap();
    assert_eq!(registry.len(), 3);
    assert!(!registry.contains("echo"));

    let registry = ConnectorRegistry::builder()
        .from_dir(root.path().join("missing"))
        .from_bundle(&bundle_path)
        .build()
        .unwrap();
    assert_eq!(registry.slugs(), vec!["echo"]);
}
