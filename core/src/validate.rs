//! Schema and connector metadata validation.
//!
//! Field constructors never check their input. These functions run one layer
//! up, before a connector is registered or bundled, and collect every
//! structural problem they find instead of stopping at the first.
//!
//! # Examples
//!
//! ```
//! use connector_sdk_core::*;
//!
//! let form = ObjectField::new()
//!     .with_properties([("age", NumberField::new().with_minimum(0.0).build())])
//!     .build();
//! assert!(validate_schema(&form).is_empty());
//!
//! // minimum above maximum
//! let bad = NumberField::new().with_minimum(10.0).with_maximum(1.0).build();
//! assert!(!validate_schema(&bad).is_empty());
//! ```

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::{ConnectorInfo, ControlType, OperationInfo, SchemaNode, SchemaType, TriggerInfo};

static VERSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\d+\.\d+$").expect("static regex must compile"));

static SLUG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("static regex must compile")
});

/// Path of the root node in schema error messages.
const ROOT_PATH: &str = "$";

/// Schema and metadata validation errors.
///
/// Schema variants carry the dotted path of the offending node, starting at
/// `$` for the root (`$.address.city`, `$.tags.items`).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("connector name cannot be empty")]
    EmptyConnectorName,
    #[error("connector `{0}` must have a description")]
    EmptyConnectorDescription(String),
    #[error("connector `{0}` must have a version")]
    EmptyVersion(String),
    /// Version is not `MAJOR.MINOR.PATCH`.
    #[error("invalid connector version `{0}` (expected MAJOR.MINOR.PATCH)")]
    InvalidVersion(String),
    /// Slug contains characters other than lowercase ASCII letters, digits
    /// and single inner dashes.
    #[error("invalid connector slug `{0}`")]
    InvalidSlug(String),
    #[error("operation name cannot be empty")]
    EmptyOperationName,
    #[error("operation `{0}` must have a description")]
    EmptyOperationDescription(String),
    #[error("trigger name cannot be empty")]
    EmptyTriggerName,
    #[error("trigger `{0}` must have a description")]
    EmptyTriggerDescription(String),
    #[error("duplicate operation in connector: {0}")]
    DuplicateOperation(String),
    #[error("duplicate trigger in connector: {0}")]
    DuplicateTrigger(String),
    /// A name in `required` has no matching property.
    #[error("{path}: required field `{name}` is not a property")]
    UnknownRequiredField { path: String, name: String },
    #[error("{path}: control `{control}` cannot render a `{schema_type}` value")]
    IncompatibleControl {
        path: String,
        control: ControlType,
        schema_type: SchemaType,
    },
    /// A numeric bound is NaN or infinite, which JSON cannot carry.
    #[error("{path}: {keyword} must be a finite number, got {value}")]
    NonFiniteBound {
        path: String,
        keyword: String,
        value: f64,
    },
    #[error("{path}: minimum {minimum} is greater than maximum {maximum}")]
    InvertedRange {
        path: String,
        minimum: f64,
        maximum: f64,
    },
    #[error("{path}: minLength {min} is greater than maxLength {max}")]
    InvertedLength { path: String, min: u64, max: u64 },
    #[error("{path}: minItems {min} is greater than maxItems {max}")]
    InvertedItems { path: String, min: u64, max: u64 },
    #[error("{path}: invalid pattern `{pattern}`: {reason}")]
    InvalidPattern {
        path: String,
        pattern: String,
        reason: String,
    },
    /// Auth settings attached to a control that is not an auth control.
    #[error("{path}: auth settings require an auth control")]
    MisplacedAuth { path: String },
    /// `isDynamic` is set but no resolver is configured.
    #[error("{path}: dynamic field has no options source")]
    MissingDynamicSource { path: String },
}

/// Validates an AutoForm schema tree.
///
/// Walks the node and every descendant (properties, items, compositions and
/// schema dependencies) and reports structural problems.
///
/// # Examples
///
/// ```
/// use connector_sdk_core::*;
///
/// let mut form = ObjectField::new()
///     .with_properties([("name", ShortTextField::new().build())])
///     .build();
/// form.required_fields.push("email".to_string());
///
/// let errors = validate_schema(&form);
/// assert_eq!(
///     errors,
///     vec![ValidationError::UnknownRequiredField {
///         path: "$".to_string(),
///         name: "email".to_string(),
///     }]
/// );
/// ```
pub fn validate_schema(node: &SchemaNode) -> Vec<ValidationError> {
    validate_schema_at(node, ROOT_PATH)
}

fn validate_schema_at(node: &SchemaNode, root: &str) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    walk(node, root, &mut errors);
    errors
}

fn walk(node: &SchemaNode, path: &str, errors: &mut Vec<ValidationError>) {
    check_node(node, path, errors);

    for (name, child) in &node.properties {
        walk(child, &format!("{path}.{name}"), errors);
    }
    if let Some(items) = &node.items {
        walk(items, &format!("{path}.items"), errors);
    }
    if let Some(additional) = &node.additional_items {
        walk(additional, &format!("{path}.additionalItems"), errors);
    }
    for (key, children) in [
        ("oneOf", &node.one_of),
        ("anyOf", &node.any_of),
        ("allOf", &node.all_of),
    ] {
        for (index, child) in children.iter().enumerate() {
            walk(child, &format!("{path}.{key}[{index}]"), errors);
        }
    }
    if let Some(not) = &node.not {
        walk(not, &format!("{path}.not"), errors);
    }
    for (name, dependency) in &node.dependencies {
        if let crate::Dependency::Schema(schema) = dependency {
            walk(schema, &format!("{path}.dependencies.{name}"), errors);
        }
    }
}

fn check_node(node: &SchemaNode, path: &str, errors: &mut Vec<ValidationError>) {
    for name in &node.required_fields {
        if !node.properties.contains_key(name) {
            errors.push(ValidationError::UnknownRequiredField {
                path: path.to_string(),
                name: name.clone(),
            });
        }
    }

    if let (Some(control), Some(schema_type)) = (node.control_type(), node.schema_type) {
        if !control.is_compatible_with(schema_type) {
            errors.push(ValidationError::IncompatibleControl {
                path: path.to_string(),
                control,
                schema_type,
            });
        }
    }

    let mut bounds_finite = true;
    for (keyword, bound) in [
        ("minimum", node.minimum),
        ("maximum", node.maximum),
        ("exclusiveMinimum", node.exclusive_minimum),
        ("exclusiveMaximum", node.exclusive_maximum),
    ] {
        if let Some(value) = bound.filter(|v| !v.is_finite()) {
            bounds_finite = false;
            errors.push(ValidationError::NonFiniteBound {
                path: path.to_string(),
                keyword: keyword.to_string(),
                value,
            });
        }
    }

    if let (true, Some(minimum), Some(maximum)) = (bounds_finite, node.minimum, node.maximum) {
        if minimum > maximum {
            errors.push(ValidationError::InvertedRange {
                path: path.to_string(),
                minimum,
                maximum,
            });
        }
    }

    if let (Some(min), Some(max)) = (node.min_length, node.max_length) {
        if min > max {
            errors.push(ValidationError::InvertedLength {
                path: path.to_string(),
                min,
                max,
            });
        }
    }

    if let (Some(min), Some(max)) = (node.min_items, node.max_items) {
        if min > max {
            errors.push(ValidationError::InvertedItems {
                path: path.to_string(),
                min,
                max,
            });
        }
    }

    if let Some(pattern) = &node.pattern {
        if let Err(err) = Regex::new(pattern) {
            errors.push(ValidationError::InvalidPattern {
                path: path.to_string(),
                pattern: pattern.clone(),
                reason: err.to_string(),
            });
        }
    }

    if node.ui.auth.is_some() && !node.is_auth() {
        errors.push(ValidationError::MisplacedAuth {
            path: path.to_string(),
        });
    }

    let has_source = node
        .ui
        .dynamic
        .as_ref()
        .is_some_and(|source| !source.resolver.trim().is_empty());
    if node.is_dynamic && !has_source {
        errors.push(ValidationError::MissingDynamicSource {
            path: path.to_string(),
        });
    }
}

/// Validates operation metadata and its input schema.
///
/// Input schema paths are rooted at the operation name.
pub fn validate_operation(operation: &OperationInfo) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if operation.name.trim().is_empty() {
        errors.push(ValidationError::EmptyOperationName);
        return errors;
    }
    if operation.description.trim().is_empty() {
        errors.push(ValidationError::EmptyOperationDescription(
            operation.name.clone(),
        ));
    }

    errors.extend(validate_schema_at(
        &operation.input_schema(),
        &operation.name,
    ));
    errors
}

/// Validates trigger metadata and its input schema.
///
/// Input schema paths are rooted at the trigger name.
pub fn validate_trigger(trigger: &TriggerInfo) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if trigger.name.trim().is_empty() {
        errors.push(ValidationError::EmptyTriggerName);
        return errors;
    }
    if trigger.description.trim().is_empty() {
        errors.push(ValidationError::EmptyTriggerDescription(trigger.name.clone()));
    }

    errors.extend(validate_schema_at(&trigger.input_schema(), &trigger.name));
    errors
}

/// Validates a connector with all of its operations, triggers and auth
/// schema.
///
/// An empty name stops validation immediately; everything else is
/// collected.
///
/// # Examples
///
/// ```
/// use connector_sdk_core::*;
///
/// let connector = ConnectorInfo::new("Slack", "Team messaging", "1.0")
///     .with_slug("slack")
///     .with_operation(OperationInfo::new("send", "Send a message"))
///     .with_operation(OperationInfo::new("send", "Send again"));
///
/// let errors = validate_connector(&connector);
/// assert!(errors.contains(&ValidationError::InvalidVersion("1.0".to_string())));
/// assert!(errors.contains(&ValidationError::DuplicateOperation("send".to_string())));
/// ```
pub fn validate_connector(connector: &ConnectorInfo) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if connector.name.trim().is_empty() {
        errors.push(ValidationError::EmptyConnectorName);
        return errors;
    }
    if connector.description.trim().is_empty() {
        errors.push(ValidationError::EmptyConnectorDescription(
            connector.name.clone(),
        ));
    }
    if connector.version.trim().is_empty() {
        errors.push(ValidationError::EmptyVersion(connector.name.clone()));
    } else if !VERSION_RE.is_match(&connector.version) {
        errors.push(ValidationError::InvalidVersion(connector.version.clone()));
    }
    if !SLUG_RE.is_match(&connector.slug) {
        errors.push(ValidationError::InvalidSlug(connector.slug.clone()));
    }

    let mut seen: HashSet<&str> = HashSet::new();
    for operation in &connector.operations {
        if !seen.insert(operation.name.as_str()) {
            errors.push(ValidationError::DuplicateOperation(operation.name.clone()));
            continue;
        }
        errors.extend(validate_operation(operation));
    }

    let mut seen: HashSet<&str> = HashSet::new();
    for trigger in &connector.triggers {
        if !seen.insert(trigger.name.as_str()) {
            errors.push(ValidationError::DuplicateTrigger(trigger.name.clone()));
            continue;
        }
        errors.extend(validate_trigger(trigger));
    }

    if let Some(auth) = &connector.auth {
        errors.extend(validate_schema_at(auth, "auth"));
    }

    errors
}

#[cfg(test)]
mod tests {
    use crate::fields::{
        ArrayField, AuthBasicField, CustomAuthField, DynamicField, Field, NumberField,
        ObjectField, OAuthField, Presentable, ShortTextField, TextConstraints,
    };
    use crate::{AuthSchema, Dependency, SchemaBuilder, TriggerStrategy};

    use super::*;

    #[test]
    fn test_built_fields_are_valid() {
        let form = ObjectField::new()
            .with_properties([
                ("name", ShortTextField::new().with_required(true).build()),
                (
                    "tags",
                    ArrayField::new()
                        .with_items(ShortTextField::new().build())
                        .with_min_items(1)
                        .with_max_items(3)
                        .build(),
                ),
                ("owner", DynamicField::new("list_users").build()),
            ])
            .build();

        assert!(validate_schema(&form).is_empty());
    }

    #[test]
    fn test_auth_fields_are_valid() {
        let oauth = OAuthField::new(
            "https://example.com/authorize",
            "https://example.com/token",
            vec!["read".to_string()],
        )
        .build();
        assert!(validate_schema(&oauth).is_empty());
        assert!(validate_schema(&AuthBasicField::new().build()).is_empty());

        let custom = CustomAuthField::new("https://example.com/auth", None, vec![])
            .with_properties([("tenant", ShortTextField::new().build())])
            .build();
        assert!(validate_schema(&custom).is_empty());
    }

    #[test]
    fn test_nested_errors_carry_dotted_path() {
        let address = ObjectField::new()
            .with_properties([(
                "zip",
                ShortTextField::new()
                    .with_min_length(9)
                    .with_max_length(5)
                    .build(),
            )])
            .build();
        let form = ObjectField::new()
            .with_properties([("address", address)])
            .build();

        assert_eq!(
            validate_schema(&form),
            vec![ValidationError::InvertedLength {
                path: "$.address.zip".to_string(),
                min: 9,
                max: 5,
            }]
        );
    }

    #[test]
    fn test_incompatible_control_type() {
        let node = SchemaBuilder::new()
            .schema_type(SchemaType::Boolean)
            .control_type(ControlType::ShortText)
            .build();

        assert_eq!(
            validate_schema(&node),
            vec![ValidationError::IncompatibleControl {
                path: "$".to_string(),
                control: ControlType::ShortText,
                schema_type: SchemaType::Boolean,
            }]
        );
    }

    #[test]
    fn test_invalid_pattern_is_reported() {
        let node = ShortTextField::new().with_pattern("([a-z]").build();
        let errors = validate_schema(&node);
        assert_eq!(errors.len(), 1);
        assert!(matches!(
            &errors[0],
            ValidationError::InvalidPattern { pattern, .. } if pattern == "([a-z]"
        ));
    }

    #[test]
    fn test_inverted_item_bounds_inside_items() {
        let nested = ArrayField::new().with_min_items(4).with_max_items(2).build();
        let node = ArrayField::new().with_items(nested).build();

        assert_eq!(
            validate_schema(&node),
            vec![ValidationError::InvertedItems {
                path: "$.items".to_string(),
                min: 4,
                max: 2,
            }]
        );
    }

    #[test]
    fn test_compositions_and_schema_dependencies_are_walked() {
        let inverted = || NumberField::new().with_minimum(5.0).with_maximum(1.0).build();
        let mut node = SchemaNode {
            schema_type: Some(SchemaType::Object),
            additional_items: Some(Box::new(inverted())),
            one_of: vec![ShortTextField::new().build(), inverted()],
            any_of: vec![inverted()],
            all_of: vec![inverted()],
            not: Some(Box::new(inverted())),
            ..Default::default()
        };
        node.dependencies.insert(
            "plan".to_string(),
            Dependency::Properties(vec!["seats".to_string()]),
        );
        node.dependencies.insert(
            "billing".to_string(),
            Dependency::Schema(Box::new(inverted())),
        );

        let paths: Vec<String> = validate_schema(&node)
            .into_iter()
            .map(|err| match err {
                ValidationError::InvertedRange { path, minimum, maximum } => {
                    assert_eq!((minimum, maximum), (5.0, 1.0));
                    path
                }
                other => panic!("unexpected error: {other:?}"),
            })
            .collect();
        assert_eq!(
            paths,
            vec![
                "$.additionalItems",
                "$.oneOf[1]",
                "$.anyOf[0]",
                "$.allOf[0]",
                "$.not",
                "$.dependencies.billing",
            ]
        );
    }

    #[test]
    fn test_non_finite_bounds_are_reported() {
        let node = NumberField::new()
            .with_minimum(f64::NAN)
            .with_maximum(1.0)
            .with_exclusive_maximum(f64::INFINITY)
            .build();

        let errors = validate_schema(&node);
        assert_eq!(errors.len(), 2, "unexpected errors: {errors:?}");
        assert!(matches!(
            &errors[0],
            ValidationError::NonFiniteBound { path, keyword, value }
                if path == "$" && keyword == "minimum" && value.is_nan()
        ));
        assert!(matches!(
            &errors[1],
            ValidationError::NonFiniteBound { keyword, value, .. }
                if keyword == "exclusiveMaximum" && *value == f64::INFINITY
        ));
    }

    #[test]
    fn test_infinite_bounds_skip_range_comparison() {
        let node = NumberField::new()
            .with_minimum(f64::INFINITY)
            .with_maximum(0.0)
            .build();

        let errors = validate_schema(&node);
        assert_eq!(errors.len(), 1);
        assert!(matches!(&errors[0], ValidationError::NonFiniteBound { .. }));
    }

    #[test]
    fn test_auth_extension_requires_auth_control() {
        let mut builder = SchemaBuilder::new();
        builder
            .schema_type(SchemaType::String)
            .control_type(ControlType::ShortText)
            .auth(AuthSchema::default());

        assert_eq!(
            validate_schema(&builder.build()),
            vec![ValidationError::MisplacedAuth {
                path: "$".to_string()
            }]
        );
    }

    #[test]
    fn test_dynamic_flag_without_source() {
        let node = SchemaBuilder::new().is_dynamic(true).build();
        assert_eq!(
            validate_schema(&node),
            vec![ValidationError::MissingDynamicSource {
                path: "$".to_string()
            }]
        );
    }

    #[test]
    fn test_operation_errors_are_rooted_at_name() {
        let mut input = ShortTextField::new().build();
        input.required_fields.push("ghost".to_string());
        let op = OperationInfo::new("lookup", "").with_input([("query", input)]);

        assert_eq!(
            validate_operation(&op),
            vec![
                ValidationError::EmptyOperationDescription("lookup".to_string()),
                ValidationError::UnknownRequiredField {
                    path: "lookup.query".to_string(),
                    name: "ghost".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_trigger_requires_name() {
        let trigger = TriggerInfo::new("  ", "desc", TriggerStrategy::Manual);
        assert_eq!(
            validate_trigger(&trigger),
            vec![ValidationError::EmptyTriggerName]
        );
    }

    #[test]
    fn test_connector_requires_name_first() {
        let connector = ConnectorInfo::new("", "", "");
        assert_eq!(
            validate_connector(&connector),
            vec![ValidationError::EmptyConnectorName]
        );
    }

    #[test]
    fn test_connector_reports_slug_and_duplicate_trigger() {
        let connector = ConnectorInfo::new("Drive", "Files", "2.1.0")
            .with_slug("Google Drive")
            .with_trigger(TriggerInfo::new("new_file", "New file", TriggerStrategy::Polling))
            .with_trigger(TriggerInfo::new("new_file", "Again", TriggerStrategy::Webhook));

        assert_eq!(
            validate_connector(&connector),
            vec![
                ValidationError::InvalidSlug("Google Drive".to_string()),
                ValidationError::DuplicateTrigger("new_file".to_string()),
            ]
        );
    }

    #[test]
    fn test_connector_auth_schema_is_validated() {
        let mut auth = AuthBasicField::new().build();
        auth.required_fields.push("token".to_string());
        let connector = ConnectorInfo::new("Jira", "Issues", "1.0.0")
            .with_slug("jira")
            .with_auth(auth);

        assert_eq!(
            validate_connector(&connector),
            vec![ValidationError::UnknownRequiredField {
                path: "auth".to_string(),
                name: "token".to_string(),
            }]
        );
    }

    #[test]
    fn test_version_and_slug_patterns() {
        assert!(VERSION_RE.is_match("0.10.3"));
        assert!(!VERSION_RE.is_match("1.0"));
        assert!(!VERSION_RE.is_match("v1.0.0"));
        assert!(SLUG_RE.is_match("google-sheets-2"));
        assert!(!SLUG_RE.is_match("-leading"));
        assert!(!SLUG_RE.is_match("double--dash"));
        assert!(!SLUG_RE.is_match(""));
    }
}
