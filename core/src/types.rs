//! AutoForm schema type definitions.
//!
//! This module defines the data model used to describe one configurable
//! input of a connector operation or trigger. A [`SchemaNode`] mixes a
//! JSON-Schema-like validation description (type, constraints, nested
//! children) with presentation hints for the host UI ([`UiProps`]).
//!
//! The JSON representation is produced by the `document` module, which owns
//! the serialization boundary (including the legacy duplicate locations of
//! the `required` and `disabled` flags).

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum::{AsRefStr, Display, EnumIter, EnumString, VariantNames};

/// Version of the AutoForm schema contract (semver).
pub const SCHEMA_CONTRACT_VERSION: &str = "1.0.0";

/// JSON-Schema-like primitive kind of a node.
///
/// # Examples
///
/// ```
/// use connector_sdk_core::SchemaType;
///
/// assert_eq!(SchemaType::Array.to_string(), "array");
/// assert_eq!("object".parse::<SchemaType>().unwrap(), SchemaType::Object);
/// assert!("integer".parse::<SchemaType>().is_err());
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
    EnumIter,
    VariantNames,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SchemaType {
    String,
    Number,
    Boolean,
    Object,
    Array,
}

impl SchemaType {
    /// Returns `true` for the container kinds (`object`, `array`).
    pub fn is_composite(self) -> bool {
        matches!(self, SchemaType::Object | SchemaType::Array)
    }
}

/// UI control used to render a node.
///
/// A control type is a rendering hint only; it is orthogonal to
/// [`SchemaType`]. [`ControlType::is_compatible_with`] documents which
/// pairings the field constructors produce.
///
/// # Examples
///
/// ```
/// use connector_sdk_core::{ControlType, SchemaType};
///
/// assert_eq!(ControlType::ShortText.as_ref(), "short_text");
/// assert_eq!("oauth2".parse::<ControlType>().unwrap(), ControlType::OAuth2);
/// assert!(ControlType::Checkbox.is_compatible_with(SchemaType::Boolean));
/// assert!(!ControlType::Checkbox.is_compatible_with(SchemaType::String));
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
    EnumIter,
    VariantNames,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ControlType {
    ShortText,
    LongText,
    Markdown,
    Number,
    Boolean,
    Checkbox,
    DateTime,
    Select,
    MultiSelect,
    DynamicSelect,
    Array,
    Object,
    GroupArray,
    InputMap,
    Branch,
    Condition,
    Code,
    CodeEditor,
    CodeFramework,
    File,
    #[serde(rename = "oauth2")]
    #[strum(serialize = "oauth2")]
    OAuth2,
    BasicAuth,
    SecretAuth,
    CustomAuth,
    Json,
}

impl ControlType {
    /// Returns the schema type the field constructors pair with this control.
    pub fn canonical_schema_type(self) -> SchemaType {
        match self {
            ControlType::ShortText
            | ControlType::LongText
            | ControlType::Markdown
            | ControlType::DateTime
            | ControlType::Select
            | ControlType::DynamicSelect
            | ControlType::Code
            | ControlType::CodeEditor
            | ControlType::CodeFramework
            | ControlType::File => SchemaType::String,
            ControlType::Number => SchemaType::Number,
            ControlType::Boolean | ControlType::Checkbox => SchemaType::Boolean,
            ControlType::MultiSelect
            | ControlType::Array
            | ControlType::GroupArray
            | ControlType::Branch => SchemaType::Array,
            ControlType::Object
            | ControlType::InputMap
            | ControlType::Condition
            | ControlType::Json
            | ControlType::OAuth2
            | ControlType::BasicAuth
            | ControlType::SecretAuth
            | ControlType::CustomAuth => SchemaType::Object,
        }
    }

    /// Checks whether a node of `schema_type` may be rendered with this
    /// control.
    ///
    /// Select-style controls also accept numeric option values and the JSON
    /// control accepts any composite value.
    pub fn is_compatible_with(self, schema_type: SchemaType) -> bool {
        match self {
            ControlType::Select | ControlType::DynamicSelect => {
                matches!(schema_type, SchemaType::String | SchemaType::Number)
            }
            ControlType::Json => schema_type.is_composite(),
            other => other.canonical_schema_type() == schema_type,
        }
    }

    /// Returns `true` for the credential controls that carry an
    /// [`AuthSchema`].
    pub fn is_auth(self) -> bool {
        matches!(
            self,
            ControlType::OAuth2
                | ControlType::BasicAuth
                | ControlType::SecretAuth
                | ControlType::CustomAuth
        )
    }
}

/// Auth-specific extension carried by OAuth and custom-auth nodes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AuthSchema {
    /// Authorization endpoint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_url: Option<String>,
    /// Token endpoint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_url: Option<String>,
    /// Requested scopes.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub scope: Vec<String>,
    /// Query parameters the host must not forward to the provider.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub excluded_params: Vec<String>,
    /// Name of the redirect parameter expected by the provider.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_param_key: Option<String>,
}

/// Reference to the runtime resolver that produces a dynamic field's
/// options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DynamicSource {
    /// Identifier of the resolver registered by the connector.
    pub resolver: String,
    /// Sibling properties whose values are passed to the resolver.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub depends_on: Vec<String>,
    /// Re-run the resolver while the user types.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub refresh_on_search: bool,
}

impl DynamicSource {
    /// Creates a source backed by `resolver`.
    pub fn new(resolver: impl Into<String>) -> Self {
        Self {
            resolver: resolver.into(),
            ..Default::default()
        }
    }
}

/// Presentation metadata rendered under `ui:props`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UiProps {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub control_type: Option<ControlType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub hidden: bool,
    /// Source language for code controls.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Runtime/framework for code-framework controls.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub framework: Option<String>,
    /// Accepted MIME types for file controls.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub accept: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth: Option<AuthSchema>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dynamic: Option<DynamicSource>,
}

/// Conditional requirement attached to a property name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Dependency {
    /// The listed properties become required.
    Properties(Vec<String>),
    /// The sub-schema must also validate.
    Schema(Box<SchemaNode>),
}

/// One node of an AutoForm schema tree.
///
/// Nodes are normally produced by [`SchemaBuilder`](crate::SchemaBuilder) or
/// one of the field constructors in [`fields`](crate::fields), then
/// serialized to JSON and handed to the host platform.
///
/// `properties` preserves insertion order, and `order` carries the explicit
/// display order separately (it may name keys that are not properties).
///
/// # Examples
///
/// ```
/// use connector_sdk_core::*;
///
/// let node = SchemaBuilder::new()
///     .schema_type(SchemaType::String)
///     .control_type(ControlType::ShortText)
///     .title("Channel")
///     .required(true)
///     .build();
///
/// assert_eq!(node.control_type(), Some(ControlType::ShortText));
/// assert!(node.required);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SchemaNode {
    pub schema_type: Option<SchemaType>,
    pub title: Option<String>,
    pub description: Option<String>,
    /// Canonical required flag; written to both legacy locations on output.
    pub required: bool,
    /// Canonical disabled flag; written to both legacy locations on output.
    pub disabled: bool,
    pub default: Option<Value>,
    pub properties: IndexMap<String, SchemaNode>,
    pub order: Vec<String>,
    /// Names of mandatory properties (serialized as `required`).
    pub required_fields: Vec<String>,
    pub items: Option<Box<SchemaNode>>,
    pub additional_items: Option<Box<SchemaNode>>,
    pub one_of: Vec<SchemaNode>,
    pub any_of: Vec<SchemaNode>,
    pub all_of: Vec<SchemaNode>,
    pub not: Option<Box<SchemaNode>>,
    pub minimum: Option<f64>,
    pub maximum: Option<f64>,
    pub exclusive_minimum: Option<f64>,
    pub exclusive_maximum: Option<f64>,
    pub min_length: Option<u64>,
    pub max_length: Option<u64>,
    pub min_items: Option<u64>,
    pub max_items: Option<u64>,
    pub min_contains: Option<u64>,
    pub max_contains: Option<u64>,
    /// Lower bound for formatted strings (RFC 3339 for date-time fields).
    pub format_minimum: Option<String>,
    /// Upper bound for formatted strings (RFC 3339 for date-time fields).
    pub format_maximum: Option<String>,
    pub pattern: Option<String>,
    pub format: Option<String>,
    pub enum_values: Vec<Value>,
    pub const_value: Option<Value>,
    pub unique_items: bool,
    pub dependencies: IndexMap<String, Dependency>,
    /// Valid values are fetched at runtime, see [`UiProps::dynamic`].
    pub is_dynamic: bool,
    pub ui: UiProps,
}

impl SchemaNode {
    /// Returns the UI control type, if one was set.
    pub fn control_type(&self) -> Option<ControlType> {
        self.ui.control_type
    }

    /// Looks up a direct child property.
    pub fn property(&self, name: &str) -> Option<&SchemaNode> {
        self.properties.get(name)
    }

    /// Returns the property names in display order.
    ///
    /// Names from `order` that are not properties are skipped; properties
    /// missing from `order` follow in insertion order.
    ///
    /// # Examples
    ///
    /// ```
    /// use connector_sdk_core::*;
    ///
    /// let node = ObjectField::new()
    ///     .with_properties([
    ///         ("b", ShortTextField::new().build()),
    ///         ("a", ShortTextField::new().build()),
    ///     ])
    ///     .build();
    /// assert_eq!(node.ordered_property_names(), vec!["b", "a"]);
    /// ```
    pub fn ordered_property_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .order
            .iter()
            .map(String::as_str)
            .filter(|name| self.properties.contains_key(*name))
            .collect();
        for name in self.properties.keys() {
            if !names.contains(&name.as_str()) {
                names.push(name);
            }
        }
        names
    }

    /// Returns `true` if the node is rendered with a credential control.
    pub fn is_auth(&self) -> bool {
        self.control_type().is_some_and(ControlType::is_auth)
    }
}
