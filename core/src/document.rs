//! JSON representation of [`SchemaNode`].
//!
//! The in-memory node keeps a single canonical `required` and `disabled`
//! flag. Hosts built against older schema shapes read them from the top
//! level (`isRequired`, `disabled`), newer ones from `ui:props`, so both
//! locations are written here and either one is honored when reading.
//!
//! # Examples
//!
//! ```
//! use connector_sdk_core::*;
//!
//! let node = ShortTextField::new().with_title("Name").with_required(true).build();
//! let json = serde_json::to_value(&node).unwrap();
//!
//! assert_eq!(json["isRequired"], true);
//! assert_eq!(json["ui:props"]["required"], true);
//! assert_eq!(json["ui:props"]["controlType"], "short_text");
//!
//! let back: SchemaNode = serde_json::from_value(json).unwrap();
//! assert_eq!(back, node);
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::{Dependency, SchemaNode, SchemaType, UiProps};

fn is_false(value: &bool) -> bool {
    !*value
}

fn is_empty_vec<T>(value: &&Vec<T>) -> bool {
    value.is_empty()
}

fn is_empty_map<K, V>(value: &&IndexMap<K, V>) -> bool {
    value.is_empty()
}

/// Reads a present key as `Some`, including an explicit `null`.
///
/// Plain `Option<Value>` maps `null` to `None`, which would drop the key on
/// the next write and change the bytes of a sealed bundle.
pub(crate) fn deserialize_present<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Value>, D::Error> {
    Value::deserialize(deserializer).map(Some)
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DocumentRef<'a> {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    schema_type: Option<SchemaType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    default: Option<&'a Value>,
    #[serde(skip_serializing_if = "is_false")]
    is_required: bool,
    #[serde(skip_serializing_if = "is_false")]
    disabled: bool,
    #[serde(skip_serializing_if = "is_empty_map")]
    properties: &'a IndexMap<String, SchemaNode>,
    #[serde(rename = "required", skip_serializing_if = "is_empty_vec")]
    required_fields: &'a Vec<String>,
    #[serde(skip_serializing_if = "is_empty_vec")]
    order: &'a Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    items: Option<&'a SchemaNode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    additional_items: Option<&'a SchemaNode>,
    #[serde(skip_serializing_if = "is_empty_vec")]
    one_of: &'a Vec<SchemaNode>,
    #[serde(skip_serializing_if = "is_empty_vec")]
    any_of: &'a Vec<SchemaNode>,
    #[serde(skip_serializing_if = "is_empty_vec")]
    all_of: &'a Vec<SchemaNode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    not: Option<&'a SchemaNode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    minimum: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    maximum: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    exclusive_minimum: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    exclusive_maximum: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    min_length: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_length: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    min_items: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_items: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    min_contains: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_contains: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    format_minimum: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    format_maximum: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pattern: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    format: Option<&'a str>,
    #[serde(rename = "enum", skip_serializing_if = "is_empty_vec")]
    enum_values: &'a Vec<Value>,
    #[serde(rename = "const", skip_serializing_if = "Option::is_none")]
    const_value: Option<&'a Value>,
    #[serde(skip_serializing_if = "is_false")]
    unique_items: bool,
    #[serde(skip_serializing_if = "is_empty_map")]
    dependencies: &'a IndexMap<String, Dependency>,
    #[serde(skip_serializing_if = "is_false")]
    is_dynamic: bool,
    #[serde(rename = "ui:props", skip_serializing_if = "UiPropsRef::is_empty")]
    ui: UiPropsRef<'a>,
}

#[derive(Serialize)]
struct UiPropsRef<'a> {
    #[serde(flatten)]
    props: &'a UiProps,
    #[serde(skip_serializing_if = "is_false")]
    required: bool,
    #[serde(skip_serializing_if = "is_false")]
    disabled: bool,
}

impl UiPropsRef<'_> {
    fn is_empty(&self) -> bool {
        !self.required && !self.disabled && *self.props == UiProps::default()
    }
}

impl<'a> From<&'a SchemaNode> for DocumentRef<'a> {
    fn from(node: &'a SchemaNode) -> Self {
        Self {
            schema_type: node.schema_type,
            title: node.title.as_deref(),
            description: node.description.as_deref(),
            default: node.default.as_ref(),
            is_required: node.required,
            disabled: node.disabled,
            properties: &node.properties,
            required_fields: &node.required_fields,
            order: &node.order,
            items: node.items.as_deref(),
            additional_items: node.additional_items.as_deref(),
            one_of: &node.one_of,
            any_of: &node.any_of,
            all_of: &node.all_of,
            not: node.not.as_deref(),
            minimum: node.minimum,
            maximum: node.maximum,
            exclusive_minimum: node.exclusive_minimum,
            exclusive_maximum: node.exclusive_maximum,
            min_length: node.min_length,
            max_length: node.max_length,
            min_items: node.min_items,
            max_items: node.max_items,
            min_contains: node.min_contains,
            max_contains: node.max_contains,
            format_minimum: node.format_minimum.as_deref(),
            format_maximum: node.format_maximum.as_deref(),
            pattern: node.pattern.as_deref(),
            format: node.format.as_deref(),
            enum_values: &node.enum_values,
            const_value: node.const_value.as_ref(),
            unique_items: node.unique_items,
            dependencies: &node.dependencies,
            is_dynamic: node.is_dynamic,
            ui: UiPropsRef {
                props: &node.ui,
                required: node.required,
                disabled: node.disabled,
            },
        }
    }
}

impl Serialize for SchemaNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        DocumentRef::from(self).serialize(serializer)
    }
}

#[derive(Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct Document {
    #[serde(rename = "type")]
    schema_type: Option<SchemaType>,
    title: Option<String>,
    description: Option<String>,
    #[serde(default, deserialize_with = "deserialize_present")]
    default: Option<Value>,
    is_required: bool,
    disabled: bool,
    properties: IndexMap<String, SchemaNode>,
    #[serde(rename = "required")]
    required_fields: Vec<String>,
    order: Vec<String>,
    items: Option<Box<SchemaNode>>,
    additional_items: Option<Box<SchemaNode>>,
    one_of: Vec<SchemaNode>,
    any_of: Vec<SchemaNode>,
    all_of: Vec<SchemaNode>,
    not: Option<Box<SchemaNode>>,
    minimum: Option<f64>,
    maximum: Option<f64>,
    exclusive_minimum: Option<f64>,
    exclusive_maximum: Option<f64>,
    min_length: Option<u64>,
    max_length: Option<u64>,
    min_items: Option<u64>,
    max_items: Option<u64>,
    min_contains: Option<u64>,
    max_contains: Option<u64>,
    format_minimum: Option<String>,
    format_maximum: Option<String>,
    pattern: Option<String>,
    format: Option<String>,
    #[serde(rename = "enum")]
    enum_values: Vec<Value>,
    #[serde(rename = "const", default, deserialize_with = "deserialize_present")]
    const_value: Option<Value>,
    unique_items: bool,
    dependencies: IndexMap<String, Dependency>,
    is_dynamic: bool,
    #[serde(rename = "ui:props")]
    ui: UiPropsDocument,
}

#[derive(Default, Deserialize)]
#[serde(default)]
struct UiPropsDocument {
    #[serde(flatten)]
    props: UiProps,
    required: bool,
    disabled: bool,
}

impl From<Document> for SchemaNode {
    fn from(doc: Document) -> Self {
        Self {
            schema_type: doc.schema_type,
            title: doc.title,
            description: doc.description,
            required: doc.is_required || doc.ui.required,
            disabled: doc.disabled || doc.ui.disabled,
            default: doc.default,
            properties: doc.properties,
            order: doc.order,
            required_fields: doc.required_fields,
            items: doc.items,
            additional_items: doc.additional_items,
            one_of: doc.one_of,
            any_of: doc.any_of,
            all_of: doc.all_of,
            not: doc.not,
            minimum: doc.minimum,
            maximum: doc.maximum,
            exclusive_minimum: doc.exclusive_minimum,
            exclusive_maximum: doc.exclusive_maximum,
            min_length: doc.min_length,
            max_length: doc.max_length,
            min_items: doc.min_items,
            max_items: doc.max_items,
            min_contains: doc.min_contains,
            max_contains: doc.max_contains,
            format_minimum: doc.format_minimum,
            format_maximum: doc.format_maximum,
            pattern: doc.pattern,
            format: doc.format,
            enum_values: doc.enum_values,
            const_value: doc.const_value,
            unique_items: doc.unique_items,
            dependencies: doc.dependencies,
            is_dynamic: doc.is_dynamic,
            ui: doc.ui.props,
        }
    }
}

impl<'de> Deserialize<'de> for SchemaNode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Document::deserialize(deserializer).map(SchemaNode::from)
    }
}
