use serde_json::Value;

use crate::{ControlType, Dependency, SchemaNode, SchemaType};

use super::{BaseField, Composable, Field, apply_properties, impl_field};

/// Property name used when a primitive array item is wrapped in an object.
const WRAPPED_ITEM_KEY: &str = "value";

/// List of items.
///
/// The host renders array items as objects. A primitive item schema is
/// therefore wrapped in an object with a single `value` property; object
/// and array items are used as-is.
///
/// # Examples
///
/// ```
/// use connector_sdk_core::*;
///
/// let node = ArrayField::new()
///     .with_items(ShortTextField::new().with_title("Tag").build())
///     .build();
///
/// let items = node.items.as_deref().unwrap();
/// assert_eq!(items.schema_type, Some(SchemaType::Object));
/// assert_eq!(items.properties["value"].title.as_deref(), Some("Tag"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayField {
    base: BaseField,
}

impl ArrayField {
    /// Creates an empty list input.
    pub fn new() -> Self {
        Self {
            base: BaseField::new(SchemaType::Array, ControlType::Array),
        }
    }

    /// Sets the item schema; primitive items are wrapped under a `value` property.
    pub fn with_items(mut self, item: SchemaNode) -> Self {
        let item = match item.schema_type {
            Some(schema_type) if schema_type.is_composite() => item,
            _ => ObjectField::new()
                .with_properties([(WRAPPED_ITEM_KEY, item)])
                .build(),
        };
        self.base.builder.items(item);
        self
    }

    /// Sets the schema of items past the tuple prefix.
    pub fn with_additional_items(mut self, item: SchemaNode) -> Self {
        self.base.builder.additional_items(item);
        self
    }

    /// Requires items to be distinct.
    pub fn with_unique(mut self, unique: bool) -> Self {
        self.base.builder.unique_items(unique);
        self
    }

    /// Sets the minimum number of items.
    pub fn with_min_items(mut self, count: u64) -> Self {
        self.base.builder.min_items(count);
        self
    }

    /// Sets the maximum number of items.
    pub fn with_max_items(mut self, count: u64) -> Self {
        self.base.builder.max_items(count);
        self
    }

    /// Sets how many items must at least match `contains`.
    pub fn with_min_contains(mut self, count: u64) -> Self {
        self.base.builder.min_contains(count);
        self
    }

    /// Sets how many items may at most match `contains`.
    pub fn with_max_contains(mut self, count: u64) -> Self {
        self.base.builder.max_contains(count);
        self
    }

    /// Sets the pre-filled value.
    pub fn with_default(mut self, values: Vec<Value>) -> Self {
        self.base.builder.default_value(values);
        self
    }
}

impl Default for ArrayField {
    fn default() -> Self {
        Self::new()
    }
}

/// Group of named child fields.
///
/// # Examples
///
/// ```
/// use connector_sdk_core::*;
///
/// let node = ObjectField::new()
///     .with_properties([
///         ("a", ShortTextField::new().with_required(true).build()),
///         ("b", ShortTextField::new().build()),
///     ])
///     .build();
/// assert_eq!(node.order, vec!["a", "b"]);
/// assert_eq!(node.required_fields, vec!["a"]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectField {
    base: BaseField,
}

impl ObjectField {
    /// Creates an object with no properties.
    pub fn new() -> Self {
        Self {
            base: BaseField::new(SchemaType::Object, ControlType::Object),
        }
    }

    /// Replaces the child fields, deriving display order from the input
    /// order and the required names from each child's flag.
    pub fn with_properties<I, K>(mut self, properties: I) -> Self
    where
        I: IntoIterator<Item = (K, SchemaNode)>,
        K: Into<String>,
    {
        apply_properties(&mut self.base.builder, properties);
        self
    }

    /// Adds a dependency keyed by property name.
    pub fn with_dependency(mut self, name: impl Into<String>, dependency: Dependency) -> Self {
        self.base.builder.dependency(name, dependency);
        self
    }

    /// Sets the pre-filled value.
    pub fn with_default(mut self, value: Value) -> Self {
        self.base.builder.default_value(value);
        self
    }
}

impl Default for ObjectField {
    fn default() -> Self {
        Self::new()
    }
}

/// Repeated group of fields; every entry is an object with the same
/// properties.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupArrayField {
    base: BaseField,
}

impl GroupArrayField {
    /// Creates a repeated group of fields.
    pub fn new() -> Self {
        Self {
            base: BaseField::new(SchemaType::Array, ControlType::GroupArray),
        }
    }

    /// Sets the fields of each group, keeping the input order.
    pub fn with_properties<I, K>(mut self, properties: I) -> Self
    where
        I: IntoIterator<Item = (K, SchemaNode)>,
        K: Into<String>,
    {
        let group = ObjectField::new().with_properties(properties).build();
        self.base.builder.items(group);
        self
    }

    /// Sets the minimum number of items.
    pub fn with_min_items(mut self, count: u64) -> Self {
        self.base.builder.min_items(count);
        self
    }

    /// Sets the maximum number of items.
    pub fn with_max_items(mut self, count: u64) -> Self {
        self.base.builder.max_items(count);
        self
    }
}

impl Default for GroupArrayField {
    fn default() -> Self {
        Self::new()
    }
}

/// Key/value mapping input; properties describe the known keys.
#[derive(Debug, Clone, PartialEq)]
pub struct InputMapField {
    base: BaseField,
}

impl InputMapField {
    /// Creates an empty key/value input map.
    pub fn new() -> Self {
        Self {
            base: BaseField::new(SchemaType::Object, ControlType::InputMap),
        }
    }

    /// Replaces the child fields, keeping the input order.
    pub fn with_properties<I, K>(mut self, properties: I) -> Self
    where
        I: IntoIterator<Item = (K, SchemaNode)>,
        K: Into<String>,
    {
        apply_properties(&mut self.base.builder, properties);
        self
    }

    /// Sets the pre-filled value.
    pub fn with_default(mut self, value: Value) -> Self {
        self.base.builder.default_value(value);
        self
    }
}

impl Default for InputMapField {
    fn default() -> Self {
        Self::new()
    }
}

/// Free-form JSON document.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonField {
    base: BaseField,
}

impl JsonField {
    /// Creates a free-form JSON input.
    pub fn new() -> Self {
        Self {
            base: BaseField::new(SchemaType::Object, ControlType::Json),
        }
    }

    /// Sets the pre-filled value.
    pub fn with_default(mut self, value: Value) -> Self {
        self.base.builder.default_value(value);
        self
    }
}

impl Default for JsonField {
    fn default() -> Self {
        Self::new()
    }
}

impl_field!(ArrayField, ObjectField, GroupArrayField, InputMapField, JsonField);

impl Composable for ArrayField {}
impl Composable for ObjectField {}
impl Composable for GroupArrayField {}
impl Composable for InputMapField {}
