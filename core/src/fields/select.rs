use serde_json::Value;

use crate::{ControlType, DynamicSource, SchemaBuilder, SchemaNode, SchemaType};

use super::{BaseField, impl_field};

/// One selectable value with its display label.
///
/// Options are encoded as `oneOf` branches holding a `const` and a `title`,
/// which keeps the labels next to the values in plain JSON Schema.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectOption {
    pub label: String,
    pub value: Value,
}

impl SelectOption {
    /// Creates an option showing `label` for `value`.
    pub fn new(label: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }

    fn to_node(&self) -> SchemaNode {
        SchemaBuilder::new()
            .title(self.label.clone())
            .const_value(self.value.clone())
            .build()
    }
}

fn option_nodes(options: &[SelectOption]) -> Vec<SchemaNode> {
    options.iter().map(SelectOption::to_node).collect()
}

/// Single-choice dropdown over a static option list.
///
/// # Examples
///
/// ```
/// use connector_sdk_core::*;
///
/// let node = SelectField::new()
///     .with_options(vec![
///         SelectOption::new("Low", "low"),
///         SelectOption::new("High", "high"),
///     ])
///     .with_default("low")
///     .build();
/// assert_eq!(node.one_of.len(), 2);
/// assert_eq!(node.one_of[1].const_value, Some(serde_json::json!("high")));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SelectField {
    base: BaseField,
}

impl SelectField {
    /// Creates a dropdown with no options.
    pub fn new() -> Self {
        Self {
            base: BaseField::new(SchemaType::String, ControlType::Select),
        }
    }

    /// Replaces the selectable options.
    pub fn with_options(mut self, options: Vec<SelectOption>) -> Self {
        self.base.builder.one_of(option_nodes(&options));
        self
    }

    /// Sets the pre-filled value.
    pub fn with_default(mut self, value: impl Into<Value>) -> Self {
        self.base.builder.default_value(value);
        self
    }
}

impl Default for SelectField {
    fn default() -> Self {
        Self::new()
    }
}

/// Multiple-choice dropdown; the value is an array of unique options.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiSelectField {
    base: BaseField,
}

impl MultiSelectField {
    /// Creates a multi-select with no options.
    pub fn new() -> Self {
        let mut base = BaseField::new(SchemaType::Array, ControlType::MultiSelect);
        base.builder.unique_items(true);
        Self { base }
    }

    /// Replaces the selectable options.
    pub fn with_options(mut self, options: Vec<SelectOption>) -> Self {
        let mut item = SchemaBuilder::new();
        item.schema_type(SchemaType::String)
            .one_of(option_nodes(&options));
        self.base.builder.items(item.build());
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

    /// Sets the values selected initially.
    pub fn with_default(mut self, values: Vec<Value>) -> Self {
        self.base.builder.default_value(values);
        self
    }
}

impl Default for MultiSelectField {
    fn default() -> Self {
        Self::new()
    }
}

/// Dropdown whose options are produced at runtime by a connector resolver.
///
/// # Examples
///
/// ```
/// use connector_sdk_core::*;
///
/// let node = DynamicField::new("list_channels")
///     .with_depends_on(vec!["workspace".into()])
///     .build();
/// assert!(node.is_dynamic);
/// assert_eq!(node.ui.dynamic.as_ref().unwrap().resolver, "list_channels");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DynamicField {
    base: BaseField,
}

impl DynamicField {
    /// Creates a dropdown whose options come from `resolver`.
    pub fn new(resolver: impl Into<String>) -> Self {
        let mut base = BaseField::new(SchemaType::String, ControlType::DynamicSelect);
        base.builder
            .is_dynamic(true)
            .dynamic_source(DynamicSource::new(resolver));
        Self { base }
    }

    /// Names the sibling properties passed to the resolver.
    pub fn with_depends_on(mut self, properties: Vec<String>) -> Self {
        self.base.builder.dynamic_source_mut().depends_on = properties;
        self
    }

    /// Re-runs the resolver while the user types.
    pub fn with_refresh_on_search(mut self, refresh: bool) -> Self {
        self.base.builder.dynamic_source_mut().refresh_on_search = refresh;
        self
    }

    /// Sets the pre-filled value.
    pub fn with_default(mut self, value: impl Into<Value>) -> Self {
        self.base.builder.default_value(value);
        self
    }
}

impl_field!(SelectField, MultiSelectField, DynamicField);
