//! Attribute-by-attribute construction of [`SchemaNode`] values.
//!
//! [`SchemaBuilder`] exposes one setter per node attribute. Setters never
//! validate their input (a `minimum` above `maximum` is accepted); use
//! [`validate_schema`](crate::validate_schema) on the result when that
//! matters.
//!
//! # Example
//!
//! ```
//! use connector_sdk_core::*;
//!
//! let mut builder = SchemaBuilder::new();
//! builder
//!     .schema_type(SchemaType::Number)
//!     .control_type(ControlType::Number)
//!     .minimum(0.0)
//!     .maximum(100.0);
//!
//! let first = builder.build();
//! builder.maximum(10.0);
//!
//! // Earlier results never observe later mutation.
//! assert_eq!(first.maximum, Some(100.0));
//! assert_eq!(builder.build().maximum, Some(10.0));
//! ```

use indexmap::IndexMap;
use serde_json::Value;

use crate::{AuthSchema, ControlType, Dependency, DynamicSource, SchemaNode, SchemaType};

/// Mutable accumulator for a single [`SchemaNode`].
///
/// Every setter mutates the builder in place and returns it for chaining.
/// [`build`](SchemaBuilder::build) hands out an independent copy, so a
/// builder can be reused as a template.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SchemaBuilder {
    node: SchemaNode,
}

impl SchemaBuilder {
    /// Creates a builder for an empty node.
    pub fn new() -> Self {
        Self {
            node: SchemaNode::default(),
        }
    }

    /// Creates a builder seeded with an existing node.
    pub fn from_node(node: SchemaNode) -> Self {
        Self { node }
    }

    /// Returns the node accumulated so far.
    pub fn node(&self) -> &SchemaNode {
        &self.node
    }

    /// Returns a snapshot of the accumulated node.
    ///
    /// # Examples
    ///
    /// ```
    /// use connector_sdk_core::*;
    ///
    /// let mut builder = SchemaBuilder::new();
    /// builder.title("Subject");
    /// assert_eq!(builder.build(), builder.build());
    /// ```
    pub fn build(&self) -> SchemaNode {
        self.node.clone()
    }

    /// Sets the JSON value type.
    pub fn schema_type(&mut self, schema_type: SchemaType) -> &mut Self {
        self.node.schema_type = Some(schema_type);
        self
    }

    /// Sets the UI control that renders the value.
    pub fn control_type(&mut self, control_type: ControlType) -> &mut Self {
        self.node.ui.control_type = Some(control_type);
        self
    }

    /// Sets the display title.
    pub fn title(&mut self, title: impl Into<String>) -> &mut Self {
        self.node.title = Some(title.into());
        self
    }

    /// Sets the help text shown under the field.
    pub fn description(&mut self, description: impl Into<String>) -> &mut Self {
        self.node.description = Some(description.into());
        self
    }

    /// Sets the placeholder shown while the input is empty.
    pub fn placeholder(&mut self, placeholder: impl Into<String>) -> &mut Self {
        self.node.ui.placeholder = Some(placeholder.into());
        self
    }

    /// Sets the short label.
    pub fn label(&mut self, label: impl Into<String>) -> &mut Self {
        self.node.ui.label = Some(label.into());
        self
    }

    /// Sets the inline hint.
    pub fn hint(&mut self, hint: impl Into<String>) -> &mut Self {
        self.node.ui.hint = Some(hint.into());
        self
    }

    /// Sets the canonical required flag.
    pub fn required(&mut self, required: bool) -> &mut Self {
        self.node.required = required;
        self
    }

    /// Sets the canonical disabled flag.
    pub fn disabled(&mut self, disabled: bool) -> &mut Self {
        self.node.disabled = disabled;
        self
    }

    /// Hides the field from the rendered form.
    pub fn hidden(&mut self, hidden: bool) -> &mut Self {
        self.node.ui.hidden = hidden;
        self
    }

    /// Sets the pre-filled value.
    pub fn default_value(&mut self, value: impl Into<Value>) -> &mut Self {
        self.node.default = Some(value.into());
        self
    }

    /// Replaces the child properties; `order` and `required_fields` are left
    /// untouched.
    pub fn properties(&mut self, properties: IndexMap<String, SchemaNode>) -> &mut Self {
        self.node.properties = properties;
        self
    }

    /// Inserts or replaces a single property without touching `order` or
    /// `required_fields`.
    pub fn property(&mut self, name: impl Into<String>, node: SchemaNode) -> &mut Self {
        self.node.properties.insert(name.into(), node);
        self
    }

    /// Sets the explicit display order of properties.
    pub fn order(&mut self, order: Vec<String>) -> &mut Self {
        self.node.order = order;
        self
    }

    /// Sets the names of mandatory properties.
    pub fn required_fields(&mut self, names: Vec<String>) -> &mut Self {
        self.node.required_fields = names;
        self
    }

    /// Sets the schema of array items.
    pub fn items(&mut self, items: SchemaNode) -> &mut Self {
        self.node.items = Some(Box::new(items));
        self
    }

    /// Sets the schema of items past the tuple prefix.
    pub fn additional_items(&mut self, items: SchemaNode) -> &mut Self {
        self.node.additional_items = Some(Box::new(items));
        self
    }

    /// Sets the `oneOf` branches.
    pub fn one_of(&mut self, nodes: Vec<SchemaNode>) -> &mut Self {
        self.node.one_of = nodes;
        self
    }

    /// Sets the `anyOf` branches.
    pub fn any_of(&mut self, nodes: Vec<SchemaNode>) -> &mut Self {
        self.node.any_of = nodes;
        self
    }

    /// Sets the `allOf` branches.
    pub fn all_of(&mut self, nodes: Vec<SchemaNode>) -> &mut Self {
        self.node.all_of = nodes;
        self
    }

    /// Sets the schema the value must not match.
    pub fn not(&mut self, node: SchemaNode) -> &mut Self {
        self.node.not = Some(Box::new(node));
        self
    }

    /// Sets the inclusive lower bound.
    pub fn minimum(&mut self, minimum: f64) -> &mut Self {
        self.node.minimum = Some(minimum);
        self
    }

    /// Sets the inclusive upper bound.
    pub fn maximum(&mut self, maximum: f64) -> &mut Self {
        self.node.maximum = Some(maximum);
        self
    }

    /// Sets the exclusive lower bound.
    pub fn exclusive_minimum(&mut self, minimum: f64) -> &mut Self {
        self.node.exclusive_minimum = Some(minimum);
        self
    }

    /// Sets the exclusive upper bound.
    pub fn exclusive_maximum(&mut self, maximum: f64) -> &mut Self {
        self.node.exclusive_maximum = Some(maximum);
        self
    }

    /// Sets the minimum string length.
    pub fn min_length(&mut self, length: u64) -> &mut Self {
        self.node.min_length = Some(length);
        self
    }

    /// Sets the maximum string length.
    pub fn max_length(&mut self, length: u64) -> &mut Self {
        self.node.max_length = Some(length);
        self
    }

    /// Sets the minimum number of items.
    pub fn min_items(&mut self, count: u64) -> &mut Self {
        self.node.min_items = Some(count);
        self
    }

    /// Sets the maximum number of items.
    pub fn max_items(&mut self, count: u64) -> &mut Self {
        self.node.max_items = Some(count);
        self
    }

    /// Sets how many items must at least match `contains`.
    pub fn min_contains(&mut self, count: u64) -> &mut Self {
        self.node.min_contains = Some(count);
        self
    }

    /// Sets how many items may at most match `contains`.
    pub fn max_contains(&mut self, count: u64) -> &mut Self {
        self.node.max_contains = Some(count);
        self
    }

    /// Sets the lower bound for formatted strings such as dates.
    pub fn format_minimum(&mut self, bound: impl Into<String>) -> &mut Self {
        self.node.format_minimum = Some(bound.into());
        self
    }

    /// Sets the upper bound for formatted strings such as dates.
    pub fn format_maximum(&mut self, bound: impl Into<String>) -> &mut Self {
        self.node.format_maximum = Some(bound.into());
        self
    }

    /// Sets the regular expression the string must match.
    pub fn pattern(&mut self, pattern: impl Into<String>) -> &mut Self {
        self.node.pattern = Some(pattern.into());
        self
    }

    /// Sets the string format name (`date-time`, `email`, ...).
    pub fn format(&mut self, format: impl Into<String>) -> &mut Self {
        self.node.format = Some(format.into());
        self
    }

    /// Sets the allowed values.
    pub fn enum_values(&mut self, values: Vec<Value>) -> &mut Self {
        self.node.enum_values = values;
        self
    }

    /// Pins the value to a single constant.
    pub fn const_value(&mut self, value: impl Into<Value>) -> &mut Self {
        self.node.const_value = Some(value.into());
        self
    }

    /// Requires array items to be distinct.
    pub fn unique_items(&mut self, unique: bool) -> &mut Self {
        self.node.unique_items = unique;
        self
    }

    /// Replaces all property dependencies.
    pub fn dependencies(&mut self, dependencies: IndexMap<String, Dependency>) -> &mut Self {
        self.node.dependencies = dependencies;
        self
    }

    /// Adds or replaces the dependency keyed by `name`.
    pub fn dependency(&mut self, name: impl Into<String>, dependency: Dependency) -> &mut Self {
        self.node.dependencies.insert(name.into(), dependency);
        self
    }

    /// Sets the auth extension under `ui:props`.
    pub fn auth(&mut self, auth: AuthSchema) -> &mut Self {
        self.node.ui.auth = Some(auth);
        self
    }

    /// Sets the source language of code controls.
    pub fn language(&mut self, language: impl Into<String>) -> &mut Self {
        self.node.ui.language = Some(language.into());
        self
    }

    /// Sets the runtime of code-framework controls.
    pub fn framework(&mut self, framework: impl Into<String>) -> &mut Self {
        self.node.ui.framework = Some(framework.into());
        self
    }

    /// Sets the accepted MIME types of file controls.
    pub fn accept(&mut self, mime_types: Vec<String>) -> &mut Self {
        self.node.ui.accept = mime_types;
        self
    }

    /// Marks the options as resolved at runtime.
    pub fn is_dynamic(&mut self, dynamic: bool) -> &mut Self {
        self.node.is_dynamic = dynamic;
        self
    }

    /// Sets the resolver that produces the options.
    pub fn dynamic_source(&mut self, source: DynamicSource) -> &mut Self {
        self.node.ui.dynamic = Some(source);
        self
    }

    /// Gives mutable access to the dynamic source, creating an empty one if
    /// none is set yet.
    pub(crate) fn dynamic_source_mut(&mut self) -> &mut DynamicSource {
        self.node.ui.dynamic.get_or_insert_with(DynamicSource::default)
    }

    /// Gives mutable access to the auth extension, creating an empty one if
    /// none is set yet.
    pub(crate) fn auth_mut(&mut self) -> &mut AuthSchema {
        self.node.ui.auth.get_or_insert_with(AuthSchema::default)
    }
}
