//! Typed field constructors layered over [`SchemaBuilder`].
//!
//! Each field type fixes a `(SchemaType, ControlType)` pair at construction
//! and exposes only the setters that make sense for that kind of input.
//! Shared behavior is split into capabilities instead of one wide base type:
//!
//! - [`Field`] gives access to the wrapped builder and produces the node.
//! - [`Presentable`] (every field) sets display strings and the
//!   required/disabled/hidden flags.
//! - [`TextConstraints`] (text-like fields) sets length, pattern and format.
//! - [`Composable`] (composite fields) sets `oneOf`/`anyOf`/`allOf`/`not`.
//!
//! Fields are plain owned values; chaining consumes and returns `self`.
//!
//! # Example
//!
//! ```
//! use connector_sdk_core::*;
//!
//! let form = ObjectField::new()
//!     .with_title("Send message")
//!     .with_properties([
//!         ("channel", ShortTextField::new().with_title("Channel").with_required(true).build()),
//!         ("text", LongTextField::new().with_title("Text").build()),
//!     ])
//!     .build();
//!
//! assert_eq!(form.order, vec!["channel", "text"]);
//! assert_eq!(form.required_fields, vec!["channel"]);
//! ```

mod auth;
mod boolean;
mod collection;
mod datetime;
mod file;
mod flow;
mod number;
mod select;
mod text;

use indexmap::IndexMap;

use crate::{ControlType, SchemaBuilder, SchemaNode, SchemaType};

pub use auth::{
    AuthBasicField, AuthSecretField, CustomAuthField, OAUTH_FIELD_ORDER, OAuthField,
};
pub use boolean::{BooleanField, CheckboxField};
pub use collection::{ArrayField, GroupArrayField, InputMapField, JsonField, ObjectField};
pub use datetime::DateTimeField;
pub use file::FileField;
pub use flow::{BranchField, ConditionField};
pub use number::NumberField;
pub use select::{DynamicField, MultiSelectField, SelectField, SelectOption};
pub use text::{
    CodeEditorField, CodeField, CodeFrameworkField, LongTextField, MarkdownField, ShortTextField,
};

/// A field that wraps a [`SchemaBuilder`] and can produce a [`SchemaNode`].
pub trait Field: Sized {
    fn builder(&self) -> &SchemaBuilder;

    fn builder_mut(&mut self) -> &mut SchemaBuilder;

    /// Produces the node described by this field.
    ///
    /// The result is an independent value; building twice without changes
    /// in between yields equal nodes.
    fn build(&self) -> SchemaNode {
        self.builder().build()
    }
}

/// Display strings and presentation flags shared by every field.
pub trait Presentable: Field {
    fn with_title(mut self, title: impl Into<String>) -> Self {
        self.builder_mut().title(title);
        self
    }

    fn with_description(mut self, description: impl Into<String>) -> Self {
        self.builder_mut().description(description);
        self
    }

    fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.builder_mut().placeholder(placeholder);
        self
    }

    fn with_label(mut self, label: impl Into<String>) -> Self {
        self.builder_mut().label(label);
        self
    }

    fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.builder_mut().hint(hint);
        self
    }

    fn with_required(mut self, required: bool) -> Self {
        self.builder_mut().required(required);
        self
    }

    fn with_disabled(mut self, disabled: bool) -> Self {
        self.builder_mut().disabled(disabled);
        self
    }

    fn with_hidden(mut self, hidden: bool) -> Self {
        self.builder_mut().hidden(hidden);
        self
    }
}

impl<F: Field> Presentable for F {}

/// Length, pattern and format constraints for string-valued fields.
pub trait TextConstraints: Field {
    fn with_min_length(mut self, length: u64) -> Self {
        self.builder_mut().min_length(length);
        self
    }

    fn with_max_length(mut self, length: u64) -> Self {
        self.builder_mut().max_length(length);
        self
    }

    fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.builder_mut().pattern(pattern);
        self
    }

    fn with_format(mut self, format: impl Into<String>) -> Self {
        self.builder_mut().format(format);
        self
    }
}

/// Composition relations for composite fields.
pub trait Composable: Field {
    fn with_one_of(mut self, nodes: Vec<SchemaNode>) -> Self {
        self.builder_mut().one_of(nodes);
        self
    }

    fn with_any_of(mut self, nodes: Vec<SchemaNode>) -> Self {
        self.builder_mut().any_of(nodes);
        self
    }

    fn with_all_of(mut self, nodes: Vec<SchemaNode>) -> Self {
        self.builder_mut().all_of(nodes);
        self
    }

    fn with_not(mut self, node: SchemaNode) -> Self {
        self.builder_mut().not(node);
        self
    }
}

/// Field with a caller-chosen type pairing.
///
/// The concrete field types wrap a `BaseField`; it can also be used directly
/// for combinations none of them cover.
///
/// # Examples
///
/// ```
/// use connector_sdk_core::*;
///
/// let node = BaseField::new(SchemaType::Number, ControlType::Select)
///     .with_title("Priority")
///     .with_any_of(vec![SchemaBuilder::new().const_value(1).build()])
///     .build();
/// assert_eq!(node.schema_type, Some(SchemaType::Number));
/// assert_eq!(node.any_of.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BaseField {
    builder: SchemaBuilder,
}

impl BaseField {
    /// Creates a field base with its type and control fixed.
    pub fn new(schema_type: SchemaType, control_type: ControlType) -> Self {
        let mut builder = SchemaBuilder::new();
        builder.schema_type(schema_type).control_type(control_type);
        Self { builder }
    }
}

impl Field for BaseField {
    fn builder(&self) -> &SchemaBuilder {
        &self.builder
    }

    fn builder_mut(&mut self) -> &mut SchemaBuilder {
        &mut self.builder
    }
}

impl Composable for BaseField {}

/// Implements [`Field`] for wrappers holding a `base: BaseField`.
macro_rules! impl_field {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::fields::Field for $ty {
                fn builder(&self) -> &$crate::SchemaBuilder {
                    $crate::fields::Field::builder(&self.base)
                }

                fn builder_mut(&mut self) -> &mut $crate::SchemaBuilder {
                    $crate::fields::Field::builder_mut(&mut self.base)
                }
            }
        )+
    };
}

pub(crate) use impl_field;

/// Stores an ordered set of properties on `builder`.
///
/// `order` follows the input order and `required_fields` lists the names
/// whose node is required. A repeated name replaces the earlier node but
/// keeps its position.
pub(crate) fn apply_properties<I, K>(builder: &mut SchemaBuilder, properties: I)
where
    I: IntoIterator<Item = (K, SchemaNode)>,
    K: Into<String>,
{
    let mut map = IndexMap::new();
    for (name, node) in properties {
        map.insert(name.into(), node);
    }
    store_properties(builder, map);
}

/// Stores an already-collected property map, deriving `order` and
/// `required_fields` from it.
pub(crate) fn store_properties(builder: &mut SchemaBuilder, map: IndexMap<String, SchemaNode>) {
    let order = map.keys().cloned().collect();
    let required = required_names(&map);
    builder.properties(map).order(order).required_fields(required);
}

pub(crate) fn required_names(map: &IndexMap<String, SchemaNode>) -> Vec<String> {
    map.iter()
        .filter(|(_, node)| node.required)
        .map(|(name, _)| name.clone())
        .collect()
}
