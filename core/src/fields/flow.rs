use serde_json::Value;

use crate::{ControlType, SchemaNode, SchemaType};

use super::{BaseField, Composable, apply_properties, impl_field};

/// Ordered list of branches for router-style steps.
///
/// Each item describes one branch; unlike [`ArrayField`](super::ArrayField)
/// the item schema is stored unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct BranchField {
    base: BaseField,
}

impl BranchField {
    /// Creates a branch list with no branches.
    pub fn new() -> Self {
        Self {
            base: BaseField::new(SchemaType::Array, ControlType::Branch),
        }
    }

    /// Sets the schema of each branch.
    pub fn with_items(mut self, branch: SchemaNode) -> Self {
        self.base.builder.items(branch);
        self
    }

    /// Sets the minimum number of branches.
    pub fn with_min_items(mut self, count: u64) -> Self {
        self.base.builder.min_items(count);
        self
    }

    /// Sets the maximum number of branches.
    pub fn with_max_items(mut self, count: u64) -> Self {
        self.base.builder.max_items(count);
        self
    }
}

impl Default for BranchField {
    fn default() -> Self {
        Self::new()
    }
}

/// Condition builder rendered as a rule editor.
///
/// # Examples
///
/// ```
/// use connector_sdk_core::*;
///
/// let node = ConditionField::new()
///     .with_properties([
///         ("left", ShortTextField::new().with_required(true).build()),
///         ("operator", SelectField::new().build()),
///         ("right", ShortTextField::new().build()),
///     ])
///     .build();
/// assert_eq!(node.control_type(), Some(ControlType::Condition));
/// assert_eq!(node.required_fields, vec!["left"]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionField {
    base: BaseField,
}

impl ConditionField {
    /// Creates an empty condition.
    pub fn new() -> Self {
        Self {
            base: BaseField::new(SchemaType::Object, ControlType::Condition),
        }
    }

    /// Sets the operands of the condition, keeping the input order.
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

impl Default for ConditionField {
    fn default() -> Self {
        Self::new()
    }
}

impl_field!(BranchField, ConditionField);

impl Composable for BranchField {}
impl Composable for ConditionField {}
