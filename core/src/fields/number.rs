use crate::{ControlType, SchemaType};

use super::{BaseField, impl_field};

/// Numeric input.
///
/// # Examples
///
/// ```
/// use connector_sdk_core::*;
///
/// let node = NumberField::new()
///     .with_minimum(0.0)
///     .with_maximum(100.0)
///     .with_required(true)
///     .build();
/// assert_eq!(node.schema_type, Some(SchemaType::Number));
/// assert_eq!(node.minimum, Some(0.0));
/// assert_eq!(node.maximum, Some(100.0));
/// assert!(node.required);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct NumberField {
    base: BaseField,
}

impl NumberField {
    /// Creates a numeric input.
    pub fn new() -> Self {
        Self {
            base: BaseField::new(SchemaType::Number, ControlType::Number),
        }
    }

    /// Sets the inclusive lower bound.
    pub fn with_minimum(mut self, minimum: f64) -> Self {
        self.base.builder.minimum(minimum);
        self
    }

    /// Sets the inclusive upper bound.
    pub fn with_maximum(mut self, maximum: f64) -> Self {
        self.base.builder.maximum(maximum);
        self
    }

    /// Sets the exclusive lower bound.
    pub fn with_exclusive_minimum(mut self, minimum: f64) -> Self {
        self.base.builder.exclusive_minimum(minimum);
        self
    }

    /// Sets the exclusive upper bound.
    pub fn with_exclusive_maximum(mut self, maximum: f64) -> Self {
        self.base.builder.exclusive_maximum(maximum);
        self
    }

    /// Sets the pre-filled value.
    pub fn with_default(mut self, value: f64) -> Self {
        self.base.builder.default_value(value);
        self
    }
}

impl Default for NumberField {
    fn default() -> Self {
        Self::new()
    }
}

impl_field!(NumberField);
