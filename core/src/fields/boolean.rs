use crate::{ControlType, SchemaType};

use super::{BaseField, impl_field};

/// Toggle switch.
#[derive(Debug, Clone, PartialEq)]
pub struct BooleanField {
    base: BaseField,
}

impl BooleanField {
    /// Creates a boolean toggle.
    pub fn new() -> Self {
        Self {
            base: BaseField::new(SchemaType::Boolean, ControlType::Boolean),
        }
    }

    /// Sets the pre-filled value.
    pub fn with_default(mut self, value: bool) -> Self {
        self.base.builder.default_value(value);
        self
    }
}

impl Default for BooleanField {
    fn default() -> Self {
        Self::new()
    }
}

/// Checkbox.
///
/// # Examples
///
/// ```
/// use connector_sdk_core::*;
///
/// let node = CheckboxField::new().with_title("Notify").with_default(true).build();
/// assert_eq!(node.schema_type, Some(SchemaType::Boolean));
/// assert_eq!(node.control_type(), Some(ControlType::Checkbox));
/// assert_eq!(node.default, Some(serde_json::json!(true)));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CheckboxField {
    base: BaseField,
}

impl CheckboxField {
    /// Creates a checkbox.
    pub fn new() -> Self {
        Self {
            base: BaseField::new(SchemaType::Boolean, ControlType::Checkbox),
        }
    }

    /// Sets the pre-filled value.
    pub fn with_default(mut self, value: bool) -> Self {
        self.base.builder.default_value(value);
        self
    }
}

impl Default for CheckboxField {
    fn default() -> Self {
        Self::new()
    }
}

impl_field!(BooleanField, CheckboxField);

#[cfg(test)]
mod tests {
    use crate::fields::Field;

    use super::*;

    #[test]
    fn test_boolean_fields_fix_type_pairs() {
        let toggle = BooleanField::new().build();
        assert_eq!(toggle.schema_type, Some(SchemaType::Boolean));
        assert_eq!(toggle.control_type(), Some(ControlType::Boolean));

        let checkbox = CheckboxField::new().build();
        assert_eq!(checkbox.schema_type, Some(SchemaType::Boolean));
        assert_eq!(checkbox.control_type(), Some(ControlType::Checkbox));
    }
}
