use crate::{ControlType, SchemaType};

use super::{BaseField, TextConstraints, impl_field};

/// Single-line text input.
///
/// # Examples
///
/// ```
/// use connector_sdk_core::*;
///
/// let node = ShortTextField::new()
///     .with_title("Email")
///     .with_format("email")
///     .with_max_length(254)
///     .build();
/// assert_eq!(node.schema_type, Some(SchemaType::String));
/// assert_eq!(node.control_type(), Some(ControlType::ShortText));
/// assert_eq!(node.format.as_deref(), Some("email"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ShortTextField {
    base: BaseField,
}

impl ShortTextField {
    /// Creates a single-line text input.
    pub fn new() -> Self {
        Self {
            base: BaseField::new(SchemaType::String, ControlType::ShortText),
        }
    }

    /// Sets the pre-filled value.
    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.base.builder.default_value(value.into());
        self
    }
}

impl Default for ShortTextField {
    fn default() -> Self {
        Self::new()
    }
}

/// Multi-line text input.
#[derive(Debug, Clone, PartialEq)]
pub struct LongTextField {
    base: BaseField,
}

impl LongTextField {
    /// Creates a multi-line text input.
    pub fn new() -> Self {
        Self {
            base: BaseField::new(SchemaType::String, ControlType::LongText),
        }
    }

    /// Sets the pre-filled value.
    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.base.builder.default_value(value.into());
        self
    }
}

impl Default for LongTextField {
    fn default() -> Self {
        Self::new()
    }
}

/// Markdown editor.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkdownField {
    base: BaseField,
}

impl MarkdownField {
    /// Creates a Markdown editor.
    pub fn new() -> Self {
        Self {
            base: BaseField::new(SchemaType::String, ControlType::Markdown),
        }
    }

    /// Sets the pre-filled value.
    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.base.builder.default_value(value.into());
        self
    }
}

impl Default for MarkdownField {
    fn default() -> Self {
        Self::new()
    }
}

/// Inline code snippet in a given language.
#[derive(Debug, Clone, PartialEq)]
pub struct CodeField {
    base: BaseField,
}

impl CodeField {
    /// Creates a code snippet input for `language`.
    pub fn new(language: impl Into<String>) -> Self {
        let mut base = BaseField::new(SchemaType::String, ControlType::Code);
        base.builder.language(language);
        Self { base }
    }

    /// Sets the pre-filled value.
    pub fn with_default(mut self, code: impl Into<String>) -> Self {
        self.base.builder.default_value(code.into());
        self
    }
}

/// Full code editor in a given language.
///
/// # Examples
///
/// ```
/// use connector_sdk_core::*;
///
/// let node = CodeEditorField::new("javascript")
///     .with_default("return input;")
///     .build();
/// assert_eq!(node.ui.language.as_deref(), Some("javascript"));
/// assert_eq!(node.control_type(), Some(ControlType::CodeEditor));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CodeEditorField {
    base: BaseField,
}

impl CodeEditorField {
    /// Creates a full code editor for `language`.
    pub fn new(language: impl Into<String>) -> Self {
        let mut base = BaseField::new(SchemaType::String, ControlType::CodeEditor);
        base.builder.language(language);
        Self { base }
    }

    /// Sets the pre-filled value.
    pub fn with_default(mut self, code: impl Into<String>) -> Self {
        self.base.builder.default_value(code.into());
        self
    }
}

/// Code editor bound to a language and a runtime framework.
#[derive(Debug, Clone, PartialEq)]
pub struct CodeFrameworkField {
    base: BaseField,
}

impl CodeFrameworkField {
    /// Creates a code editor for `language` running on `framework`.
    pub fn new(language: impl Into<String>, framework: impl Into<String>) -> Self {
        let mut base = BaseField::new(SchemaType::String, ControlType::CodeFramework);
        base.builder.language(language).framework(framework);
        Self { base }
    }

    /// Sets the pre-filled value.
    pub fn with_default(mut self, code: impl Into<String>) -> Self {
        self.base.builder.default_value(code.into());
        self
    }
}

impl_field!(
    ShortTextField,
    LongTextField,
    MarkdownField,
    CodeField,
    CodeEditorField,
    CodeFrameworkField,
);

impl TextConstraints for ShortTextField {}
impl TextConstraints for LongTextField {}
impl TextConstraints for MarkdownField {}
impl TextConstraints for CodeField {}
impl TextConstraints for CodeEditorField {}
impl TextConstraints for CodeFrameworkField {}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::fields::{Field, Presentable};

    use super::*;

    #[test]
    fn test_text_fields_fix_type_pairs() {
        let cases = [
            (ShortTextField::new().build(), ControlType::ShortText),
            (LongTextField::new().build(), ControlType::LongText),
            (MarkdownField::new().build(), ControlType::Markdown),
            (CodeField::new("sql").build(), ControlType::Code),
            (CodeEditorField::new("python").build(), ControlType::CodeEditor),
            (
                CodeFrameworkField::new("typescript", "deno").build(),
                ControlType::CodeFramework,
            ),
        ];

        for (node, control) in cases {
            assert_eq!(node.schema_type, Some(SchemaType::String));
            assert_eq!(node.control_type(), Some(control));
        }
    }

    #[test]
    fn test_code_framework_keeps_language_and_framework() {
        let node = CodeFrameworkField::new("typescript", "deno")
            .with_default("export default () => 1;")
            .build();
        assert_eq!(node.ui.language.as_deref(), Some("typescript"));
        assert_eq!(node.ui.framework.as_deref(), Some("deno"));
        assert_eq!(node.default, Some(json!("export default () => 1;")));
    }

    #[test]
    fn test_long_text_constraints() {
        let node = LongTextField::new()
            .with_placeholder("Describe the issue")
            .with_min_length(10)
            .with_pattern("^[^<>]*$")
            .build();
        assert_eq!(node.min_length, Some(10));
        assert_eq!(node.pattern.as_deref(), Some("^[^<>]*$"));
        assert_eq!(node.ui.placeholder.as_deref(), Some("Describe the issue"));
    }
}
