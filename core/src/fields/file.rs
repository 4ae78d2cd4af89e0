use crate::{ControlType, SchemaType};

use super::{BaseField, impl_field};

/// File upload. The submitted value is a URL or base64 payload string.
#[derive(Debug, Clone, PartialEq)]
pub struct FileField {
    base: BaseField,
}

impl FileField {
    /// Creates a file upload input.
    pub fn new() -> Self {
        Self {
            base: BaseField::new(SchemaType::String, ControlType::File),
        }
    }

    /// Restricts the picker to the given MIME types (e.g. `image/png`).
    pub fn with_accept(mut self, mime_types: Vec<String>) -> Self {
        self.base.builder.accept(mime_types);
        self
    }
}

impl Default for FileField {
    fn default() -> Self {
        Self::new()
    }
}

impl_field!(FileField);
