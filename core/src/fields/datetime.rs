use chrono::{DateTime, SecondsFormat, Utc};

use crate::{ControlType, SchemaType};

use super::{BaseField, impl_field};

const DATE_TIME_FORMAT: &str = "date-time";

fn to_rfc3339(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Date-time picker.
///
/// Values travel as RFC 3339 strings, so the bounds are stored in
/// `formatMinimum` / `formatMaximum` rather than the numeric limits.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use connector_sdk_core::*;
///
/// let node = DateTimeField::new()
///     .with_minimum(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
///     .build();
/// assert_eq!(node.format.as_deref(), Some("date-time"));
/// assert_eq!(node.format_minimum.as_deref(), Some("2024-01-01T00:00:00Z"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DateTimeField {
    base: BaseField,
}

impl DateTimeField {
    /// Creates a date-time picker.
    pub fn new() -> Self {
        let mut base = BaseField::new(SchemaType::String, ControlType::DateTime);
        base.builder.format(DATE_TIME_FORMAT);
        Self { base }
    }

    /// Sets the earliest accepted instant.
    pub fn with_minimum(mut self, minimum: DateTime<Utc>) -> Self {
        self.base.builder.format_minimum(to_rfc3339(&minimum));
        self
    }

    /// Sets the latest accepted instant.
    pub fn with_maximum(mut self, maximum: DateTime<Utc>) -> Self {
        self.base.builder.format_maximum(to_rfc3339(&maximum));
        self
    }

    /// Sets the pre-filled value.
    pub fn with_default(mut self, value: DateTime<Utc>) -> Self {
        self.base.builder.default_value(to_rfc3339(&value));
        self
    }
}

impl Default for DateTimeField {
    fn default() -> Self {
        Self::new()
    }
}

impl_field!(DateTimeField);
