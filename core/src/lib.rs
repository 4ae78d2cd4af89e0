//! AutoForm schema model, field builders and connector metadata.
//!
//! This crate defines the types a connector uses to describe itself to the
//! workflow host:
//!
//! - [`SchemaNode`]: one node of an AutoForm schema (value type, UI control,
//!   constraints, nested children, default value).
//! - [`SchemaBuilder`]: one setter per node attribute; [`SchemaBuilder::build`]
//!   hands out independent copies.
//! - Field constructors ([`ShortTextField`], [`ObjectField`], [`OAuthField`],
//!   ...) that fix the type/control pairing and expose only the setters that
//!   fit that kind of input.
//! - [`ConnectorInfo`], [`OperationInfo`] and [`TriggerInfo`]: the metadata
//!   a connector registers.
//!
//! Builders never fail. Structural checks live in [`validate_schema`],
//! [`validate_operation`], [`validate_trigger`] and [`validate_connector`].
//!
//! # Example
//!
//! ```
//! use connector_sdk_core::*;
//!
//! let send = OperationInfo::new("send_message", "Posts a message to a channel")
//!     .with_input([
//!         (
//!             "channel",
//!             DynamicField::new("list_channels")
//!                 .with_title("Channel")
//!                 .with_required(true)
//!                 .build(),
//!         ),
//!         ("text", LongTextField::new().with_title("Text").with_max_length(4000).build()),
//!     ]);
//!
//! let connector = ConnectorInfo::new("Slack", "Team messaging", "1.0.0")
//!     .with_slug("slack")
//!     .with_category(ConnectorCategory::Communication)
//!     .with_operation(send);
//!
//! assert!(validate_connector(&connector).is_empty());
//!
//! let json = serde_json::to_value(connector.operations[0].input_schema()).unwrap();
//! assert_eq!(json["required"], serde_json::json!(["channel"]));
//! assert_eq!(json["properties"]["channel"]["ui:props"]["controlType"], "dynamic_select");
//! ```

mod builder;
mod document;
mod enums;
pub mod fields;
mod merge;
mod metadata;
mod types;
mod validate;

pub use builder::SchemaBuilder;
pub use enums::{AuthType, ConnectorCategory, TriggerStrategy};
pub use fields::*;
pub use merge::merge_maps;
pub use metadata::{ConnectorInfo, OperationInfo, TriggerInfo};
pub use types::*;
pub use validate::{
    ValidationError, validate_connector, validate_operation, validate_schema, validate_trigger,
};
