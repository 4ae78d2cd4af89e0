//! Connector, operation and trigger metadata.
//!
//! These types describe what a connector offers to the host platform. Their
//! inputs are AutoForm properties; [`OperationInfo::input_schema`] and
//! [`TriggerInfo::input_schema`] wrap them into the object schema the host
//! renders.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::fields::{Field, ObjectField};
use crate::{AuthType, ConnectorCategory, ControlType, SchemaNode, TriggerStrategy};

/// Action a connector can perform inside a flow.
///
/// # Examples
///
/// ```
/// use connector_sdk_core::*;
///
/// let op = OperationInfo::new("send_message", "Posts a message to a channel")
///     .with_input([
///         ("channel", ShortTextField::new().with_required(true).build()),
///         ("text", LongTextField::new().build()),
///     ]);
///
/// let schema = op.input_schema();
/// assert_eq!(schema.required_fields, vec!["channel"]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationInfo {
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub input: IndexMap<String, SchemaNode>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::document::deserialize_present"
    )]
    pub sample_output: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
    #[serde(default)]
    pub requires_auth: bool,
}

impl OperationInfo {
    /// Creates an operation without inputs.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            input: IndexMap::new(),
            sample_output: None,
            documentation: None,
            requires_auth: false,
        }
    }

    /// Replaces the input properties, keeping their order.
    pub fn with_input<I, K>(mut self, properties: I) -> Self
    where
        I: IntoIterator<Item = (K, SchemaNode)>,
        K: Into<String>,
    {
        self.input = properties
            .into_iter()
            .map(|(name, node)| (name.into(), node))
            .collect();
        self
    }

    /// Sets an example of the produced output.
    pub fn with_sample_output(mut self, sample: Value) -> Self {
        self.sample_output = Some(sample);
        self
    }

    /// Attaches long-form Markdown documentation.
    pub fn with_documentation(mut self, documentation: impl Into<String>) -> Self {
        self.documentation = Some(documentation.into());
        self
    }

    /// Marks whether a connected account is needed.
    pub fn with_requires_auth(mut self, requires_auth: bool) -> Self {
        self.requires_auth = requires_auth;
        self
    }

    /// Builds the object schema rendered as this operation's form.
    pub fn input_schema(&self) -> SchemaNode {
        input_object(&self.input)
    }
}

/// Event source that starts a flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriggerInfo {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub strategy: TriggerStrategy,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub input: IndexMap<String, SchemaNode>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::document::deserialize_present"
    )]
    pub sample_output: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
    #[serde(default)]
    pub requires_auth: bool,
}

impl TriggerInfo {
    /// Creates a trigger without inputs.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        strategy: TriggerStrategy,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            strategy,
            input: IndexMap::new(),
            sample_output: None,
            documentation: None,
            requires_auth: false,
        }
    }

    /// Replaces the input properties, keeping their order.
    pub fn with_input<I, K>(mut self, properties: I) -> Self
    where
        I: IntoIterator<Item = (K, SchemaNode)>,
        K: Into<String>,
    {
        self.input = properties
            .into_iter()
            .map(|(name, node)| (name.into(), node))
            .collect();
        self
    }

    /// Sets an example of the produced output.
    pub fn with_sample_output(mut self, sample: Value) -> Self {
        self.sample_output = Some(sample);
        self
    }

    /// Attaches long-form Markdown documentation.
    pub fn with_documentation(mut self, documentation: impl Into<String>) -> Self {
        self.documentation = Some(documentation.into());
        self
    }

    /// Marks whether a connected account is needed.
    pub fn with_requires_auth(mut self, requires_auth: bool) -> Self {
        self.requires_auth = requires_auth;
        self
    }

    /// Builds the object schema rendered as this trigger's form.
    pub fn input_schema(&self) -> SchemaNode {
        input_object(&self.input)
    }
}

fn input_object(input: &IndexMap<String, SchemaNode>) -> SchemaNode {
    ObjectField::new()
        .with_properties(input.iter().map(|(name, node)| (name.clone(), node.clone())))
        .build()
}

/// A connector plugin: identity, catalog metadata, credentials and the
/// operations and triggers it registers.
///
/// # Examples
///
/// ```
/// use connector_sdk_core::*;
///
/// let connector = ConnectorInfo::new("Slack", "Team messaging", "0.1.0")
///     .with_slug("slack")
///     .with_auth(AuthSecretField::new().build())
///     .with_operation(OperationInfo::new("send_message", "Posts a message"))
///     .with_trigger(TriggerInfo::new("new_message", "New message", TriggerStrategy::Webhook));
///
/// assert_eq!(connector.auth_type(), AuthType::Secret);
/// assert!(connector.find_operation("send_message").is_some());
/// assert!(validate_connector(&connector).is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectorInfo {
    /// URL-safe identifier, unique within a registry.
    pub slug: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    pub description: String,
    /// Connector version (`MAJOR.MINOR.PATCH`).
    pub version: String,
    #[serde(default)]
    pub category: ConnectorCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub authors: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Long-form documentation, usually the connector README.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth: Option<SchemaNode>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub operations: Vec<OperationInfo>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub triggers: Vec<TriggerInfo>,
}

impl ConnectorInfo {
    /// Creates connector metadata with an empty slug.
    ///
    /// Registries fill in the slug from the name when it is left empty.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            slug: String::new(),
            name: name.into(),
            display_name: None,
            description: description.into(),
            version: version.into(),
            category: ConnectorCategory::default(),
            icon: None,
            authors: Vec::new(),
            tags: Vec::new(),
            documentation: None,
            auth: None,
            operations: Vec::new(),
            triggers: Vec::new(),
        }
    }

    /// Overrides the slug derived from the name.
    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    /// Sets the catalog category.
    pub fn with_category(mut self, category: ConnectorCategory) -> Self {
        self.category = category;
        self
    }

    /// Attaches long-form Markdown documentation.
    pub fn with_documentation(mut self, documentation: impl Into<String>) -> Self {
        self.documentation = Some(documentation.into());
        self
    }

    /// Sets the auth schema users fill in when connecting.
    pub fn with_auth(mut self, auth: SchemaNode) -> Self {
        self.auth = Some(auth);
        self
    }

    /// Appends an operation.
    pub fn with_operation(mut self, operation: OperationInfo) -> Self {
        self.operations.push(operation);
        self
    }

    /// Appends a trigger.
    pub fn with_trigger(mut self, trigger: TriggerInfo) -> Self {
        self.triggers.push(trigger);
        self
    }

    /// Returns the display name, falling back to the name.
    pub fn title(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.name)
    }

    /// Looks up an operation by name.
    pub fn find_operation(&self, name: &str) -> Option<&OperationInfo> {
        self.operations.iter().find(|op| op.name == name)
    }

    /// Looks up a trigger by name.
    pub fn find_trigger(&self, name: &str) -> Option<&TriggerInfo> {
        self.triggers.iter().find(|trigger| trigger.name == name)
    }

    /// Derives the credential scheme from the auth schema's control type.
    pub fn auth_type(&self) -> AuthType {
        match self.auth.as_ref().and_then(SchemaNode::control_type) {
            Some(ControlType::OAuth2) => AuthType::OAuth2,
            Some(ControlType::BasicAuth) => AuthType::Basic,
            Some(ControlType::SecretAuth) => AuthType::Secret,
            Some(ControlType::CustomAuth) => AuthType::Custom,
            _ => AuthType::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::fields::{AuthBasicField, NumberField, OAuthField, Presentable, ShortTextField};

    #[test]
    fn test_operation_input_schema_is_object() {
        let op = OperationInfo::new("create_row", "Adds a row").with_input([
            ("sheet", ShortTextField::new().with_required(true).build()),
            ("count", NumberField::new().build()),
        ]);

        let schema = op.input_schema();
        assert_eq!(schema.schema_type, Some(crate::SchemaType::Object));
        assert_eq!(schema.order, vec!["sheet", "count"]);
        assert_eq!(schema.required_fields, vec!["sheet"]);
    }

    #[test]
    fn test_auth_type_from_auth_schema() {
        let base = ConnectorInfo::new("Example", "Example connector", "1.0.0");
        assert_eq!(base.auth_type(), AuthType::None);

        let basic = base.clone().with_auth(AuthBasicField::new().build());
        assert_eq!(basic.auth_type(), AuthType::Basic);

        let oauth = base.with_auth(
            OAuthField::new("https://a.example", "https://t.example", vec![]).build(),
        );
        assert_eq!(oauth.auth_type(), AuthType::OAuth2);
    }

    #[test]
    fn test_connector_serializes_in_host_shape() {
        let connector = ConnectorInfo::new("GitHub", "Code hosting", "0.2.0")
            .with_slug("github")
            .with_category(ConnectorCategory::DeveloperTools)
            .with_trigger(
                TriggerInfo::new("new_issue", "New issue", TriggerStrategy::Polling)
                    .with_sample_output(json!({"id": 1})),
            );

        let value = serde_json::to_value(&connector).unwrap();
        assert_eq!(value["slug"], "github");
        assert_eq!(value["category"], "developer_tools");
        assert_eq!(value["triggers"][0]["strategy"], "polling");
        assert!(value.get("operations").is_none());

        let back: ConnectorInfo = serde_json::from_value(value).unwrap();
        assert_eq!(back, connector);
    }

    #[test]
    fn test_null_sample_output_is_kept() {
        let op = OperationInfo::new("noop", "Does nothing").with_sample_output(Value::Null);

        let value = serde_json::to_value(&op).unwrap();
        assert_eq!(value["sample_output"], Value::Null);
        assert!(value.as_object().unwrap().contains_key("sample_output"));

        let back: OperationInfo = serde_json::from_value(value).unwrap();
        assert_eq!(back.sample_output, Some(Value::Null));
        assert_eq!(back, op);
    }

    #[test]
    fn test_title_falls_back_to_name() {
        let mut connector = ConnectorInfo::new("gmail", "Mail", "1.0.0");
        assert_eq!(connector.title(), "gmail");
        connector.display_name = Some("Gmail".to_string());
        assert_eq!(connector.title(), "Gmail");
    }
}
