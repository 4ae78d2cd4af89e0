use indexmap::IndexMap;

use crate::{AuthSchema, ControlType, SchemaBuilder, SchemaNode, SchemaType, merge_maps};

use super::{
    BaseField, Field, Presentable, ShortTextField, TextConstraints, apply_properties, impl_field,
    required_names,
};

/// Display order written on OAuth nodes.
///
/// The names differ from the generated property keys (`appUrl` vs `authUrl`,
/// `scope` vs `scopes`, no `clientSecret`). Existing hosts rely on this exact
/// list, so it is kept verbatim; see `ordered_property_names` on
/// [`SchemaNode`] for an order that tolerates the mismatch.
pub const OAUTH_FIELD_ORDER: [&str; 4] = ["appUrl", "tokenUrl", "scope", "clientId"];

const BASIC_AUTH_FIELD_ORDER: [&str; 2] = ["username", "password"];
const SECRET_AUTH_FIELD_ORDER: [&str; 2] = ["secret", "key"];

const DEFAULT_REDIRECT_PARAM_KEY: &str = "redirect_uri";
const PASSWORD_FORMAT: &str = "password";

fn order_of(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

fn secret_input(title: &str) -> SchemaNode {
    ShortTextField::new()
        .with_title(title)
        .with_format(PASSWORD_FORMAT)
        .with_required(true)
        .build()
}

/// Stores synthesized credential properties on a copy of `builder` and
/// builds it.
fn build_with_children(
    builder: &SchemaBuilder,
    properties: IndexMap<String, SchemaNode>,
    order: Vec<String>,
) -> SchemaNode {
    let required = required_names(&properties);
    let mut builder = builder.clone();
    builder
        .properties(properties)
        .order(order)
        .required_fields(required);
    builder.build()
}

/// OAuth 2.0 credential form.
///
/// The endpoints and scopes are fixed at construction. [`build`](Field::build)
/// synthesizes the standard child inputs (`authUrl`, `tokenUrl`, `scopes`,
/// `clientId`, `clientSecret`) and merges caller-supplied extras on top;
/// an extra with a standard name replaces the standard input.
///
/// # Examples
///
/// ```
/// use connector_sdk_core::*;
///
/// let node = OAuthField::new(
///     "https://accounts.example.com/o/oauth2/auth",
///     "https://accounts.example.com/o/oauth2/token",
///     vec!["email".into()],
/// )
/// .with_extra_properties([("tenant", ShortTextField::new().build())])
/// .build();
///
/// assert_eq!(node.properties.len(), 6);
/// assert_eq!(node.ui.auth.unwrap().scope, vec!["email"]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct OAuthField {
    base: BaseField,
    extra: IndexMap<String, SchemaNode>,
}

impl OAuthField {
    /// Creates an OAuth 2.0 field for the given endpoints and scopes.
    pub fn new(
        auth_url: impl Into<String>,
        token_url: impl Into<String>,
        scopes: Vec<String>,
    ) -> Self {
        let mut base = BaseField::new(SchemaType::Object, ControlType::OAuth2);
        base.builder.auth(AuthSchema {
            auth_url: Some(auth_url.into()),
            token_url: Some(token_url.into()),
            scope: scopes,
            excluded_params: Vec::new(),
            redirect_param_key: Some(DEFAULT_REDIRECT_PARAM_KEY.to_string()),
        });
        Self {
            base,
            extra: IndexMap::new(),
        }
    }

    /// Sets the redirect parameter name the provider expects.
    pub fn with_redirect_param_key(mut self, key: impl Into<String>) -> Self {
        self.base.builder.auth_mut().redirect_param_key = Some(key.into());
        self
    }

    /// Lists query parameters the host must not forward.
    pub fn with_excluded_params(mut self, params: Vec<String>) -> Self {
        self.base.builder.auth_mut().excluded_params = params;
        self
    }

    /// Adds inputs next to the standard ones.
    pub fn with_extra_properties<I, K>(mut self, properties: I) -> Self
    where
        I: IntoIterator<Item = (K, SchemaNode)>,
        K: Into<String>,
    {
        for (name, node) in properties {
            self.extra.insert(name.into(), node);
        }
        self
    }

    fn standard_properties(&self) -> IndexMap<String, SchemaNode> {
        let auth = self.base.builder.node().ui.auth.clone().unwrap_or_default();

        let mut properties = IndexMap::new();
        properties.insert(
            "authUrl".to_string(),
            ShortTextField::new()
                .with_title("Authorization URL")
                .with_default(auth.auth_url.unwrap_or_default())
                .with_disabled(true)
                .build(),
        );
        properties.insert(
            "tokenUrl".to_string(),
            ShortTextField::new()
                .with_title("Token URL")
                .with_default(auth.token_url.unwrap_or_default())
                .with_disabled(true)
                .build(),
        );
        properties.insert(
            "scopes".to_string(),
            ShortTextField::new()
                .with_title("Scopes")
                .with_default(auth.scope.join(" "))
                .with_disabled(true)
                .build(),
        );
        properties.insert(
            "clientId".to_string(),
            ShortTextField::new()
                .with_title("Client ID")
                .with_required(true)
                .build(),
        );
        properties.insert("clientSecret".to_string(), secret_input("Client Secret"));
        properties
    }
}

impl Field for OAuthField {
    fn builder(&self) -> &SchemaBuilder {
        self.base.builder()
    }

    fn builder_mut(&mut self) -> &mut SchemaBuilder {
        self.base.builder_mut()
    }

    fn build(&self) -> SchemaNode {
        let properties = merge_maps(&self.standard_properties(), &self.extra);
        build_with_children(
            self.base.builder(),
            properties,
            order_of(&OAUTH_FIELD_ORDER),
        )
    }
}

/// Username and password credential form.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthBasicField {
    base: BaseField,
}

impl AuthBasicField {
    /// Creates a username and password field.
    pub fn new() -> Self {
        Self {
            base: BaseField::new(SchemaType::Object, ControlType::BasicAuth),
        }
    }
}

impl Default for AuthBasicField {
    fn default() -> Self {
        Self::new()
    }
}

impl Field for AuthBasicField {
    fn builder(&self) -> &SchemaBuilder {
        self.base.builder()
    }

    fn builder_mut(&mut self) -> &mut SchemaBuilder {
        self.base.builder_mut()
    }

    fn build(&self) -> SchemaNode {
        let mut properties = IndexMap::new();
        properties.insert(
            "username".to_string(),
            ShortTextField::new()
                .with_title("Username")
                .with_required(true)
                .build(),
        );
        properties.insert("password".to_string(), secret_input("Password"));
        build_with_children(
            self.base.builder(),
            properties,
            order_of(&BASIC_AUTH_FIELD_ORDER),
        )
    }
}

/// Single secret (API token) credential form, optionally paired with a key
/// or account identifier.
///
/// # Examples
///
/// ```
/// use connector_sdk_core::*;
///
/// let node = AuthSecretField::new().with_key("Account ID").build();
/// assert_eq!(node.order, vec!["secret", "key"]);
/// assert_eq!(node.required_fields, vec!["secret", "key"]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AuthSecretField {
    base: BaseField,
    key_title: Option<String>,
}

impl AuthSecretField {
    /// Creates a single API secret field.
    pub fn new() -> Self {
        Self {
            base: BaseField::new(SchemaType::Object, ControlType::SecretAuth),
            key_title: None,
        }
    }

    /// Adds a required `key` input shown with the given title.
    pub fn with_key(mut self, title: impl Into<String>) -> Self {
        self.key_title = Some(title.into());
        self
    }
}

impl Default for AuthSecretField {
    fn default() -> Self {
        Self::new()
    }
}

impl Field for AuthSecretField {
    fn builder(&self) -> &SchemaBuilder {
        self.base.builder()
    }

    fn builder_mut(&mut self) -> &mut SchemaBuilder {
        self.base.builder_mut()
    }

    fn build(&self) -> SchemaNode {
        let mut properties = IndexMap::new();
        properties.insert("secret".to_string(), secret_input("Secret"));
        if let Some(title) = &self.key_title {
            properties.insert(
                "key".to_string(),
                ShortTextField::new()
                    .with_title(title.as_str())
                    .with_required(true)
                    .build(),
            );
        }
        build_with_children(
            self.base.builder(),
            properties,
            order_of(&SECRET_AUTH_FIELD_ORDER),
        )
    }
}

/// Connector-defined credential form with arbitrary inputs and optional
/// OAuth endpoints.
///
/// # Examples
///
/// ```
/// use connector_sdk_core::*;
///
/// let token_url = Some("https://auth.example/token".to_string());
/// let node = CustomAuthField::new(
///     "https://auth.example/authorize",
///     token_url,
///     vec!["read".into(), "write".into()],
/// )
/// .build();
///
/// let auth = node.ui.auth.as_ref().unwrap();
/// assert_eq!(auth.auth_url.as_deref(), Some("https://auth.example/authorize"));
/// assert_eq!(auth.scope, vec!["read", "write"]);
/// assert!(!node.required);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CustomAuthField {
    base: BaseField,
}

impl CustomAuthField {
    /// Creates a custom auth field; add its inputs with `with_properties`.
    pub fn new(
        auth_url: impl Into<String>,
        token_url: Option<String>,
        scopes: Vec<String>,
    ) -> Self {
        let mut base = BaseField::new(SchemaType::Object, ControlType::CustomAuth);
        base.builder
            .auth(AuthSchema {
                auth_url: Some(auth_url.into()),
                token_url,
                scope: scopes,
                ..Default::default()
            })
            .required(false);
        Self { base }
    }

    /// Replaces the child fields, keeping the input order.
    pub fn with_properties<I, K>(mut self, properties: I) -> Self
    where
        I: IntoIterator<Item = (K, SchemaNode)>,
        K: Into<String>,
    {
        apply_properties(&mut self.base.builder, properties);
        self
    }
}

impl_field!(CustomAuthField);
