use connector_sdk_core::*;
use indexmap::IndexMap;
use serde_json::{Value, json};

fn pair(node: &SchemaNode) -> (Option<SchemaType>, Option<ControlType>) {
    (node.schema_type, node.control_type())
}

#[test]
fn test_every_field_fixes_its_type_pairing() {
    use ControlType as C;
    use SchemaType as S;

    let cases: Vec<(SchemaNode, S, C)> = vec![
        (ShortTextField::new().build(), S::String, C::ShortText),
        (LongTextField::new().build(), S::String, C::LongText),
        (MarkdownField::new().build(), S::String, C::Markdown),
        (CodeField::new("python").build(), S::String, C::Code),
        (CodeEditorField::new("sql").build(), S::String, C::CodeEditor),
        (
            CodeFrameworkField::new("typescript", "node").build(),
            S::String,
            C::CodeFramework,
        ),
        (NumberField::new().build(), S::Number, C::Number),
        (BooleanField::new().build(), S::Boolean, C::Boolean),
        (CheckboxField::new().build(), S::Boolean, C::Checkbox),
        (DateTimeField::new().build(), S::String, C::DateTime),
        (SelectField::new().build(), S::String, C::Select),
        (MultiSelectField::new().build(), S::Array, C::MultiSelect),
        (DynamicField::new("list").build(), S::String, C::DynamicSelect),
        (FileField::new().build(), S::String, C::File),
        (ArrayField::new().build(), S::Array, C::Array),
        (ObjectField::new().build(), S::Object, C::Object),
        (GroupArrayField::new().build(), S::Array, C::GroupArray),
        (InputMapField::new().build(), S::Object, C::InputMap),
        (BranchField::new().build(), S::Array, C::Branch),
        (ConditionField::new().build(), S::Object, C::Condition),
        (JsonField::new().build(), S::Object, C::Json),
        (
            OAuthField::new("https://a.example", "https://t.example", vec![]).build(),
            S::Object,
            C::OAuth2,
        ),
        (AuthBasicField::new().build(), S::Object, C::BasicAuth),
        (AuthSecretField::new().build(), S::Object, C::SecretAuth),
        (
            CustomAuthField::new("https://a.example", None, vec![]).build(),
            S::Object,
            C::CustomAuth,
        ),
    ];

    for (node, schema_type, control) in cases {
        assert_eq!(pair(&node), (Some(schema_type), Some(control)));
        assert!(control.is_compatible_with(schema_type));
        assert!(validate_schema(&node).is_empty(), "{control} should be valid");
    }
}

#[test]
fn test_array_items_normalization() {
    for item in [
        ShortTextField::new().build(),
        NumberField::new().with_minimum(1.0).build(),
        BooleanField::new().build(),
    ] {
        let node = ArrayField::new().with_items(item.clone()).build();
        let items = node.items.as_deref().unwrap();
        assert_eq!(items.schema_type, Some(SchemaType::Object));
        assert_eq!(items.properties.len(), 1);
        assert_eq!(items.properties.get("value"), Some(&item));
    }

    for item in [
        ObjectField::new()
            .with_properties([("id", NumberField::new().build())])
            .build(),
        MultiSelectField::new().build(),
    ] {
        let node = ArrayField::new().with_items(item.clone()).build();
        assert_eq!(node.items.as_deref(), Some(&item));
    }
}

#[test]
fn test_object_and_input_map_required_fields() {
    let properties = || {
        [
            ("a", ShortTextField::new().with_required(true).build()),
            ("b", ShortTextField::new().with_required(false).build()),
        ]
    };

    for node in [
        ObjectField::new().with_properties(properties()).build(),
        InputMapField::new().with_properties(properties()).build(),
    ] {
        let mut order = node.order.clone();
        order.sort();
        assert_eq!(order, vec!["a", "b"]);
        assert_eq!(node.required_fields, vec!["a"]);
    }
}

#[test]
fn test_oauth_properties_and_extra_override() {
    let standard = ["authUrl", "tokenUrl", "scopes", "clientId", "clientSecret"];
    let field = OAuthField::new(
        "https://example.com/oauth/authorize",
        "https://example.com/oauth/token",
        vec!["read".to_string()],
    );

    let node = field.build();
    let keys: Vec<&str> = node.properties.keys().map(String::as_str).collect();
    assert_eq!(keys, standard);

    let custom_client = ShortTextField::new().with_title("App key").build();
    let node = field
        .with_extra_properties([
            ("clientId", custom_client.clone()),
            ("region", ShortTextField::new().build()),
        ])
        .build();

    assert_eq!(node.properties.len(), standard.len() + 1);
    assert!(standard.iter().all(|key| node.properties.contains_key(*key)));
    assert!(node.properties.contains_key("region"));
    assert_eq!(node.properties["clientId"], custom_client);
}

#[test]
fn test_merge_maps_law() {
    let m1: IndexMap<String, i32> = [("x", 1), ("y", 2)]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();
    let m2: IndexMap<String, i32> = [("y", 20), ("z", 30)]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();

    let merged = merge_maps(&m1, &m2);
    assert_eq!(merged.len(), 3);
    assert_eq!(merged["x"], 1);
    assert_eq!(merged["y"], 20);
    assert_eq!(merged["z"], 30);
}

#[test]
fn test_build_is_idempotent_and_independent() {
    let mut builder = SchemaBuilder::new();
    builder.title("Amount").minimum(0.0);

    let first = builder.build();
    assert_eq!(first, builder.build());

    builder.maximum(10.0);
    let second = builder.build();
    assert_eq!(first.maximum, None);
    assert_eq!(second.maximum, Some(10.0));

    let field = NumberField::new().with_title("Count");
    assert_eq!(field.build(), field.build());
}

#[test]
fn test_number_field_scenario() {
    let node = NumberField::new()
        .with_minimum(0.0)
        .with_maximum(100.0)
        .with_required(true)
        .build();

    assert_eq!(node.schema_type, Some(SchemaType::Number));
    assert_eq!(node.minimum, Some(0.0));
    assert_eq!(node.maximum, Some(100.0));
    assert!(node.required);
}

#[test]
fn test_custom_auth_scenario() {
    let token_url = Some("https://auth.example/token".to_string());
    let node = CustomAuthField::new(
        "https://auth.example/authorize",
        token_url,
        vec!["read".to_string(), "write".to_string()],
    )
    .build();

    let auth = node.ui.auth.as_ref().unwrap();
    assert_eq!(
        auth.auth_url.as_deref(),
        Some("https://auth.example/authorize")
    );
    assert_eq!(auth.token_url.as_deref(), Some("https://auth.example/token"));
    assert_eq!(auth.scope, vec!["read", "write"]);
    assert!(!node.required);
}

#[test]
fn test_required_and_disabled_are_dual_written() {
    let node = ShortTextField::new()
        .with_required(true)
        .with_disabled(true)
        .build();

    let json = serde_json::to_value(&node).unwrap();
    assert_eq!(json["isRequired"], true);
    assert_eq!(json["disabled"], true);
    assert_eq!(json["ui:props"]["required"], true);
    assert_eq!(json["ui:props"]["disabled"], true);
}

#[test]
fn test_legacy_flag_location_is_read() {
    let legacy = json!({
        "type": "string",
        "ui:props": {"controlType": "short_text", "required": true}
    });
    let node: SchemaNode = serde_json::from_value(legacy).unwrap();
    assert!(node.required);
    assert!(!node.disabled);
    assert_eq!(node.control_type(), Some(ControlType::ShortText));
}

#[test]
fn test_form_survives_json_round_trip() {
    let form = ObjectField::new()
        .with_title("Create event")
        .with_properties([
            (
                "summary",
                ShortTextField::new()
                    .with_required(true)
                    .with_max_length(120)
                    .build(),
            ),
            (
                "start",
                DateTimeField::new().with_required(true).build(),
            ),
            (
                "calendar",
                DynamicField::new("list_calendars")
                    .with_refresh_on_search(true)
                    .build(),
            ),
            (
                "attendees",
                GroupArrayField::new()
                    .with_properties([("email", ShortTextField::new().build())])
                    .build(),
            ),
            (
                "visibility",
                SelectField::new()
                    .with_options(vec![
                        SelectOption::new("Public", "public"),
                        SelectOption::new("Private", "private"),
                    ])
                    .with_default("public")
                    .build(),
            ),
        ])
        .build();

    let text = serde_json::to_string(&form).unwrap();
    let back: SchemaNode = serde_json::from_str(&text).unwrap();
    assert_eq!(back, form);

    let value: Value = serde_json::from_str(&text).unwrap();
    let keys: Vec<&str> = value["properties"]
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(keys, ["summary", "start", "calendar", "attendees", "visibility"]);
    assert_eq!(value["required"], json!(["summary", "start"]));
}

#[test]
fn test_dependencies_survive_json_round_trip() {
    let form = ObjectField::new()
        .with_properties([
            ("plan", ShortTextField::new().build()),
            ("card_number", ShortTextField::new().build()),
            ("company", ShortTextField::new().build()),
        ])
        .with_dependency(
            "card_number",
            Dependency::Properties(vec!["plan".to_string()]),
        )
        .with_dependency(
            "company",
            Dependency::Schema(Box::new(
                ObjectField::new()
                    .with_properties([("vat_id", ShortTextField::new().with_required(true).build())])
                    .build(),
            )),
        )
        .build();

    let value = serde_json::to_value(&form).unwrap();
    assert_eq!(value["dependencies"]["card_number"], json!(["plan"]));
    assert_eq!(value["dependencies"]["company"]["type"], "object");
    assert_eq!(value["dependencies"]["company"]["required"], json!(["vat_id"]));

    let back: SchemaNode = serde_json::from_value(value).unwrap();
    assert_eq!(back, form);
    assert!(matches!(
        back.dependencies.get("card_number"),
        Some(Dependency::Properties(names)) if *names == ["plan"]
    ));
    assert!(matches!(
        back.dependencies.get("company"),
        Some(Dependency::Schema(schema)) if schema.properties.contains_key("vat_id")
    ));
}

#[test]
fn test_null_option_value_survives_json_round_trip() {
    let node = SelectField::new()
        .with_options(vec![
            SelectOption::new("None", Value::Null),
            SelectOption::new("Daily", "daily"),
        ])
        .build();

    let back: SchemaNode = serde_json::from_value(serde_json::to_value(&node).unwrap()).unwrap();
    assert_eq!(back.one_of[0].const_value, Some(Value::Null));
    assert_eq!(back, node);
}

#[test]
fn test_connector_metadata_validates() {
    let connector = ConnectorInfo::new("Google Calendar", "Calendar events", "0.3.1")
        .with_slug("google-calendar")
        .with_category(ConnectorCategory::Productivity)
        .with_auth(
            OAuthField::new(
                "https://accounts.google.com/o/oauth2/auth",
                "https://oauth2.googleapis.com/token",
                vec!["https://www.googleapis.com/auth/calendar".to_string()],
            )
            .build(),
        )
        .with_operation(
            OperationInfo::new("create_event", "Creates an event")
                .with_input([("summary", ShortTextField::new().with_required(true).build())])
                .with_requires_auth(true),
        )
        .with_trigger(TriggerInfo::new(
            "event_started",
            "Fires when an event starts",
            TriggerStrategy::Scheduled,
        ));

    assert!(validate_connector(&connector).is_empty());
    assert_eq!(connector.auth_type(), AuthType::OAuth2);
    assert_eq!(
        connector.find_trigger("event_started").map(|t| t.strategy),
        Some(TriggerStrategy::Scheduled)
    );
}
