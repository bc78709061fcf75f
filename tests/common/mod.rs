use form_builder::form::form_model::{FieldType, FormComponent, ValidationRule};
use form_builder::schema::schema_model::Record;
use serde_json::{Value, json};

/// Build a record from id/value pairs.
pub fn record(pairs: &[(&str, Value)]) -> Record {
    let mut map = Record::new();
    for (id, value) in pairs {
        map.insert(id.to_string(), value.clone());
    }
    map
}

/// A small contact form: required email, optional numeric age, a select.
pub fn contact_form() -> Vec<FormComponent> {
    vec![
        FormComponent::new("email", FieldType::Email, "Email Address").with_required(true),
        FormComponent::new("age", FieldType::Number, "Age").with_rules(vec![
            ValidationRule::min(18.0, "Must be at least 18"),
            ValidationRule::max(120.0, "Must be at most 120"),
        ]),
        FormComponent::new("country", FieldType::Select, "Country")
            .with_options(&["US", "CA", "DE"]),
    ]
}

/// A component with every optional attribute populated, for round-trip
/// coverage.
pub fn full_component() -> FormComponent {
    let mut component =
        FormComponent::new("username", FieldType::Text, "Username").with_required(true);
    component.placeholder = Some("Pick a name".to_string());
    component.disabled = Some(false);
    component.default_value = Some(json!("guest"));
    component.description = Some("Shown on your profile".to_string());
    component.width = form_builder::form::form_model::WidthHint::Half;
    component.validation = vec![
        ValidationRule::min(3.0, "Too short"),
        ValidationRule::pattern("^[a-z0-9_]+$", "Lowercase letters, digits, underscore only"),
    ];
    component.conditions = vec![form_builder::form::form_model::Condition {
        field: "signup".to_string(),
        operator: form_builder::form::form_model::ConditionOperator::Eq,
        value: json!(true),
    }];
    component
}
