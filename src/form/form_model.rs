use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One field of a form. Pure data: all behavior lives in the schema
/// compiler and the session.
///
/// Serialized shape matches the export document format: unset optional
/// attributes are omitted, `defaultValue` stays camelCase.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FormComponent {
    /// Unique within a form, stable across edits
    pub id: String,

    /// Field kind; drives the base validation check and rendering
    #[serde(rename = "type")]
    pub field_type: FieldType,

    /// Display label (non-empty for valid forms)
    pub label: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,

    /// Mandatory presence, layered on top of the base type check
    #[serde(default, skip_serializing_if = "is_false")]
    pub required: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,

    /// Initial value; shape depends on `field_type`
    #[serde(rename = "defaultValue", default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<Value>,

    /// Choices for select/radio fields (non-empty there, ignored elsewhere)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,

    /// Extra rules, applied in listed order after the base check
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub validation: Vec<ValidationRule>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Layout hint only; no validation behavior
    #[serde(default, skip_serializing_if = "WidthHint::is_full")]
    pub width: WidthHint,

    /// Visibility predicates; stored and round-tripped, never evaluated
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conditions: Vec<Condition>,
}

impl FormComponent {
    /// Minimal component: everything optional left unset.
    pub fn new(id: impl Into<String>, field_type: FieldType, label: impl Into<String>) -> Self {
        FormComponent {
            id: id.into(),
            field_type,
            label: label.into(),
            placeholder: None,
            required: false,
            disabled: None,
            default_value: None,
            options: vec![],
            validation: vec![],
            description: None,
            width: WidthHint::Full,
            conditions: vec![],
        }
    }

    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn with_options(mut self, options: &[&str]) -> Self {
        self.options = options.iter().map(|o| o.to_string()).collect();
        self
    }

    pub fn with_rules(mut self, rules: Vec<ValidationRule>) -> Self {
        self.validation = rules;
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }
}

/// Closed set of field kinds. The schema compiler matches exhaustively,
/// so adding a kind forces an update there.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Text,
    Email,
    Number,
    Textarea,
    Select,
    Radio,
    Checkbox,
    Date,
    Phone,
    File,
}

impl FieldType {
    /// Kinds whose value must come from the component's `options`.
    pub fn uses_options(self) -> bool {
        matches!(self, FieldType::Select | FieldType::Radio)
    }
}

/// A single extra validation rule attached to a component.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ValidationRule {
    pub kind: RuleKind,

    /// Number for min/max, regex source for pattern, opaque for custom,
    /// absent for required
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,

    /// Shown on violation
    pub message: String,
}

impl ValidationRule {
    pub fn required(message: impl Into<String>) -> Self {
        ValidationRule {
            kind: RuleKind::Required,
            value: None,
            message: message.into(),
        }
    }

    pub fn min(value: f64, message: impl Into<String>) -> Self {
        ValidationRule {
            kind: RuleKind::Min,
            value: Some(value.into()),
            message: message.into(),
        }
    }

    pub fn max(value: f64, message: impl Into<String>) -> Self {
        ValidationRule {
            kind: RuleKind::Max,
            value: Some(value.into()),
            message: message.into(),
        }
    }

    pub fn pattern(source: impl Into<String>, message: impl Into<String>) -> Self {
        ValidationRule {
            kind: RuleKind::Pattern,
            value: Some(Value::String(source.into())),
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RuleKind {
    Required,
    Min,
    Max,
    Pattern,
    Custom,
}

/// Layout width hint. Defaults to full width and is omitted from the
/// export document in that case.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum WidthHint {
    #[default]
    #[serde(rename = "full")]
    Full,
    #[serde(rename = "1/2")]
    Half,
    #[serde(rename = "1/3")]
    Third,
    #[serde(rename = "1/4")]
    Quarter,
}

impl WidthHint {
    pub fn is_full(&self) -> bool {
        matches!(self, WidthHint::Full)
    }
}

/// Visibility predicate referencing another field. Reserved: the core
/// stores and round-trips these but never evaluates them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Condition {
    pub field: String,
    pub operator: ConditionOperator,
    pub value: Value,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ConditionOperator {
    #[serde(rename = "==")]
    Eq,
    #[serde(rename = "!=")]
    Ne,
    #[serde(rename = ">")]
    Gt,
    #[serde(rename = "<")]
    Lt,
    #[serde(rename = ">=")]
    Ge,
    #[serde(rename = "<=")]
    Le,
}

// Serde skip helper
fn is_false(b: &bool) -> bool {
    !b
}
