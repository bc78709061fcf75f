use serde::{Deserialize, Serialize};

use crate::form::form_model::FormComponent;
use crate::schema::schema_model::{CompiledSchema, ValidationOutcome};

// ============================================================================
// Validation report — one record checked against one form
// ============================================================================

/// Aggregated result of validating a record, with per-field detail in
/// component order. Consumed by the console and JSON reporters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Display name for the form (usually the document file stem)
    pub form_name: String,

    /// Whether the record passed every field check
    pub valid: bool,

    /// Total number of fields checked
    pub total_fields: usize,

    /// Fields with no violations
    pub passed_fields: usize,

    /// Fields with at least one violation
    pub failed_fields: usize,

    /// Rules the compiler had to skip, rendered as messages
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub compile_issues: Vec<String>,

    /// Per-field detail, in component order
    pub fields: Vec<FieldReport>,
}

/// One field's validation result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldReport {
    pub id: String,
    pub label: String,

    /// Field kind as its wire name (text, email, ...)
    pub field_type: String,

    pub passed: bool,

    /// Violation messages, in rule order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub messages: Vec<String>,
}

impl ValidationReport {
    /// Build a report from a validation outcome, pairing each field with
    /// its component for labels and ordering.
    pub fn from_outcome(
        form_name: &str,
        components: &[FormComponent],
        schema: &CompiledSchema,
        outcome: &ValidationOutcome,
    ) -> Self {
        let fields: Vec<FieldReport> = components
            .iter()
            .map(|component| {
                let messages = outcome.field_errors(&component.id).to_vec();
                FieldReport {
                    id: component.id.clone(),
                    label: component.label.clone(),
                    field_type: wire_name(component),
                    passed: messages.is_empty(),
                    messages,
                }
            })
            .collect();

        let total = fields.len();
        let failed = fields.iter().filter(|f| !f.passed).count();

        ValidationReport {
            form_name: form_name.to_string(),
            valid: outcome.valid,
            total_fields: total,
            passed_fields: total - failed,
            failed_fields: failed,
            compile_issues: schema.issues().iter().map(|i| i.to_string()).collect(),
            fields,
        }
    }

    /// Whether the record passed and every rule actually ran.
    pub fn clean(&self) -> bool {
        self.valid && self.compile_issues.is_empty()
    }
}

fn wire_name(component: &FormComponent) -> String {
    // The enum serializes to its wire name ("text", "email", ...)
    serde_json::to_value(component.field_type)
        .ok()
        .and_then(|v| v.as_str().map(str::to_string))
        .unwrap_or_default()
}
