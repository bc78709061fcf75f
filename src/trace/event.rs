use serde::Serialize;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::schema::schema_model::{CompiledSchema, ValidationOutcome};

/// One line of the session trace stream (JSONL). Unset fields are
/// omitted so each event only carries what its kind needs.
#[derive(Debug, Serialize)]
pub struct SessionEvent {
    pub timestamp_ms: u128,

    /// Event kind: component_added, component_removed, component_updated,
    /// undo, redo, import, schema_compiled, validation_run
    pub kind: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub component_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<usize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_count: Option<usize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue_count: Option<usize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_count: Option<usize>,
}

impl SessionEvent {
    pub fn now(kind: &str) -> Self {
        Self {
            timestamp_ms: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap()
                .as_millis(),
            kind: kind.to_string(),
            component_id: None,
            cursor: None,
            signature: None,
            field_count: None,
            issue_count: None,
            valid: None,
            error_count: None,
        }
    }

    pub fn with_component(mut self, id: &str) -> Self {
        self.component_id = Some(id.to_string());
        self
    }

    pub fn with_cursor(mut self, cursor: usize) -> Self {
        self.cursor = Some(cursor);
        self
    }

    pub fn with_schema(mut self, signature: &str, schema: &CompiledSchema) -> Self {
        self.signature = Some(signature.to_string());
        self.field_count = Some(schema.fields().len());
        self.issue_count = Some(schema.issues().len());
        self
    }

    pub fn with_outcome(mut self, outcome: &ValidationOutcome) -> Self {
        self.valid = Some(outcome.valid);
        self.error_count = Some(outcome.error_count());
        self
    }
}
