use std::collections::HashSet;
use std::fmt;

use serde_json::Value;

use crate::form::error::{CodecError, ModelError};
use crate::form::form_model::FormComponent;
use crate::form::model_check::check_component;

/// Outcome of importing a form document: the well-formed components in
/// document order, plus a rejection per element that did not make it.
#[derive(Debug)]
pub struct ImportReport {
    pub components: Vec<FormComponent>,
    pub rejected: Vec<ImportRejection>,
}

impl ImportReport {
    pub fn all_accepted(&self) -> bool {
        self.rejected.is_empty()
    }
}

/// Why a single document element was rejected. The rest of the document
/// is still imported.
#[derive(Debug)]
pub enum ImportRejection {
    /// Element did not deserialize as a FormComponent
    Shape { index: usize, source: serde_json::Error },

    /// Element deserialized but failed the model check
    Model { index: usize, error: ModelError },
}

impl fmt::Display for ImportRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImportRejection::Shape { index, source } => {
                write!(f, "Component at index {} is malformed: {}", index, source)
            }
            ImportRejection::Model { index, error } => {
                write!(f, "Component at index {}: {}", index, error)
            }
        }
    }
}

/// Import a form document: a JSON array of FormComponent objects.
///
/// Structurally invalid JSON (or a non-array top level) fails the whole
/// document. Individual malformed components are rejected with the
/// remaining well-formed components still accepted, so the caller never
/// installs a bad component but keeps the rest of the form usable.
pub fn import_components(json: &str) -> Result<ImportReport, CodecError> {
    let document: Value =
        serde_json::from_str(json).map_err(|source| CodecError::Parse { source })?;

    let elements = match document {
        Value::Array(elements) => elements,
        _ => return Err(CodecError::NotAnArray),
    };

    let mut components = Vec::new();
    let mut rejected = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    for (index, element) in elements.into_iter().enumerate() {
        let component: FormComponent = match serde_json::from_value(element) {
            Ok(c) => c,
            Err(source) => {
                rejected.push(ImportRejection::Shape { index, source });
                continue;
            }
        };

        if let Err(error) = check_component(&component) {
            rejected.push(ImportRejection::Model { index, error });
            continue;
        }

        if !seen.insert(component.id.clone()) {
            rejected.push(ImportRejection::Model {
                index,
                error: ModelError::DuplicateId {
                    id: component.id.clone(),
                },
            });
            continue;
        }

        components.push(component);
    }

    Ok(ImportReport {
        components,
        rejected,
    })
}

/// Export a component list as the canonical JSON document. Order is
/// preserved; unset optional attributes are omitted, so the document
/// round-trips through `import_components` unchanged.
pub fn export_components(components: &[FormComponent]) -> Result<String, CodecError> {
    serde_json::to_string(components).map_err(|source| CodecError::Serialize { source })
}

/// Pretty-printed variant of `export_components`, for files meant to be
/// read or diffed by humans.
pub fn export_components_pretty(components: &[FormComponent]) -> Result<String, CodecError> {
    serde_json::to_string_pretty(components).map_err(|source| CodecError::Serialize { source })
}
