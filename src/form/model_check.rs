use std::collections::HashSet;

use crate::form::error::ModelError;
use crate::form::form_model::FormComponent;

/// Check one component in isolation: non-empty id, non-empty label, and
/// options present when the field kind requires them.
pub fn check_component(component: &FormComponent) -> Result<(), ModelError> {
    if component.id.trim().is_empty() {
        return Err(ModelError::EmptyId {
            label: component.label.clone(),
        });
    }

    if component.label.trim().is_empty() {
        return Err(ModelError::EmptyLabel {
            id: component.id.clone(),
        });
    }

    if component.field_type.uses_options() && component.options.is_empty() {
        return Err(ModelError::MissingOptions {
            id: component.id.clone(),
        });
    }

    Ok(())
}

/// Check a whole component list: every per-component rule plus id
/// uniqueness. Returns all problems found, in component order.
pub fn check_form(components: &[FormComponent]) -> Vec<ModelError> {
    let mut errors = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();

    for component in components {
        if let Err(e) = check_component(component) {
            errors.push(e);
            continue;
        }

        if !seen.insert(component.id.as_str()) {
            errors.push(ModelError::DuplicateId {
                id: component.id.clone(),
            });
        }
    }

    errors
}
