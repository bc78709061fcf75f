mod common;

use common::{contact_form, full_component};
use form_builder::form::codec::{ImportRejection, export_components, import_components};
use form_builder::form::error::{CodecError, ModelError};

// =========================================================================
// Round trip
// =========================================================================

#[test]
fn export_import_round_trip_preserves_everything() {
    let mut components = contact_form();
    components.push(full_component());

    let document = export_components(&components).expect("export");
    let report = import_components(&document).expect("import");

    assert!(report.all_accepted());
    assert_eq!(report.components, components);
}

#[test]
fn round_trip_preserves_order() {
    let components = contact_form();

    let document = export_components(&components).expect("export");
    let report = import_components(&document).expect("import");

    let ids: Vec<&str> = report.components.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["email", "age", "country"]);
}

#[test]
fn re_export_is_stable() {
    let components = contact_form();

    let first = export_components(&components).expect("export");
    let report = import_components(&first).expect("import");
    let second = export_components(&report.components).expect("re-export");

    assert_eq!(first, second);
}

// =========================================================================
// Whole-document failures
// =========================================================================

#[test]
fn invalid_json_fails_the_document() {
    let result = import_components("{ not json");
    assert!(matches!(result, Err(CodecError::Parse { .. })));
}

#[test]
fn non_array_top_level_fails_the_document() {
    let result = import_components(r#"{ "id": "a", "type": "text", "label": "A" }"#);
    assert!(matches!(result, Err(CodecError::NotAnArray)));
}

// =========================================================================
// Per-component rejections (fail-soft)
// =========================================================================

#[test]
fn malformed_element_rejected_others_kept() {
    let document = r#"[
        { "id": "a", "type": "text", "label": "A" },
        { "id": "b", "type": "no-such-type", "label": "B" },
        { "id": "c", "type": "text", "label": "C" }
    ]"#;

    let report = import_components(document).expect("import");

    assert_eq!(report.components.len(), 2);
    assert_eq!(report.components[0].id, "a");
    assert_eq!(report.components[1].id, "c");

    assert_eq!(report.rejected.len(), 1);
    match &report.rejected[0] {
        ImportRejection::Shape { index, .. } => assert_eq!(*index, 1),
        other => panic!("Expected Shape rejection, got {:?}", other),
    }
}

#[test]
fn empty_label_rejected_with_component_id() {
    let document = r#"[
        { "id": "a", "type": "text", "label": "" },
        { "id": "b", "type": "text", "label": "B" }
    ]"#;

    let report = import_components(document).expect("import");

    assert_eq!(report.components.len(), 1);
    assert_eq!(report.components[0].id, "b");

    match &report.rejected[0] {
        ImportRejection::Model { index, error } => {
            assert_eq!(*index, 0);
            assert_eq!(error, &ModelError::EmptyLabel { id: "a".to_string() });
        }
        other => panic!("Expected Model rejection, got {:?}", other),
    }
}

#[test]
fn select_without_options_rejected() {
    let document = r#"[
        { "id": "plan", "type": "select", "label": "Plan" }
    ]"#;

    let report = import_components(document).expect("import");

    assert!(report.components.is_empty());
    match &report.rejected[0] {
        ImportRejection::Model { error, .. } => {
            assert_eq!(
                error,
                &ModelError::MissingOptions {
                    id: "plan".to_string()
                }
            );
        }
        other => panic!("Expected Model rejection, got {:?}", other),
    }
}

#[test]
fn duplicate_id_second_occurrence_rejected() {
    let document = r#"[
        { "id": "a", "type": "text", "label": "First" },
        { "id": "a", "type": "text", "label": "Second" }
    ]"#;

    let report = import_components(document).expect("import");

    assert_eq!(report.components.len(), 1);
    assert_eq!(report.components[0].label, "First");
    match &report.rejected[0] {
        ImportRejection::Model { index, error } => {
            assert_eq!(*index, 1);
            assert_eq!(error, &ModelError::DuplicateId { id: "a".to_string() });
        }
        other => panic!("Expected Model rejection, got {:?}", other),
    }
}

#[test]
fn rejection_messages_name_the_problem() {
    let document = r#"[
        { "id": "", "type": "text", "label": "Anon" }
    ]"#;

    let report = import_components(document).expect("import");
    let message = report.rejected[0].to_string();

    assert!(message.contains("index 0"), "got: {}", message);
    assert!(message.contains("empty id"), "got: {}", message);
}
