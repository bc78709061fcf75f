use crate::report::report_model::ValidationReport;

// ============================================================================
// Console reporter — formatted terminal output
// ============================================================================

/// Format a validation report for terminal output.
///
/// Produces output like:
/// ```text
/// === Form: contact ===
///
/// ✓ PASS  Email Address (email)
/// ✗ FAIL  Age (number)
///     [FAIL] Must be a number
///
/// [ISSUE] Component 'age' rule 1: invalid pattern (...)
///
/// === Results: 1 passed, 1 failed (2 total) ===
/// ```
pub fn format_console_report(report: &ValidationReport) -> String {
    let mut out = String::new();

    out.push_str(&format!("=== Form: {} ===\n\n", report.form_name));

    for field in &report.fields {
        let marker = if field.passed {
            "\u{2713} PASS"
        } else {
            "\u{2717} FAIL"
        };

        out.push_str(&format!(
            "{}  {} ({})\n",
            marker, field.label, field.field_type
        ));

        for message in &field.messages {
            out.push_str(&format!("    [FAIL] {}\n", message));
        }
    }

    // Skipped rules are a problem with the form, not the record; keep
    // them visually separate from field failures
    if !report.compile_issues.is_empty() {
        out.push('\n');
        for issue in &report.compile_issues {
            out.push_str(&format!("[ISSUE] {}\n", issue));
        }
    }

    out.push_str(&format!(
        "\n=== Results: {} passed, {} failed ({} total) ===\n",
        report.passed_fields, report.failed_fields, report.total_fields
    ));

    out
}
