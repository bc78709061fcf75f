use std::path::Path;

use crate::form::codec::import_components;
use crate::report::console::format_console_report;
use crate::report::report_model::ValidationReport;
use crate::schema::schema_model::Record;
use crate::session::session::FormSession;
use crate::trace::logger::TraceLogger;

// ============================================================================
// check subcommand
// ============================================================================

/// Check a form definition file. Returns whether it is clean (every
/// component accepted, no skipped rules).
pub fn cmd_check(form_path: &str, verbose: u8) -> Result<bool, Box<dyn std::error::Error>> {
    let json = std::fs::read_to_string(form_path)?;
    let report = import_components(&json)?;

    if verbose > 0 {
        eprintln!(
            "Imported {} components ({} rejected) from {}",
            report.components.len(),
            report.rejected.len(),
            form_path
        );
    }

    for rejection in &report.rejected {
        println!("[REJECTED] {}", rejection);
    }

    let mut session = FormSession::new();
    session.install(report.components.clone())?;

    let schema = session.schema();
    for issue in schema.issues() {
        println!("[ISSUE] {}", issue);
    }

    let clean = report.all_accepted() && !schema.has_issues();
    if clean {
        println!(
            "Form OK: {} components, {} fields compile cleanly",
            report.components.len(),
            schema.fields().len()
        );
    }

    Ok(clean)
}

// ============================================================================
// validate subcommand
// ============================================================================

/// Validate a record file against a form definition file. Returns
/// whether the record passed.
pub fn cmd_validate(
    form_path: &str,
    record_path: &str,
    format: &str,
    output: Option<&str>,
    trace_file: Option<&str>,
    verbose: u8,
) -> Result<bool, Box<dyn std::error::Error>> {
    let form_json = std::fs::read_to_string(form_path)?;
    let import = import_components(&form_json)?;

    for rejection in &import.rejected {
        eprintln!("Warning: {}", rejection);
    }

    let mut session = FormSession::new();
    if let Some(path) = trace_file {
        session = session.with_trace(TraceLogger::new(path));
    }
    session.install(import.components)?;

    let record = load_record(record_path)?;

    if verbose > 0 {
        eprintln!(
            "Validating {} fields against {} record values...",
            session.components().len(),
            record.len()
        );
    }

    let outcome = session.validate(&record);
    let schema = session.schema().clone();
    let report = ValidationReport::from_outcome(
        &file_stem(form_path),
        session.components(),
        &schema,
        &outcome,
    );

    let content = match format {
        "json" => serde_json::to_string_pretty(&report)?,
        _ => format_console_report(&report),
    };

    write_or_print(&content, output)?;
    Ok(report.valid)
}

// ============================================================================
// export subcommand
// ============================================================================

/// Import a form definition and re-export the canonical document
/// (normalizes formatting and drops unset optional attributes).
pub fn cmd_export(
    form_path: &str,
    output: Option<&str>,
    pretty: bool,
    verbose: u8,
) -> Result<bool, Box<dyn std::error::Error>> {
    let json = std::fs::read_to_string(form_path)?;
    let report = import_components(&json)?;

    for rejection in &report.rejected {
        eprintln!("Warning: {}", rejection);
    }

    let mut session = FormSession::new();
    session.install(report.components.clone())?;

    if verbose > 0 {
        eprintln!("Re-exporting {} components...", report.components.len());
    }

    let document = if pretty {
        session.export_pretty()?
    } else {
        session.export()?
    };

    write_or_print(&document, output)?;
    Ok(report.all_accepted())
}

// ============================================================================
// Helpers
// ============================================================================

/// Load a record file: a JSON object of field id to submitted value.
fn load_record(path: &str) -> Result<Record, Box<dyn std::error::Error>> {
    let json = std::fs::read_to_string(path)?;
    let value: serde_json::Value = serde_json::from_str(&json)?;

    match value {
        serde_json::Value::Object(record) => Ok(record),
        _ => Err(format!("Record file {} must contain a JSON object", path).into()),
    }
}

fn write_or_print(content: &str, output: Option<&str>) -> std::io::Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, content)?;
            eprintln!("Wrote {}", path);
            Ok(())
        }
        None => {
            println!("{}", content);
            Ok(())
        }
    }
}

/// Display name for a form: the file stem of its document path.
pub fn file_stem(path: &str) -> String {
    Path::new(path)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(path)
        .to_string()
}
