use clap::Parser;
use form_builder::cli::commands::file_stem;
use form_builder::cli::config::{AppConfig, Cli, Commands, load_config};

// ============================================================================
// CLI Argument Parsing Tests
// ============================================================================

#[test]
fn cli_parse_check() {
    let cli = Cli::parse_from(["form-builder", "check", "--form", "contact.json"]);
    match cli.command {
        Commands::Check { form } => assert_eq!(form, "contact.json"),
        _ => panic!("Expected Check command"),
    }
    assert_eq!(cli.verbose, 0);
}

#[test]
fn cli_parse_validate_minimal() {
    let cli = Cli::parse_from([
        "form-builder",
        "validate",
        "--form",
        "contact.json",
        "--record",
        "submission.json",
    ]);
    match cli.command {
        Commands::Validate {
            form,
            record,
            format,
            output,
        } => {
            assert_eq!(form, "contact.json");
            assert_eq!(record, "submission.json");
            assert!(format.is_none());
            assert!(output.is_none());
        }
        _ => panic!("Expected Validate command"),
    }
}

#[test]
fn cli_parse_validate_all_args() {
    let cli = Cli::parse_from([
        "form-builder",
        "validate",
        "--form",
        "contact.json",
        "--record",
        "submission.json",
        "--format",
        "json",
        "-o",
        "report.json",
        "-vv",
    ]);
    match cli.command {
        Commands::Validate { format, output, .. } => {
            assert_eq!(format.as_deref(), Some("json"));
            assert_eq!(output.as_deref(), Some("report.json"));
        }
        _ => panic!("Expected Validate command"),
    }
    assert_eq!(cli.verbose, 2);
}

#[test]
fn cli_parse_export() {
    let cli = Cli::parse_from([
        "form-builder",
        "export",
        "--form",
        "contact.json",
        "--pretty",
        "false",
    ]);
    match cli.command {
        Commands::Export {
            form,
            output,
            pretty,
        } => {
            assert_eq!(form, "contact.json");
            assert!(output.is_none());
            assert!(!pretty);
        }
        _ => panic!("Expected Export command"),
    }
}

#[test]
fn cli_export_pretty_defaults_on() {
    let cli = Cli::parse_from(["form-builder", "export", "--form", "contact.json"]);
    match cli.command {
        Commands::Export { pretty, .. } => assert!(pretty),
        _ => panic!("Expected Export command"),
    }
}

// ============================================================================
// Config File Tests
// ============================================================================

#[test]
fn config_defaults_when_file_missing() {
    let config = load_config(Some("does-not-exist.yaml"));
    assert_eq!(config.validate.format, "console");
    assert!(config.validate.output.is_none());
    assert!(config.trace.file.is_none());
}

#[test]
fn config_parses_yaml() {
    let yaml = r#"
validate:
  format: json
  output: report.json
trace:
  file: session-trace.jsonl
"#;

    let config: AppConfig = serde_yaml::from_str(yaml).expect("parse config");
    assert_eq!(config.validate.format, "json");
    assert_eq!(config.validate.output.as_deref(), Some("report.json"));
    assert_eq!(config.trace.file.as_deref(), Some("session-trace.jsonl"));
}

#[test]
fn config_partial_yaml_fills_defaults() {
    let yaml = r#"
trace:
  file: trace.jsonl
"#;

    let config: AppConfig = serde_yaml::from_str(yaml).expect("parse config");
    assert_eq!(config.validate.format, "console");
    assert_eq!(config.trace.file.as_deref(), Some("trace.jsonl"));
}

// ============================================================================
// Helpers
// ============================================================================

#[test]
fn file_stem_strips_directory_and_extension() {
    assert_eq!(file_stem("forms/contact.json"), "contact");
    assert_eq!(file_stem("contact.json"), "contact");
    assert_eq!(file_stem("contact"), "contact");
}
