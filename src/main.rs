use clap::Parser;
use form_builder::cli::commands::{cmd_check, cmd_export, cmd_validate};
use form_builder::cli::config::{Cli, Commands, load_config};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref());

    match cli.command {
        Commands::Check { form } => {
            let clean = cmd_check(&form, cli.verbose)?;
            if !clean {
                std::process::exit(1);
            }
        }

        Commands::Validate {
            form,
            record,
            format,
            output,
        } => {
            // Resolve output settings: CLI > config > defaults
            let resolved_format = format.unwrap_or(config.validate.format.clone());
            let resolved_output = output.or(config.validate.output.clone());
            let passed = cmd_validate(
                &form,
                &record,
                &resolved_format,
                resolved_output.as_deref(),
                config.trace.file.as_deref(),
                cli.verbose,
            )?;
            if !passed {
                std::process::exit(1);
            }
        }

        Commands::Export {
            form,
            output,
            pretty,
        } => {
            let clean = cmd_export(&form, output.as_deref(), pretty, cli.verbose)?;
            if !clean {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
