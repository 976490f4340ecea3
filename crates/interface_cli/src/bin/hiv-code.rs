//! HIV-Test Record Code - Command-Line Binary
//!
//! # Usage
//!
//! ```bash
//! hiv-code generate --first-name Camilo --first-surname Muñoz \
//!     --second-surname Cayun --birth-date 08-09-1987 --id 16.823.628-K
//! # CMC 080987 628-K
//!
//! hiv-code check-id 16.823.628-K --output json
//! ```
//!
//! # Environment Variables
//!
//! * `HIVCODE_LOG_LEVEL` - Log level or filter directive (default: warn)
//! * `HIVCODE_LOG_FORMAT` - `pretty` or `json` (default: pretty)
//! * `HIVCODE_OUTPUT` - `text` or `json` (default: text)
//! * `RUST_LOG` - Overrides the log level when set

use std::process::ExitCode;

use clap::Parser;

use interface_cli::{execute, logging::init_tracing, Cli, CliConfig, CliError, OutputFormat};

fn main() -> anyhow::Result<ExitCode> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = match CliConfig::from_env() {
        Ok(config) => config.with_overrides(cli.log_level.as_deref(), cli.log_format, cli.output),
        Err(error) => {
            report_error(&CliError::from(error), cli.output.unwrap_or_default())?;
            return Ok(ExitCode::FAILURE);
        }
    };

    init_tracing(&config.log_level, config.log_format);
    tracing::debug!(output = ?config.output, "configuration loaded");

    match execute(&cli.command) {
        Ok(output) => {
            println!("{}", output.render(config.output)?);
            Ok(if output.is_success() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Err(error) => {
            report_error(&error, config.output)?;
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Writes a command error in the configured output format
fn report_error(error: &CliError, output: OutputFormat) -> anyhow::Result<()> {
    tracing::debug!(error_type = error.error_type(), "command failed");

    match output {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&error.to_response())?);
        }
        OutputFormat::Text => {
            eprintln!("error: {}", error);
        }
    }
    Ok(())
}
