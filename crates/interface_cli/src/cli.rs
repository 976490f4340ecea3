//! Command-line argument definitions

use clap::{Args, Parser, Subcommand};

use crate::config::{LogFormat, OutputFormat};

#[derive(Debug, Parser)]
#[command(
    name = "hiv-code",
    version,
    about = "Generate and check HIV-test record codes",
    long_about = "Generate the standardized HIV-test record code from a patient's names,\n\
                  birth date (DD-MM-YYYY) and RUN, or check individual fields."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Result output format (overrides HIVCODE_OUTPUT).
    #[arg(long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Log level or filter directive (overrides HIVCODE_LOG_LEVEL).
    #[arg(long = "log-level", value_name = "LEVEL", global = true)]
    pub log_level: Option<String>,

    /// Log output format (overrides HIVCODE_LOG_FORMAT).
    #[arg(long = "log-format", value_enum, global = true)]
    pub log_format: Option<LogFormat>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate the record code for a patient.
    Generate(GenerateArgs),

    /// Print the three-character initials for a name.
    Initials(InitialsArgs),

    /// Check a DD-MM-YYYY birth date and print its short form.
    CheckDate {
        #[arg(value_name = "DATE")]
        date: String,
    },

    /// Check a RUN and print its normalized form and code suffix.
    CheckId {
        #[arg(value_name = "RUN")]
        id: String,
    },
}

#[derive(Debug, Args)]
pub struct GenerateArgs {
    #[arg(long)]
    pub first_name: String,

    #[arg(long)]
    pub first_surname: String,

    #[arg(long, conflicts_with = "no_second_surname")]
    pub second_surname: Option<String>,

    /// The patient has no second surname.
    #[arg(long)]
    pub no_second_surname: bool,

    /// Birth date as DD-MM-YYYY.
    #[arg(long, value_name = "DATE")]
    pub birth_date: String,

    /// RUN, with or without dots (e.g. 16.823.628-K).
    #[arg(long, value_name = "RUN", conflicts_with = "no_id")]
    pub id: Option<String>,

    /// The patient has no RUN on file; the code ends in ABC-D.
    #[arg(long)]
    pub no_id: bool,
}

#[derive(Debug, Args)]
pub struct InitialsArgs {
    #[arg(value_name = "FIRST_NAME")]
    pub first_name: String,

    #[arg(value_name = "FIRST_SURNAME")]
    pub first_surname: String,

    #[arg(value_name = "SECOND_SURNAME")]
    pub second_surname: Option<String>,

    /// The person has no second surname.
    #[arg(long)]
    pub no_second_surname: bool,
}
