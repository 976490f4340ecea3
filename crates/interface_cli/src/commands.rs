//! Command handlers
//!
//! Handlers never touch stdout; they return a `CommandOutput` that the binary
//! renders in the configured format.

use serde::Serialize;
use tracing::{debug, warn};

use core_kernel::{is_valid, normalize, to_short_form, format_for_code};
use domain_code::{extract_initials, CodeRequest, RequestValidator};

use crate::cli::{Command, GenerateArgs, InitialsArgs};
use crate::config::OutputFormat;
use crate::error::CliError;

/// Result of a generated code
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeOutput {
    pub code: String,
    pub initials: String,
    pub short_date: String,
    pub id_part: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

/// Result of the initials command
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InitialsOutput {
    pub initials: String,
}

/// Result of a birth date check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateCheckOutput {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_form: Option<String>,
}

/// Result of a RUN check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdCheckOutput {
    pub normalized: String,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_suffix: Option<String>,
}

/// Output of any command
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CommandOutput {
    Code(CodeOutput),
    Initials(InitialsOutput),
    DateCheck(DateCheckOutput),
    IdCheck(IdCheckOutput),
}

impl CommandOutput {
    /// Returns false for checks that found the input invalid
    pub fn is_success(&self) -> bool {
        match self {
            CommandOutput::Code(_) | CommandOutput::Initials(_) => true,
            CommandOutput::DateCheck(check) => check.valid,
            CommandOutput::IdCheck(check) => check.valid,
        }
    }

    /// Renders the output for stdout
    pub fn render(&self, format: OutputFormat) -> Result<String, CliError> {
        match format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
            OutputFormat::Text => Ok(self.render_text()),
        }
    }

    fn render_text(&self) -> String {
        match self {
            CommandOutput::Code(out) => out.code.clone(),
            CommandOutput::Initials(out) => out.initials.clone(),
            CommandOutput::DateCheck(out) => match &out.short_form {
                Some(short) => format!("valid\t{}", short),
                None => "invalid".to_string(),
            },
            CommandOutput::IdCheck(out) => match &out.code_suffix {
                Some(suffix) => format!("valid\t{}\t{}", out.normalized, suffix),
                None => format!("invalid\t{}", out.normalized),
            },
        }
    }
}

/// Dispatches a parsed command to its handler
pub fn execute(command: &Command) -> Result<CommandOutput, CliError> {
    match command {
        Command::Generate(args) => run_generate(args).map(CommandOutput::Code),
        Command::Initials(args) => Ok(CommandOutput::Initials(run_initials(args))),
        Command::CheckDate { date } => Ok(CommandOutput::DateCheck(run_check_date(date))),
        Command::CheckId { id } => Ok(CommandOutput::IdCheck(run_check_id(id))),
    }
}

/// Builds a request from the arguments and generates its code
pub fn run_generate(args: &GenerateArgs) -> Result<CodeOutput, CliError> {
    let mut builder = CodeRequest::builder()
        .first_name(args.first_name.as_str())
        .first_surname(args.first_surname.as_str())
        .birth_date(args.birth_date.as_str());
    if let Some(second) = &args.second_surname {
        builder = builder.second_surname(second.as_str());
    }
    if args.no_second_surname {
        builder = builder.without_second_surname();
    }
    if let Some(id) = &args.id {
        builder = builder.national_id(id.as_str());
    }
    if args.no_id {
        builder = builder.without_national_id();
    }
    let request = builder.build()?;

    let warnings = RequestValidator::validate(&request).warnings;
    for warning in &warnings {
        warn!(%warning, "request field ignored");
    }

    let code = request.generate()?;
    debug!(no_id = code.is_without_national_id(), "code generated");

    Ok(CodeOutput {
        code: code.to_string(),
        initials: code.initials().to_string(),
        short_date: code.short_date().to_string(),
        id_part: code.id_part().to_string(),
        warnings,
    })
}

pub fn run_initials(args: &InitialsArgs) -> InitialsOutput {
    InitialsOutput {
        initials: extract_initials(
            &args.first_name,
            &args.first_surname,
            args.second_surname.as_deref().unwrap_or(""),
            args.no_second_surname,
        ),
    }
}

pub fn run_check_date(date: &str) -> DateCheckOutput {
    let short_form = to_short_form(date.trim()).ok();
    DateCheckOutput {
        valid: short_form.is_some(),
        short_form,
    }
}

pub fn run_check_id(id: &str) -> IdCheckOutput {
    IdCheckOutput {
        normalized: normalize(id),
        valid: is_valid(id),
        code_suffix: format_for_code(id).ok(),
    }
}
