//! CLI error handling

use serde::Serialize;
use thiserror::Error;

use core_kernel::ErrorKind;
use domain_code::CodeError;

/// CLI error types
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Code(#[from] CodeError),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Output error: {0}")]
    Output(#[from] serde_json::Error),
}

/// Error body written in JSON output mode
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,
}

impl CliError {
    /// Returns the machine-readable error type
    pub fn error_type(&self) -> &'static str {
        match self {
            CliError::Code(CodeError::Core(err)) => match err.kind() {
                ErrorKind::Format => "format_error",
                ErrorKind::Identity => "identity_error",
            },
            CliError::Code(CodeError::MissingField(_)) => "missing_field",
            CliError::Code(CodeError::ValidationFailed(_)) => "validation_error",
            CliError::Config(_) => "config_error",
            CliError::Output(_) => "output_error",
        }
    }

    /// Converts the error into its JSON body
    pub fn to_response(&self) -> ErrorResponse {
        let details = match self {
            CliError::Code(CodeError::ValidationFailed(errors)) => {
                Some(errors.split("; ").map(str::to_string).collect())
            }
            _ => None,
        };

        ErrorResponse {
            error: self.error_type().to_string(),
            message: self.to_string(),
            details,
        }
    }
}
