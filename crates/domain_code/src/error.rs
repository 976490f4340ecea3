//! Code domain errors
//!
//! Assembly itself only fails with the kernel's format or identity errors.
//! Request intake adds the presence and consistency failures a form would
//! report before assembly is attempted.

use thiserror::Error;

use core_kernel::{CoreError, ErrorKind};

/// Errors that can occur in the code domain
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodeError {
    /// Birth date or identity number rejected by the kernel
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A required builder field was never set
    #[error("Missing required field: {0}")]
    MissingField(String),

    /// Request intake validation failed
    #[error("Request validation failed: {0}")]
    ValidationFailed(String),
}

impl CodeError {
    /// Creates a MissingField error
    pub fn missing(field: impl Into<String>) -> Self {
        CodeError::MissingField(field.into())
    }

    /// Creates a ValidationFailed error from validation errors
    pub fn validation_failed(errors: Vec<String>) -> Self {
        CodeError::ValidationFailed(errors.join("; "))
    }

    /// Returns the kernel error kind, if this is a format or identity error
    pub fn core_kind(&self) -> Option<ErrorKind> {
        match self {
            CodeError::Core(err) => Some(err.kind()),
            _ => None,
        }
    }
}
