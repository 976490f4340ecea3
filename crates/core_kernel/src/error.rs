//! Core error types used across the system
//!
//! Code generation can only fail in two ways: the birth date does not parse
//! as a real `DD-MM-YYYY` date, or the identity number fails its shape or
//! check-digit verification. Errors name the offending field but never carry
//! the raw personal data that was submitted.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Input field an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    BirthDate,
    NationalId,
}

impl Field {
    /// Returns the stable machine-readable name of the field
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::BirthDate => "birth_date",
            Field::NationalId => "national_id",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Discriminant of a `CoreError`, for callers that only branch on the kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Format,
    Identity,
}

/// Core error type for the kernel
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// The text is not a real calendar date in `DD-MM-YYYY` form
    #[error("Format error: {field} must be a real DD-MM-YYYY date")]
    Format { field: Field },

    /// The identity number has the wrong shape or a wrong check character
    #[error("Identity error: {field} failed shape or check digit verification")]
    Identity { field: Field },
}

impl CoreError {
    pub fn format(field: Field) -> Self {
        CoreError::Format { field }
    }

    pub fn identity(field: Field) -> Self {
        CoreError::Identity { field }
    }

    /// Returns the field the error refers to
    pub fn field(&self) -> Field {
        match self {
            CoreError::Format { field } | CoreError::Identity { field } => *field,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            CoreError::Format { .. } => ErrorKind::Format,
            CoreError::Identity { .. } => ErrorKind::Identity,
        }
    }
}
