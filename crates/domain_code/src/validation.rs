//! Request validation rules
//!
//! This module checks a `CodeRequest` the way the intake form does before a
//! code is generated, collecting every problem instead of stopping at the
//! first one so the form can show them together.
//!
//! # Validation Rules
//!
//! Applied in this order, which is also the order messages are reported in:
//!
//! 1. First name, first surname and birth date are filled in; the second
//!    surname is filled in unless flagged absent
//! 2. First name and first surname contain at least one letter
//! 3. Birth date is a real `DD-MM-YYYY` date
//! 4. Identity number is filled in unless flagged absent, and passes shape
//!    and check-digit verification
//!
//! A second surname or identity number that is filled in but flagged absent
//! is ignored with a warning.

use validator::Validate;

use core_kernel::{is_valid, is_valid_date};

use crate::initials::first_letter;
use crate::request::CodeRequest;

/// Order in which field-level presence errors are reported
const FIELD_ORDER: [&str; 3] = ["first_name", "first_surname", "birth_date"];

/// Errors and warnings collected for one request
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// False once any error is recorded
    pub is_valid: bool,
    /// Messages that block code generation, in form order
    pub errors: Vec<String>,
    /// Fields that were filled in but will be ignored
    pub warnings: Vec<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn fail(errors: Vec<String>) -> Self {
        Self {
            is_valid: false,
            errors,
            warnings: Vec::new(),
        }
    }

    pub fn add_error(&mut self, error: impl Into<String>) {
        self.errors.push(error.into());
        self.is_valid = false;
    }

    pub fn add_warning(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }

    /// Appends the messages of a later rule stage, keeping their order
    pub fn merge(&mut self, other: ValidationResult) {
        self.is_valid &= other.is_valid;
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::ok()
    }
}

/// Validator for code requests
///
/// # Examples
///
/// ```rust
/// use domain_code::request::CodeRequest;
/// use domain_code::validation::RequestValidator;
///
/// let request = CodeRequest::builder()
///     .first_name("Camilo")
///     .first_surname("Muñoz")
///     .without_second_surname()
///     .birth_date("30-02-2020")
///     .without_national_id()
///     .build()
///     .unwrap();
///
/// let result = RequestValidator::validate(&request);
/// assert!(!result.is_valid);
/// ```
pub struct RequestValidator;

impl RequestValidator {
    /// Runs every rule in form order and collects all messages
    pub fn validate(request: &CodeRequest) -> ValidationResult {
        let request = request.trimmed();
        let mut result = Self::check_presence(&request);
        result.merge(Self::check_birth_date(&request));
        result.merge(Self::check_national_id_presence(&request));

        if !request.has_no_national_id {
            if let Some(id) = request.national_id.as_deref().filter(|id| !id.is_empty()) {
                if !is_valid(id) {
                    result.add_error("national identity number is invalid");
                }
            }
        }

        Self::check_ignored_fields(&request, &mut result);
        result
    }

    /// Checks that the names and birth date are filled in and the names
    /// carry a letter
    pub fn check_presence(request: &CodeRequest) -> ValidationResult {
        let mut result = ValidationResult::ok();

        if let Err(errors) = request.validate() {
            let mut missing: Vec<(usize, String)> = errors
                .field_errors()
                .into_iter()
                .flat_map(|(field, field_errors)| {
                    let position = FIELD_ORDER
                        .iter()
                        .position(|name| *name == &*field)
                        .unwrap_or(FIELD_ORDER.len());
                    field_errors.iter().map(move |error| {
                        let message = error
                            .message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| format!("{} is invalid", field));
                        (position, message)
                    })
                })
                .collect();
            missing.sort();

            for (_, message) in missing {
                result.add_error(message);
            }
        }

        if !request.has_no_second_surname
            && request.second_surname.as_deref().map_or(true, str::is_empty)
        {
            result.add_error("second surname is required unless marked as absent");
        }

        if !request.first_name.is_empty() && first_letter(&request.first_name).is_none() {
            result.add_error("first name must contain at least one letter");
        }
        if !request.first_surname.is_empty() && first_letter(&request.first_surname).is_none() {
            result.add_error("first surname must contain at least one letter");
        }

        result
    }

    /// Checks that a filled-in birth date is a real `DD-MM-YYYY` date
    pub fn check_birth_date(request: &CodeRequest) -> ValidationResult {
        if request.birth_date.is_empty() || is_valid_date(&request.birth_date) {
            ValidationResult::ok()
        } else {
            ValidationResult::fail(vec![
                "birth date must be a real date in DD-MM-YYYY format".to_string(),
            ])
        }
    }

    /// Checks that an identity number is given unless flagged absent
    pub fn check_national_id_presence(request: &CodeRequest) -> ValidationResult {
        if request.has_no_national_id
            || request.national_id.as_deref().is_some_and(|id| !id.is_empty())
        {
            ValidationResult::ok()
        } else {
            ValidationResult::fail(vec![
                "national identity number is required unless marked as absent".to_string(),
            ])
        }
    }

    fn check_ignored_fields(request: &CodeRequest, result: &mut ValidationResult) {
        if request.has_no_second_surname
            && request.second_surname.as_deref().is_some_and(|s| !s.is_empty())
        {
            result.add_warning("second surname is ignored because it is marked as absent");
        }

        if request.has_no_national_id
            && request.national_id.as_deref().is_some_and(|id| !id.is_empty())
        {
            result.add_warning("national identity number is ignored because it is marked as absent");
        }
    }
}
