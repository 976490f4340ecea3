//! Code requests
//!
//! A `CodeRequest` holds the raw field values an intake form collects for one
//! patient. It can be built fluently, deserialized from JSON, validated as a
//! whole, and turned into a `GeneratedCode`.

use serde::{Deserialize, Serialize};
use validator::Validate;

use core_kernel::{is_valid_date, CoreError, Field};

use crate::code::{generate_code, GeneratedCode};
use crate::error::CodeError;
use crate::validation::RequestValidator;

/// Field values captured for one patient
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct CodeRequest {
    #[validate(length(min = 1, message = "first name is required"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "first surname is required"))]
    pub first_surname: String,
    #[serde(default)]
    pub second_surname: Option<String>,
    #[serde(default)]
    pub has_no_second_surname: bool,
    /// Birth date as `DD-MM-YYYY`
    #[validate(length(min = 1, message = "birth date is required"))]
    pub birth_date: String,
    #[serde(default)]
    pub national_id: Option<String>,
    #[serde(default)]
    pub has_no_national_id: bool,
}

impl CodeRequest {
    /// Starts a fluent builder
    pub fn builder() -> CodeRequestBuilder {
        CodeRequestBuilder::new()
    }

    /// Returns a copy with surrounding whitespace removed from every field
    pub fn trimmed(&self) -> Self {
        Self {
            first_name: self.first_name.trim().to_string(),
            first_surname: self.first_surname.trim().to_string(),
            second_surname: self.second_surname.as_deref().map(|s| s.trim().to_string()),
            has_no_second_surname: self.has_no_second_surname,
            birth_date: self.birth_date.trim().to_string(),
            national_id: self.national_id.as_deref().map(|s| s.trim().to_string()),
            has_no_national_id: self.has_no_national_id,
        }
    }

    /// Validates the request and assembles its code
    ///
    /// # Errors
    ///
    /// Rules are applied in form order and the first failing stage is
    /// returned:
    ///
    /// * `CodeError::ValidationFailed` if a name or the birth date is empty or
    ///   a name has no letter
    /// * `CodeError::Core` with a format error if the birth date is not a real
    ///   date
    /// * `CodeError::ValidationFailed` if the identity number is missing and
    ///   not flagged absent
    /// * `CodeError::Core` with the identity error from assembly
    pub fn generate(&self) -> Result<GeneratedCode, CodeError> {
        let request = self.trimmed();

        let presence = RequestValidator::check_presence(&request);
        if !presence.is_valid {
            return Err(CodeError::validation_failed(presence.errors));
        }
        if !is_valid_date(&request.birth_date) {
            return Err(CoreError::format(Field::BirthDate).into());
        }
        let identity = RequestValidator::check_national_id_presence(&request);
        if !identity.is_valid {
            return Err(CodeError::validation_failed(identity.errors));
        }

        let code = generate_code(
            &request.first_name,
            &request.first_surname,
            request.second_surname.as_deref().unwrap_or(""),
            request.has_no_second_surname,
            &request.birth_date,
            request.has_no_national_id,
            request.national_id.as_deref(),
        )?;
        Ok(code)
    }
}

/// Builder for code requests
///
/// # Example
///
/// ```rust
/// use domain_code::request::CodeRequest;
///
/// let code = CodeRequest::builder()
///     .first_name("Camilo")
///     .first_surname("Muñoz")
///     .second_surname("Cayun")
///     .birth_date("08-09-1987")
///     .national_id("16.823.628-K")
///     .build()?
///     .generate()?;
///
/// assert_eq!(code.to_string(), "CMC 080987 628-K");
/// # Ok::<(), domain_code::CodeError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct CodeRequestBuilder {
    first_name: Option<String>,
    first_surname: Option<String>,
    second_surname: Option<String>,
    has_no_second_surname: bool,
    birth_date: Option<String>,
    national_id: Option<String>,
    has_no_national_id: bool,
}

impl CodeRequestBuilder {
    /// Creates an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the first name
    pub fn first_name(mut self, name: impl Into<String>) -> Self {
        self.first_name = Some(name.into());
        self
    }

    /// Sets the first surname
    pub fn first_surname(mut self, surname: impl Into<String>) -> Self {
        self.first_surname = Some(surname.into());
        self
    }

    /// Sets the second surname
    pub fn second_surname(mut self, surname: impl Into<String>) -> Self {
        self.second_surname = Some(surname.into());
        self
    }

    /// Marks the person as having no second surname
    pub fn without_second_surname(mut self) -> Self {
        self.has_no_second_surname = true;
        self
    }

    /// Sets the birth date (`DD-MM-YYYY`)
    pub fn birth_date(mut self, date: impl Into<String>) -> Self {
        self.birth_date = Some(date.into());
        self
    }

    /// Sets the national identity number
    pub fn national_id(mut self, id: impl Into<String>) -> Self {
        self.national_id = Some(id.into());
        self
    }

    /// Marks the person as having no identity number on file
    pub fn without_national_id(mut self) -> Self {
        self.has_no_national_id = true;
        self
    }

    /// Builds the request
    ///
    /// # Errors
    ///
    /// Returns `CodeError::MissingField` if the first name, first surname or
    /// birth date was never set. Empty values are accepted here and reported
    /// by validation instead.
    pub fn build(self) -> Result<CodeRequest, CodeError> {
        let first_name = self.first_name.ok_or_else(|| CodeError::missing("first_name"))?;
        let first_surname = self
            .first_surname
            .ok_or_else(|| CodeError::missing("first_surname"))?;
        let birth_date = self.birth_date.ok_or_else(|| CodeError::missing("birth_date"))?;

        Ok(CodeRequest {
            first_name,
            first_surname,
            second_surname: self.second_surname,
            has_no_second_surname: self.has_no_second_surname,
            birth_date,
            national_id: self.national_id,
            has_no_national_id: self.has_no_national_id,
        })
    }
}
