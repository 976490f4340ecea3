//! Code assembly
//!
//! A record code has three space-separated segments:
//!
//! ```text
//! CMC 080987 628-K
//! │   │      └── last three RUN digits and check character, or ABC-D
//! │   └───────── birth date as DDMMYY
//! └───────────── initials of first name, first surname, second surname
//! ```
//!
//! Assembly is atomic: it returns a complete code or the first error met.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use core_kernel::{format_for_code, to_short_form, CoreError, Field};

use crate::initials::extract_initials;

/// Identity segment used when the patient has no identity number on file
pub const NO_NATIONAL_ID: &str = "ABC-D";

/// A fully assembled record code
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GeneratedCode {
    initials: String,
    short_date: String,
    id_part: String,
}

impl GeneratedCode {
    /// Returns the initials segment
    pub fn initials(&self) -> &str {
        &self.initials
    }

    /// Returns the `DDMMYY` birth date segment
    pub fn short_date(&self) -> &str {
        &self.short_date
    }

    /// Returns the identity segment (`NNN-D` or `ABC-D`)
    pub fn id_part(&self) -> &str {
        &self.id_part
    }

    /// Returns true if the code was built without an identity number
    pub fn is_without_national_id(&self) -> bool {
        self.id_part == NO_NATIONAL_ID
    }
}

impl fmt::Display for GeneratedCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.initials, self.short_date, self.id_part)
    }
}

impl PartialEq<&str> for GeneratedCode {
    fn eq(&self, other: &&str) -> bool {
        self.to_string() == *other
    }
}

/// Generates the record code for a patient
///
/// # Arguments
///
/// * `second_surname` - ignored when `has_no_second_surname` is set
/// * `birth_date` - `DD-MM-YYYY` text
/// * `has_no_id` - use the fixed `ABC-D` segment instead of an identity number
/// * `id` - identity number in any accepted notation; required unless `has_no_id`
///
/// # Errors
///
/// * `CoreError::Format` if the birth date is not a real `DD-MM-YYYY` date
/// * `CoreError::Identity` if an identity number is required and is absent,
///   malformed, or has a wrong check character
pub fn generate_code(
    first_name: &str,
    first_surname: &str,
    second_surname: &str,
    has_no_second_surname: bool,
    birth_date: &str,
    has_no_id: bool,
    id: Option<&str>,
) -> Result<GeneratedCode, CoreError> {
    let initials = extract_initials(
        first_name,
        first_surname,
        second_surname,
        has_no_second_surname,
    );
    let short_date = to_short_form(birth_date)?;

    let id_part = if has_no_id {
        NO_NATIONAL_ID.to_string()
    } else {
        let id = id.ok_or(CoreError::identity(Field::NationalId))?;
        format_for_code(id)?
    };

    debug!(has_no_id, has_no_second_surname, "record code assembled");

    Ok(GeneratedCode {
        initials,
        short_date,
        id_part,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_with_national_id() {
        let code = generate_code(
            "Camilo", "Muñoz", "Cayun", false, "08-09-1987", false, Some("16.823.628-K"),
        )
        .unwrap();

        assert_eq!(code.to_string(), "CMC 080987 628-K");
        assert_eq!(code.initials(), "CMC");
        assert_eq!(code.short_date(), "080987");
        assert_eq!(code.id_part(), "628-K");
        assert!(!code.is_without_national_id());
    }

    #[test]
    fn test_code_without_national_id() {
        let code =
            generate_code("Camilo", "Muñoz", "Cayun", false, "08-09-1987", true, None).unwrap();
        assert_eq!(code, "CMC 080987 ABC-D");
        assert!(code.is_without_national_id());
    }

    #[test]
    fn test_no_id_flag_ignores_supplied_id() {
        let code = generate_code(
            "Camilo", "Muñoz", "", true, "08-09-1987", true, Some("not a run"),
        )
        .unwrap();
        assert_eq!(code, "CM# 080987 ABC-D");
    }

    #[test]
    fn test_missing_id_is_identity_error() {
        let err =
            generate_code("Camilo", "Muñoz", "Cayun", false, "08-09-1987", false, None).unwrap_err();
        assert_eq!(err, CoreError::identity(Field::NationalId));
    }

    #[test]
    fn test_date_is_checked_before_id() {
        let err = generate_code(
            "Camilo", "Muñoz", "Cayun", false, "30-02-2020", false, Some("16.823.628-1"),
        )
        .unwrap_err();
        assert_eq!(err, CoreError::format(Field::BirthDate));
    }
}
