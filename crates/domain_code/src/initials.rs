//! Initials extraction
//!
//! The first segment of a record code is a three-character mnemonic built
//! from the first name, the first surname and the second surname. Each slot
//! takes the first letter of its field, upper-cased, skipping any leading
//! digits, punctuation or whitespace. Accented letters and Ñ are kept as-is.
//!
//! Only the second-surname slot can hold the `#` placeholder: when the person
//! has no second surname, or the field holds no letter at all.

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Placeholder for a missing second surname
pub const NO_SECOND_SURNAME: char = '#';

/// Name fields of a patient, as captured by the intake form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameParts {
    pub first_name: String,
    pub first_surname: String,
    /// Ignored when `has_no_second_surname` is set
    pub second_surname: Option<String>,
    pub has_no_second_surname: bool,
}

impl NameParts {
    /// Creates name parts for a person with two surnames
    pub fn new(
        first_name: impl Into<String>,
        first_surname: impl Into<String>,
        second_surname: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            first_surname: first_surname.into(),
            second_surname: Some(second_surname.into()),
            has_no_second_surname: false,
        }
    }

    /// Creates name parts for a person without a second surname
    pub fn without_second_surname(
        first_name: impl Into<String>,
        first_surname: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            first_surname: first_surname.into(),
            second_surname: None,
            has_no_second_surname: true,
        }
    }

    /// Returns the three-character initials for these names
    pub fn initials(&self) -> String {
        extract_initials(
            &self.first_name,
            &self.first_surname,
            self.second_surname.as_deref().unwrap_or(""),
            self.has_no_second_surname,
        )
    }
}

/// Builds the initials segment of a record code
///
/// A first name or first surname without any letter contributes nothing, so
/// the result is shorter than three characters. Callers are expected to
/// reject such names before assembling a code.
///
/// A second surname with no letter yields `#` even when the caller did not
/// flag it as absent. That masks an incomplete form and is logged as a
/// warning.
pub fn extract_initials(
    first_name: &str,
    first_surname: &str,
    second_surname: &str,
    has_no_second_surname: bool,
) -> String {
    let mut initials = String::with_capacity(3);
    initials.extend(first_letter(first_name));
    initials.extend(first_letter(first_surname));

    let third = if has_no_second_surname {
        NO_SECOND_SURNAME
    } else {
        first_letter(second_surname).unwrap_or_else(|| {
            warn!("second surname has no letter but was not flagged absent, using placeholder");
            NO_SECOND_SURNAME
        })
    };
    initials.push(third);

    initials
}

/// Returns the first alphabetic character of a field, upper-cased
///
/// Letters whose upper case expands to several characters (ß) keep the first.
pub fn first_letter(field: &str) -> Option<char> {
    field
        .chars()
        .find(|c| c.is_alphabetic())
        .and_then(|c| c.to_uppercase().next())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_initials() {
        assert_eq!(extract_initials("Camilo", "Muñoz", "Cayun", false), "CMC");
    }

    #[test]
    fn test_flagged_second_surname_uses_placeholder() {
        assert_eq!(extract_initials("Camilo", "Muñoz", "", true), "CM#");
        assert_eq!(extract_initials("Camilo", "Muñoz", "Cayun", true), "CM#");
    }

    #[test]
    fn test_empty_unflagged_second_surname_uses_placeholder() {
        assert_eq!(extract_initials("Camilo", "Muñoz", "", false), "CM#");
        assert_eq!(extract_initials("Camilo", "Muñoz", " 42-", false), "CM#");
    }

    #[test]
    fn test_keeps_accents_and_enye() {
        assert_eq!(extract_initials("álvaro", "ñuñez", "éter", false), "ÁÑÉ");
    }

    #[test]
    fn test_skips_leading_non_letters() {
        assert_eq!(extract_initials("  'camilo", "1muñoz", "-de la cruz", false), "CMD");
    }

    #[test]
    fn test_letterless_first_name_contributes_nothing() {
        assert_eq!(extract_initials("123", "Muñoz", "Cayun", false), "MC");
    }

    #[test]
    fn test_multi_char_uppercase_keeps_first() {
        assert_eq!(first_letter("ßtraße"), Some('S'));
    }

    #[test]
    fn test_name_parts_initials() {
        assert_eq!(NameParts::new("Camilo", "Muñoz", "Cayun").initials(), "CMC");
        assert_eq!(
            NameParts::without_second_surname("Camilo", "Muñoz").initials(),
            "CM#"
        );
    }

    #[test]
    fn test_name_parts_flag_overrides_value() {
        let mut names = NameParts::new("Camilo", "Muñoz", "Cayun");
        names.has_no_second_surname = true;
        assert_eq!(names.initials(), "CM#");
    }
}
