//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for record codes that give
//! more meaningful error messages than standard assertions.

use core_kernel::{CoreError, ErrorKind, Field};
use domain_code::{CodeError, GeneratedCode, NO_NATIONAL_ID, NO_SECOND_SURNAME};

/// Asserts that a code has the three-segment layout
///
/// Checks: three initials (letters or `#` in the last slot), six date
/// digits, and either `NNN-D` or the fixed `ABC-D` identity segment.
///
/// # Panics
///
/// Panics with the offending segment if any part of the layout is wrong
pub fn assert_code_layout(code: &GeneratedCode) {
    let text = code.to_string();
    let segments: Vec<&str> = text.split(' ').collect();
    assert_eq!(segments.len(), 3, "Expected three segments in {:?}", text);

    let initials: Vec<char> = code.initials().chars().collect();
    assert_eq!(initials.len(), 3, "Expected three initials, got {:?}", code.initials());
    assert!(
        initials[..2].iter().all(|c| c.is_alphabetic() && !c.is_lowercase()),
        "Expected upper-case leading initials, got {:?}",
        code.initials()
    );
    assert!(
        initials[2] == NO_SECOND_SURNAME || (initials[2].is_alphabetic() && !initials[2].is_lowercase()),
        "Expected letter or placeholder as third initial, got {:?}",
        initials[2]
    );

    let short_date = code.short_date();
    assert!(
        short_date.len() == 6 && short_date.bytes().all(|b| b.is_ascii_digit()),
        "Expected six date digits, got {:?}",
        short_date
    );

    let id_part = code.id_part();
    if id_part != NO_NATIONAL_ID {
        let (digits, check) = id_part
            .split_once('-')
            .unwrap_or_else(|| panic!("Expected NNN-D identity segment, got {:?}", id_part));
        assert!(
            digits.len() == 3 && digits.bytes().all(|b| b.is_ascii_digit()),
            "Expected three identity digits, got {:?}",
            digits
        );
        assert!(
            check.len() == 1 && check.chars().all(|c| c.is_ascii_digit() || c == 'K'),
            "Expected check character, got {:?}",
            check
        );
    }
}

/// Asserts that a result failed with a format error on the birth date
pub fn assert_format_error<T: std::fmt::Debug>(result: Result<T, CoreError>) {
    match result {
        Err(err) => {
            assert_eq!(err.kind(), ErrorKind::Format, "Expected format error, got {}", err);
            assert_eq!(err.field(), Field::BirthDate);
        }
        Ok(value) => panic!("Expected format error, got {:?}", value),
    }
}

/// Asserts that a result failed with an identity error on the RUN
pub fn assert_identity_error<T: std::fmt::Debug>(result: Result<T, CoreError>) {
    match result {
        Err(err) => {
            assert_eq!(err.kind(), ErrorKind::Identity, "Expected identity error, got {}", err);
            assert_eq!(err.field(), Field::NationalId);
        }
        Ok(value) => panic!("Expected identity error, got {:?}", value),
    }
}

/// Asserts that request intake failed validation with the given message
pub fn assert_validation_message<T: std::fmt::Debug>(result: Result<T, CodeError>, message: &str) {
    match result {
        Err(CodeError::ValidationFailed(errors)) => assert!(
            errors.contains(message),
            "Expected {:?} among validation errors {:?}",
            message,
            errors
        ),
        other => panic!("Expected validation failure, got {:?}", other),
    }
}
