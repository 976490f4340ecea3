//! Tests for birth date validation and the short form
//!
//! Tests cover the accepted shape, calendar checks and the `DDMMYY` output.

use chrono::NaiveDate;
use core_kernel::{is_valid_date, to_short_form, BirthDate, CoreError, Field};

mod shape {
    use super::*;

    #[test]
    fn test_accepts_canonical_form() {
        assert!(is_valid_date("08-09-1987"));
        assert!(is_valid_date("01-01-0001"));
        assert!(is_valid_date("31-12-9999"));
    }

    #[test]
    fn test_rejects_other_shapes() {
        for text in [
            "8-9-1987",
            "08/09/1987",
            "1987-09-08",
            "08-09-87",
            "08091987",
            "08-09-1987 ",
            "0a-09-1987",
            "",
        ] {
            assert!(!is_valid_date(text), "{:?} should be rejected", text);
        }
    }

    #[test]
    fn test_rejects_non_ascii_digits() {
        // Arabic-Indic digits are numeric but not accepted
        assert!(!is_valid_date("٠٨-٠٩-١٩٨٧"));
    }
}

mod calendar {
    use super::*;

    #[test]
    fn test_rejects_impossible_days() {
        assert!(!is_valid_date("30-02-2020"));
        assert!(!is_valid_date("31-04-2021"));
        assert!(!is_valid_date("00-01-2000"));
        assert!(!is_valid_date("15-13-2000"));
    }

    #[test]
    fn test_leap_years() {
        assert!(is_valid_date("29-02-2000"));
        assert!(is_valid_date("29-02-2024"));
        assert!(!is_valid_date("29-02-1900"));
        assert!(!is_valid_date("29-02-2023"));
    }

    #[test]
    fn test_rejects_year_zero() {
        assert!(!is_valid_date("01-01-0000"));
    }
}

mod short_form {
    use super::*;

    #[test]
    fn test_short_form_values() {
        assert_eq!(to_short_form("08-09-1987").unwrap(), "080987");
        assert_eq!(to_short_form("01-01-2000").unwrap(), "010100");
        assert_eq!(to_short_form("31-12-0005").unwrap(), "311205");
    }

    #[test]
    fn test_invalid_date_is_format_error() {
        assert_eq!(
            to_short_form("30-02-2020").unwrap_err(),
            CoreError::format(Field::BirthDate)
        );
    }

    #[test]
    fn test_birth_date_matches_free_function() {
        let date = BirthDate::parse("29-02-2024").unwrap();
        assert_eq!(date.as_date(), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
        assert_eq!(date.short_form(), to_short_form("29-02-2024").unwrap());
    }
}
