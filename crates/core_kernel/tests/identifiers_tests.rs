//! Tests for RUN normalization and check-digit verification

use core_kernel::{check_character, format_for_code, is_valid, last_three_digits, normalize, NationalId};

mod normalization {
    use super::*;

    #[test]
    fn test_notation_variants_agree() {
        let expected = "16823628-K";
        for text in [
            "16.823.628-K",
            "16.823.628-k",
            "16823628-K",
            "16 823 628 - k",
            "16.823.628\u{2014}K",
            "16.823.628\u{2013}K",
            "16.823.628_K",
        ] {
            assert_eq!(normalize(text), expected, "{:?}", text);
            assert!(is_valid(text), "{:?} should validate", text);
        }
    }
}

mod check_digit {
    use super::*;

    #[test]
    fn test_weights_cycle_after_six_digits() {
        // 8*2 + 7*3 + 6*4 + 5*5 + 4*6 + 3*7 + 2*2 + 1*3 = 138, 138 % 11 = 6, 11 - 6 = 5
        assert_eq!(check_character("12345678"), Some('5'));
    }

    #[test]
    fn test_remainder_zero_maps_to_zero() {
        // 11 - 0 = 11 -> '0'
        assert_eq!(check_character("0"), Some('0'));
    }

    #[test]
    fn test_remainder_one_maps_to_k() {
        assert_eq!(check_character("16823628"), Some('K'));
    }

    #[test]
    fn test_wrong_check_character_is_invalid() {
        assert!(!is_valid("16.823.628-1"));
        assert!(format_for_code("16.823.628-1").is_err());
    }
}

mod code_suffix {
    use super::*;

    #[test]
    fn test_suffix_uses_last_three_digits() {
        assert_eq!(format_for_code("16.823.628-K").unwrap(), "628-K");
        assert_eq!(last_three_digits("16.823.628"), "628");
    }

    #[test]
    fn test_short_bodies_are_zero_padded() {
        assert_eq!(format_for_code("21-3").unwrap(), "021-3");
        assert_eq!(last_three_digits("5"), "005");
    }

    #[test]
    fn test_parsed_id_agrees_with_free_functions() {
        let id = NationalId::parse("12.345.678-5").unwrap();
        assert_eq!(id.code_suffix(), format_for_code("12.345.678-5").unwrap());
        assert_eq!(id.to_string(), normalize("12.345.678-5"));
    }
}
