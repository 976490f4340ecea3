//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random test data
//! that maintains domain invariants.

use chrono::{Duration, NaiveDate};
use core_kernel::check_character;
use proptest::prelude::*;

/// Strategy for generating RUN bodies (1 to 8 digits, no leading zero)
pub fn national_id_body_strategy() -> impl Strategy<Value = String> {
    "[1-9][0-9]{0,7}".prop_map(|s| s)
}

/// Strategy for generating valid RUNs in plain `body-check` form
pub fn valid_national_id_strategy() -> impl Strategy<Value = String> {
    national_id_body_strategy().prop_map(|body| {
        let check = check_character(&body).expect("Generated non-numeric body");
        format!("{}-{}", body, check)
    })
}

/// Strategy for generating (body, wrong check character) pairs
pub fn wrong_check_national_id_strategy() -> impl Strategy<Value = String> {
    (national_id_body_strategy(), 0usize..10usize).prop_map(|(body, offset)| {
        let check = check_character(&body).expect("Generated non-numeric body");
        let wrong = "0123456789K"
            .chars()
            .filter(|c| *c != check)
            .nth(offset)
            .expect("Ten alternatives exist");
        format!("{}-{}", body, wrong)
    })
}

/// Adds thousands dots to a plain RUN: `16823628-K` to `16.823.628-K`
pub fn dotted(plain: &str) -> String {
    let (body, check) = plain.split_once('-').unwrap_or((plain, ""));
    let digits: Vec<char> = body.chars().collect();
    let mut out = String::new();
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(*c);
    }
    format!("{}-{}", out, check)
}

/// Strategy for generating valid RUNs written in any accepted notation
pub fn noisy_national_id_strategy() -> impl Strategy<Value = (String, String)> {
    (
        valid_national_id_strategy(),
        prop_oneof![Just('-'), Just('\u{2014}'), Just('\u{2013}'), Just('_')],
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(|(plain, dash, with_dots, lowercase)| {
            let mut noisy = if with_dots { dotted(&plain) } else { plain.clone() };
            noisy = noisy.replace('-', &dash.to_string());
            if lowercase {
                noisy = noisy.to_lowercase();
            }
            (plain, format!(" {} ", noisy))
        })
}

/// Strategy for generating calendar dates between 1900 and 2099
pub fn birth_date_strategy() -> impl Strategy<Value = NaiveDate> {
    (0i64..73_049i64).prop_map(|days| {
        NaiveDate::from_ymd_opt(1900, 1, 1).unwrap() + Duration::days(days)
    })
}

/// Strategy for generating valid `DD-MM-YYYY` birth date text
pub fn birth_date_text_strategy() -> impl Strategy<Value = String> {
    birth_date_strategy().prop_map(|date| date.format("%d-%m-%Y").to_string())
}

/// Strategy for generating arbitrary text with the date shape
///
/// Most outputs are not real dates (month 13, day 00, Feb-30).
pub fn date_shaped_text_strategy() -> impl Strategy<Value = String> {
    "[0-9]{2}-[0-9]{2}-[0-9]{4}".prop_map(|s| s)
}

/// Strategy for generating names, including accented letters and Ñ
pub fn name_strategy() -> impl Strategy<Value = String> {
    "[A-ZÁÉÍÓÚÑ][a-záéíóúñ]{2,10}".prop_map(|s| s)
}

/// Strategy for generating names with leading non-letter noise
pub fn noisy_name_strategy() -> impl Strategy<Value = String> {
    ("[ 0-9'.-]{0,3}", name_strategy()).prop_map(|(noise, name)| format!("{}{}", noise, name))
}

/// Strategy for generating a second surname that may be empty
pub fn optional_surname_strategy() -> impl Strategy<Value = String> {
    prop_oneof![Just(String::new()), Just("  ".to_string()), name_strategy()]
}
