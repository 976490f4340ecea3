//! Birth date handling
//!
//! Birth dates arrive as fixed-width `DD-MM-YYYY` text. This module checks the
//! shape, confirms the digits name a real calendar day, and encodes the date
//! in the six-character `DDMMYY` short form used inside record codes.
//!
//! Validation and transformation are exposed separately so a caller can
//! report a bad date before attempting to assemble a code.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::{CoreError, Field};

/// Length of the `DD-MM-YYYY` textual form
const DATE_TEXT_LEN: usize = 10;

/// A validated birth date
///
/// Serializes to and from its `DD-MM-YYYY` textual form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BirthDate(NaiveDate);

impl BirthDate {
    /// Parses `DD-MM-YYYY` text into a birth date
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Format` when the text has any other shape or the
    /// digits do not form a real calendar date (Feb-30, month 13, non-leap
    /// Feb-29).
    pub fn parse(text: &str) -> Result<Self, CoreError> {
        let (day, month, year) =
            split_date_text(text).ok_or(CoreError::format(Field::BirthDate))?;

        // Year zero has no calendar meaning for a birth date
        if year == 0 {
            return Err(CoreError::format(Field::BirthDate));
        }

        NaiveDate::from_ymd_opt(year as i32, month, day)
            .map(Self)
            .ok_or(CoreError::format(Field::BirthDate))
    }

    /// Wraps an existing calendar date
    ///
    /// Returns `None` for dates outside the four-digit year range the
    /// textual form can express.
    pub fn from_date(date: NaiveDate) -> Option<Self> {
        (1..=9999).contains(&date.year()).then_some(Self(date))
    }

    /// Returns the underlying calendar date
    pub fn as_date(&self) -> NaiveDate {
        self.0
    }

    /// Returns the `DDMMYY` encoding: day, month, last two digits of the year
    pub fn short_form(&self) -> String {
        format!(
            "{:02}{:02}{:02}",
            self.0.day(),
            self.0.month(),
            self.0.year() % 100
        )
    }
}

impl fmt::Display for BirthDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}-{:02}-{:04}",
            self.0.day(),
            self.0.month(),
            self.0.year()
        )
    }
}

impl FromStr for BirthDate {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for BirthDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for BirthDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        BirthDate::parse(&s)
            .map_err(|_| serde::de::Error::custom("Invalid birth date"))
    }
}

/// Returns true if the text is exactly `DD-MM-YYYY` and names a real date
pub fn is_valid_date(text: &str) -> bool {
    BirthDate::parse(text).is_ok()
}

/// Converts `DD-MM-YYYY` text to its `DDMMYY` short form
///
/// # Errors
///
/// Returns `CoreError::Format` whenever `is_valid_date(text)` is false.
pub fn to_short_form(text: &str) -> Result<String, CoreError> {
    BirthDate::parse(text).map(|date| date.short_form())
}

/// Splits `DD-MM-YYYY` into its numeric parts, checking only the shape
fn split_date_text(text: &str) -> Option<(u32, u32, u32)> {
    let bytes = text.as_bytes();
    if bytes.len() != DATE_TEXT_LEN || bytes[2] != b'-' || bytes[5] != b'-' {
        return None;
    }

    let day = parse_digits(&text[0..2])?;
    let month = parse_digits(&text[3..5])?;
    let year = parse_digits(&text[6..10])?;
    Some((day, month, year))
}

/// Parses a run of ASCII digits; signs and other characters are rejected
fn parse_digits(part: &str) -> Option<u32> {
    if !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn short_form_succeeds_iff_date_is_valid(text in "[0-9]{2}-[0-9]{2}-[0-9]{4}") {
            prop_assert_eq!(is_valid_date(&text), to_short_form(&text).is_ok());
        }

        #[test]
        fn short_form_is_day_month_and_year_suffix(days in 0i64..73_000i64) {
            let date = NaiveDate::from_ymd_opt(1900, 1, 1).unwrap() + chrono::Duration::days(days);
            let text = date.format("%d-%m-%Y").to_string();
            let short = to_short_form(&text).unwrap();

            prop_assert_eq!(short.len(), 6);
            prop_assert_eq!(&short[0..2], &text[0..2]);
            prop_assert_eq!(&short[2..4], &text[3..5]);
            prop_assert_eq!(&short[4..6], &text[8..10]);
        }
    }
}
