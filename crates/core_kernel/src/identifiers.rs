//! National identity numbers (RUN)
//!
//! A RUN is a numeric body of one to eight digits followed by a check
//! character, written with optional thousands dots and a hyphen before the
//! check character: `16.823.628-K`. The check character is computed with the
//! modulo-11 scheme:
//!
//! 1. walk the body right to left, multiplying each digit by a weight that
//!    cycles through 2, 3, 4, 5, 6, 7
//! 2. take `11 - (sum mod 11)`
//! 3. 11 maps to `0`, 10 maps to `K`, anything else is the digit itself
//!
//! Normalization, validation and code formatting are separate operations so a
//! caller can give feedback on a typed number before a code is generated.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::{CoreError, Field};

/// Weights applied to body digits, starting from the least significant one
const CHECK_WEIGHTS: [u32; 6] = [2, 3, 4, 5, 6, 7];

/// Longest numeric body accepted
const MAX_BODY_DIGITS: usize = 8;

/// Number of trailing body digits kept in a record code
const CODE_DIGITS: usize = 3;

/// A validated national identity number
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NationalId {
    body: String,
    check: char,
}

impl NationalId {
    /// Parses and verifies an identity number in any accepted notation
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Identity` when the normalized text is not
    /// `1-8 digits, hyphen, check character` or the check character does not
    /// match the one computed from the body.
    pub fn parse(text: &str) -> Result<Self, CoreError> {
        let normalized = normalize(text);
        let (body, supplied) =
            split_normalized(&normalized).ok_or(CoreError::identity(Field::NationalId))?;

        match check_character(body) {
            Some(expected) if expected == supplied => Ok(Self {
                body: body.to_string(),
                check: supplied,
            }),
            _ => Err(CoreError::identity(Field::NationalId)),
        }
    }

    /// Returns the numeric body without dots
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns the verified check character
    pub fn check(&self) -> char {
        self.check
    }

    /// Returns the `NNN-D` suffix used in record codes
    pub fn code_suffix(&self) -> String {
        format!("{}-{}", last_three_digits(&self.body), self.check)
    }
}

impl fmt::Display for NationalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.body, self.check)
    }
}

impl FromStr for NationalId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for NationalId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for NationalId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NationalId::parse(&s)
            .map_err(|_| serde::de::Error::custom("Invalid national identity number"))
    }
}

/// Canonicalizes identity-number notation
///
/// Upper-cases, removes dots and whitespace, and turns em-dash, en-dash and
/// underscore into a plain hyphen. The result is not checked; pass it to
/// `is_valid` for that.
pub fn normalize(id: &str) -> String {
    id.to_uppercase()
        .chars()
        .filter(|c| *c != '.' && !c.is_whitespace())
        .map(|c| match c {
            '\u{2014}' | '\u{2013}' | '_' => '-',
            other => other,
        })
        .collect()
}

/// Returns true if the identity number has a valid shape and check character
pub fn is_valid(id: &str) -> bool {
    NationalId::parse(id).is_ok()
}

/// Computes the modulo-11 check character for a numeric body
///
/// Returns `None` if the body is empty or contains anything but ASCII digits.
pub fn check_character(body: &str) -> Option<char> {
    if body.is_empty() || !body.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let sum: u32 = body
        .bytes()
        .rev()
        .map(|b| u32::from(b - b'0'))
        .zip(CHECK_WEIGHTS.iter().cycle())
        .map(|(digit, weight)| digit * weight)
        .sum();

    match 11 - sum % 11 {
        11 => Some('0'),
        10 => Some('K'),
        digit => char::from_digit(digit, 10),
    }
}

/// Returns the last three digits of a number, left-padded with zeros
///
/// Every non-digit character is discarded first, so a dotted body such as
/// `16.823.628` is accepted.
pub fn last_three_digits(id: &str) -> String {
    let digits: Vec<char> = id.chars().filter(char::is_ascii_digit).collect();
    let tail: String = digits[digits.len().saturating_sub(CODE_DIGITS)..]
        .iter()
        .collect();
    format!("{:0>width$}", tail, width = CODE_DIGITS)
}

/// Formats a valid identity number as the `NNN-D` code suffix
///
/// # Errors
///
/// Returns `CoreError::Identity` whenever `is_valid(id)` is false.
pub fn format_for_code(id: &str) -> Result<String, CoreError> {
    NationalId::parse(id).map(|id| id.code_suffix())
}

/// Splits a normalized identity number into body and check character
///
/// Accepts exactly `\d{1,8}-[0-9K]`.
fn split_normalized(normalized: &str) -> Option<(&str, char)> {
    let (body, check) = normalized.split_once('-')?;

    if body.is_empty()
        || body.len() > MAX_BODY_DIGITS
        || !body.bytes().all(|b| b.is_ascii_digit())
    {
        return None;
    }

    let mut check_chars = check.chars();
    match (check_chars.next(), check_chars.next()) {
        (Some(c), None) if c.is_ascii_digit() || c == 'K' => Some((body, c)),
        _ => None,
    }
}
