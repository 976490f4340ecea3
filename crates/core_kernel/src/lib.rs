//! Core Kernel - Foundational value types for HIV-test record codes
//!
//! This crate provides the leaf building blocks used by the code assembler:
//! - Birth date validation and short-form encoding (`DD-MM-YYYY` to `DDMMYY`)
//! - National identity number (RUN) normalization and modulo-11 verification
//! - The two error kinds every code operation can fail with

pub mod temporal;
pub mod identifiers;
pub mod error;

pub use temporal::{BirthDate, is_valid_date, to_short_form};
pub use identifiers::{
    NationalId, normalize, is_valid, check_character, last_three_digits, format_for_code,
};
pub use error::{CoreError, ErrorKind, Field};
