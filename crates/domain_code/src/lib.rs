//! HIV-Test Record Code Domain
//!
//! This crate builds the standardized identifying code attached to HIV-test
//! records. A code is derived from the patient's names, birth date and
//! national identity number (RUN):
//!
//! - **Initials**: first letter of first name, first surname and second
//!   surname, with `#` when there is no second surname
//! - **Short date**: birth date as `DDMMYY`
//! - **Identity segment**: last three RUN digits and check character, or the
//!   fixed `ABC-D` when the patient has no RUN on file
//!
//! All operations are pure; a code is always derived fresh from its inputs.
//!
//! # Examples
//!
//! ```rust
//! use domain_code::generate_code;
//!
//! let code = generate_code(
//!     "Camilo", "Muñoz", "Cayun", false,
//!     "08-09-1987",
//!     false, Some("16.823.628-K"),
//! ).unwrap();
//!
//! assert_eq!(code.to_string(), "CMC 080987 628-K");
//! ```

pub mod initials;
pub mod code;
pub mod request;
pub mod validation;
pub mod error;

pub use initials::{NameParts, extract_initials, NO_SECOND_SURNAME};
pub use code::{GeneratedCode, generate_code, NO_NATIONAL_ID};
pub use request::{CodeRequest, CodeRequestBuilder};
pub use validation::{RequestValidator, ValidationResult};
pub use error::CodeError;
