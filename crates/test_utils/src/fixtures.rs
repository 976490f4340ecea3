//! Pre-built Test Fixtures
//!
//! Provides ready-to-use patients for code generation tests. The canonical
//! fixtures are fixed and predictable; `random_person` produces realistic
//! varied data for broader checks.

use chrono::NaiveDate;
use fake::faker::name::en::{FirstName, LastName};
use fake::Fake;

use core_kernel::check_character;
use domain_code::{CodeRequest, NameParts};

/// Fixture for the reference patient used throughout the test suite
pub struct PatientFixtures;

impl PatientFixtures {
    /// Reference names: Camilo Muñoz Cayun
    pub fn names() -> NameParts {
        NameParts::new("Camilo", "Muñoz", "Cayun")
    }

    /// Reference names without a second surname
    pub fn names_without_second_surname() -> NameParts {
        NameParts::without_second_surname("Camilo", "Muñoz")
    }

    /// Reference birth date text
    pub fn birth_date() -> &'static str {
        "08-09-1987"
    }

    /// Reference RUN with dots and a `K` check character
    pub fn national_id() -> &'static str {
        "16.823.628-K"
    }

    /// Reference RUN with a wrong check character
    pub fn wrong_check_national_id() -> &'static str {
        "16.823.628-1"
    }

    /// Code expected for the complete reference patient
    pub fn expected_code() -> &'static str {
        "CMC 080987 628-K"
    }

    /// Complete request for the reference patient
    pub fn complete_request() -> CodeRequest {
        CodeRequest::builder()
            .first_name("Camilo")
            .first_surname("Muñoz")
            .second_surname("Cayun")
            .birth_date(Self::birth_date())
            .national_id(Self::national_id())
            .build()
            .expect("Reference request is complete")
    }

    /// Request for the reference patient with neither second surname nor RUN
    pub fn minimal_request() -> CodeRequest {
        CodeRequest::builder()
            .first_name("Camilo")
            .first_surname("Muñoz")
            .without_second_surname()
            .birth_date(Self::birth_date())
            .without_national_id()
            .build()
            .expect("Reference request is complete")
    }
}

/// Fixture for birth date edge cases
pub struct DateFixtures;

impl DateFixtures {
    /// Texts that have the right shape but are not real dates
    pub fn impossible_dates() -> Vec<&'static str> {
        vec!["30-02-2020", "29-02-2019", "31-04-2021", "00-01-2000", "01-13-2000", "01-00-2000"]
    }

    /// Texts with the wrong shape
    pub fn malformed_dates() -> Vec<&'static str> {
        vec!["8-9-1987", "08/09/1987", "08-09-87", "1987-09-08", "08091987", "aa-bb-cccc", ""]
    }

    /// Leap day in a leap year
    pub fn leap_day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2020, 2, 29).unwrap()
    }
}

/// A randomly generated, internally consistent patient
#[derive(Debug, Clone)]
pub struct RandomPerson {
    pub first_name: String,
    pub first_surname: String,
    pub second_surname: String,
    pub birth_date: NaiveDate,
    pub national_id: String,
}

impl RandomPerson {
    /// Returns the birth date as `DD-MM-YYYY`
    pub fn birth_date_text(&self) -> String {
        self.birth_date.format("%d-%m-%Y").to_string()
    }

    /// Converts the person into a complete code request
    pub fn to_request(&self) -> CodeRequest {
        CodeRequest::builder()
            .first_name(self.first_name.clone())
            .first_surname(self.first_surname.clone())
            .second_surname(self.second_surname.clone())
            .birth_date(self.birth_date_text())
            .national_id(self.national_id.clone())
            .build()
            .expect("Random person is complete")
    }
}

/// Generates a realistic random person with a valid RUN
pub fn random_person() -> RandomPerson {
    let body: u32 = (1_000_000..26_000_000).fake();
    let body = body.to_string();
    let check = check_character(&body).expect("Numeric body");
    let days: i64 = (0..36_500).fake();

    RandomPerson {
        first_name: FirstName().fake(),
        first_surname: LastName().fake(),
        second_surname: LastName().fake(),
        birth_date: NaiveDate::from_ymd_opt(1925, 1, 1).unwrap() + chrono::Duration::days(days),
        national_id: format!("{}-{}", body, check),
    }
}
