//! Error types for the Adapter example.

use thiserror::Error;

/// Errors that can occur while adapting a person record.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AdapterError {
    /// The date of birth is not a `YYYY-MM-DD` calendar date.
    #[error("Invalid date of birth: {0}")]
    InvalidDateOfBirth(String),

    /// The birth year lies after the year ages are computed against.
    #[error("Birth year {birth_year} is after reference year {reference_year}")]
    BirthYearInFuture { birth_year: i32, reference_year: i32 },

    /// The year difference does not fit in the age type.
    #[error("Age between {birth_year} and {reference_year} is out of range")]
    AgeOutOfRange { birth_year: i32, reference_year: i32 },
}
