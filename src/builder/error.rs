//! Error types for the Builder example.

use thiserror::Error;

/// Errors that can occur when finishing a build.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuilderError {
    /// A required field was never set, or was set to a blank value.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}
