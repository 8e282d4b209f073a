//! Error types for the Factory examples.

use thiserror::Error;

/// Errors that can occur when asking a factory for a product.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FactoryError {
    /// No product is registered under the requested key.
    #[error("Unknown product type: {0}")]
    UnknownProduct(String),
}
