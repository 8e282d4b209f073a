//! # Crate Errors
//!
//! Each pattern module defines its own error enum (e.g., `AdapterError`, `FactoryError`).
//! [`PatternError`] is the union used at the showcase boundary; the `#[from]` attributes
//! let `?` lift module errors into it without explicit mapping.

use crate::adapter::AdapterError;
use crate::builder::BuilderError;
use crate::factory::FactoryError;
use crate::lifecycle::ConfigError;
use thiserror::Error;

/// Errors surfaced by demos and the showcase.
#[derive(Debug, Error)]
pub enum PatternError {
    #[error(transparent)]
    Adapter(#[from] AdapterError),

    #[error(transparent)]
    Builder(#[from] BuilderError),

    #[error(transparent)]
    Factory(#[from] FactoryError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A product could not be rendered as JSON.
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A worker task panicked or was cancelled.
    #[error("Worker task failed: {0}")]
    TaskFailed(String),
}
