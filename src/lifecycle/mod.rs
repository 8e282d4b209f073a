//! # Showcase Lifecycle
//!
//! This module turns configuration into a running catalog:
//!
//! 1. **Configuration** - [`ShowcaseConfig`] from the environment or JSON
//! 2. **Orchestration** - [`Showcase`] builds the selected demos and runs them in order
//! 3. **Observability** - [`setup_tracing`] installs the log subscriber
//!
//! Pattern modules never depend on each other; only the showcase sees all of them.

pub mod config;
pub mod showcase;
pub mod tracing;

pub use config::*;
pub use showcase::*;
pub use self::tracing::*;
