//! # Observability & Tracing
//!
//! The [`setup_tracing`] function initializes structured logging with the `tracing` crate.
//!
//! ## Configuration
//!
//! The subscriber uses a compact format that hides the crate/module prefix
//! (`with_target(false)`) and reads its filter from `RUST_LOG`.
//!
//! ## What Gets Traced
//!
//! - **Showcase**: start, each demo finishing, completion, failures
//! - **Singletons**: every constructor run (`"Singleton instance created."`) with its strategy
//! - **Factories and registries**: products created, unknown keys rejected
//! - **Builders**: finished products, missing required fields
//!
//! ## Usage Examples
//!
//! ```bash
//! # Demo output plus lifecycle logs
//! RUST_LOG=info cargo run
//!
//! # Per-operation detail (builder payloads, factory keys, race results)
//! RUST_LOG=debug cargo run
//!
//! # Only the singleton module
//! RUST_LOG=pattern_recipe::singleton=debug cargo run
//! ```
//!
//! ## Output Format
//!
//! Each demo runs inside a `demo` span, shown inline by the compact format:
//!
//! ```text
//! INFO demo{pattern=singleton}: Singleton instance created. strategy="double_checked" id=3
//! INFO demo{pattern=singleton}: Demo finished pattern=singleton lines=6
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
