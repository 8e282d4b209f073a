//! Shared building blocks for the pattern catalog.
//!
//! # Main Components
//!
//! - [`PatternDemo`] - Trait each pattern module implements to join the showcase
//! - [`DemoReport`] - The lines a demo produced
//! - [`PatternKind`] - The pattern families, parseable from configuration

pub mod demo;

pub use demo::*;
