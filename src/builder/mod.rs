//! Builder: products assembled step by step.
//!
//! - [`ComputerBuilder`] puts the required parts in its constructor, so the compiler
//!   enforces them.
//! - [`ProfileBuilder`] accepts fields in any order and checks the required ones in
//!   `build()`, returning [`BuilderError`] when something is missing.

pub mod computer;
pub mod demo;
pub mod error;
pub mod profile;

pub use computer::{Computer, ComputerBuilder, DEFAULT_OS};
pub use demo::BuilderDemo;
pub use error::*;
pub use profile::{Profile, ProfileBuilder};
