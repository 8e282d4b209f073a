//! Prototype: new objects made by copying existing ones.
//!
//! Copying in Rust is an explicit ownership decision per field. [`Resident`] keeps its
//! address behind an `Rc`, so its [`Prototype`] impl has to say whether a copy shares
//! that address or gets its own. [`ConcretePrototype`] owns everything and the question
//! never comes up. [`PrototypeRegistry`] hands out copies of registered prototypes by key.

pub mod concrete;
pub mod demo;
#[allow(clippy::module_inception)]
pub mod prototype;
pub mod registry;
pub mod resident;

pub use concrete::ConcretePrototype;
pub use demo::PrototypeDemo;
pub use prototype::Prototype;
pub use registry::{Badge, Banner, Graphic, PrototypeRegistry};
pub use resident::{Address, Resident};
