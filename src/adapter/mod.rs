//! Adapter: answering the `Student` interface with a registry `Person`.
//!
//! [`Person`] is the existing type, [`Student`] the interface the client code wants, and
//! [`StudentAdapter`] translates between them without touching either.

pub mod demo;
pub mod error;
pub mod person;
pub mod student;
pub mod student_adapter;

pub use demo::AdapterDemo;
pub use error::*;
pub use person::Person;
pub use student::{Student, UniversityStudent};
pub use student_adapter::StudentAdapter;
