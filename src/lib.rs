#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # Pattern Recipe
//!
//! > **Classic design patterns, the Rust way.**
//!
//! This crate walks through Adapter, Bridge, Builder, Prototype, Factory and Singleton.
//! Each pattern lives in its own module with a small demo, and none of the modules
//! depend on each other.
//!
//! ## 🏗️ Design Philosophy
//!
//! The textbook versions of these patterns lean on inheritance, nullable references and
//! static mutable fields. Rust has none of those, so each one is translated:
//!
//! - **Inheritance → narrow traits.** [`adapter::Student`], [`bridge::Tv`],
//!   [`factory::Shape`] define exactly the operations their pattern needs, and each
//!   concrete type implements them explicitly.
//! - **Null → `Option` / `Result`.** An unknown factory key is a [`factory::FactoryError`];
//!   an unknown prototype key is `None`.
//! - **`clone()` → an ownership decision.** [`prototype::Prototype`] separates copies that
//!   share `Rc` data from copies that duplicate it.
//! - **Static mutable fields → initialize-once statics.** See [`singleton`].
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Catalog
//! - [`adapter`]: a registry `Person` answering the `Student` interface.
//! - [`bridge`]: remote controls decoupled from the TV sets they drive.
//! - [`builder`]: a compile-time-checked builder and a runtime-checked one.
//! - [`prototype`]: shallow vs deep copies and a prototype registry.
//! - [`factory`]: simple factory, factory method, abstract factory.
//! - [`singleton`]: five initialization strategies, including hand-written
//!   double-checked locking.
//!
//! ### 2. The Plumbing
//! - [`framework`]: the [`PatternDemo`](framework::PatternDemo) trait every demo implements.
//! - [`lifecycle`]: configuration, the [`Showcase`](lifecycle::Showcase) runner, tracing setup.
//! - [`error`]: the crate-level [`PatternError`](error::PatternError).
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Every demo
//! cargo run
//!
//! # A subset, with lifecycle logs
//! PATTERN_RECIPE_PATTERNS=singleton,factory RUST_LOG=info cargo run
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! cargo test
//! ```

pub mod adapter;
pub mod bridge;
pub mod builder;
pub mod error;
pub mod factory;
pub mod framework;
pub mod lifecycle;
pub mod prototype;
pub mod singleton;
