//! Singleton: five ways to get "exactly one instance".
//!
//! | Strategy | Type | When built | Scope |
//! |----------|------|------------|-------|
//! | Plain lazy | [`LazySingleton`] | first call | per thread |
//! | Double-checked locking | [`SingletonDoubleChecked`] | first call | process |
//! | Eager | [`EagerSingleton`] | compile time | process |
//! | Holder | [`HolderSingleton`] | first call | process |
//! | Enum | [`EnumSingleton`] | n/a (one value) | process |
//!
//! None of them uses a `static mut`. Process-wide state is either const-initialized or
//! published once through an atomic initializer ([`DoubleCheckedCell`], `LazyLock`).
//! Every variant answers `show_message()` with [`GREETING`] and logs
//! `"Singleton instance created."` whenever its constructor runs.

pub mod cell;
pub mod demo;
pub mod double_checked;
pub mod eager;
pub mod enumerated;
pub mod holder;
pub mod lazy;

pub use cell::DoubleCheckedCell;
pub use demo::{SingletonDemo, DEFAULT_WORKERS};
pub use double_checked::SingletonDoubleChecked;
pub use eager::{EagerSingleton, EAGER_INSTANCE_ID};
pub use enumerated::EnumSingleton;
pub use holder::HolderSingleton;
pub use lazy::LazySingleton;

use std::sync::atomic::{AtomicU64, Ordering};

pub const GREETING: &str = "Hello from Singleton!";

// Id 0 belongs to the eager instance; run-time constructions start at 1.
static NEXT_INSTANCE_ID: AtomicU64 = AtomicU64::new(1);

fn next_instance_id() -> u64 {
    NEXT_INSTANCE_ID.fetch_add(1, Ordering::Relaxed)
}
