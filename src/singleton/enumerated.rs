use super::GREETING;
use std::sync::atomic::{AtomicI64, Ordering};

static VALUE: AtomicI64 = AtomicI64::new(0);

/// Singleton as a single-variant enum.
///
/// The type has exactly one value, so "only one instance" holds by construction. Its state
/// lives in a process-wide atomic, which every copy of the handle reads and writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnumSingleton {
    Instance,
}

impl EnumSingleton {
    pub fn instance() -> Self {
        EnumSingleton::Instance
    }

    pub fn value(self) -> i64 {
        VALUE.load(Ordering::SeqCst)
    }

    pub fn set_value(self, value: i64) {
        VALUE.store(value, Ordering::SeqCst);
    }

    pub fn show_message(self) -> &'static str {
        GREETING
    }
}
