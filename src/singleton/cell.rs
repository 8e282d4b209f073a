//! # Double-Checked Locking Cell
//!
//! For real code reach for [`std::sync::OnceLock`] or [`std::sync::LazyLock`], as
//! [`HolderSingleton`](super::HolderSingleton) does. They give the same guarantees with no
//! `unsafe` in your crate.
//!
//! [`DoubleCheckedCell`] is the check-lock-check initializer written out by hand:
//!
//! 1. **First check (no lock)**: an `Acquire` load of the pointer. If it is set, the value
//!    is fully initialized and visible; return it.
//! 2. **Lock**: take the mutex so only one caller can construct.
//! 3. **Second check (locked)**: another caller may have won the race while we waited.
//! 4. **Publish**: construct, then `Release`-store the pointer. The pairing with the
//!    `Acquire` load in step 1 makes the value visible to every later reader that
//!    sees the pointer.
//!
//! Once set the pointer never changes again. The value is dropped with the cell; for a
//! `static` cell that means never.

use std::fmt;
use std::marker::PhantomData;
use std::ptr;
use std::sync::atomic::{AtomicPtr, Ordering};
use std::sync::{Mutex, PoisonError};
use tracing::trace;

/// A write-once cell initialized with double-checked locking.
pub struct DoubleCheckedCell<T> {
    value: AtomicPtr<T>,
    lock: Mutex<()>,
    _owns: PhantomData<T>,
}

// SAFETY: the cell hands out `&T` to any thread (needs `T: Sync`) and drops `T` on
// whichever thread drops the cell (needs `T: Send`). These are the bounds `OnceLock` uses.
unsafe impl<T: Send + Sync> Sync for DoubleCheckedCell<T> {}

impl<T> DoubleCheckedCell<T> {
    pub const fn new() -> Self {
        Self {
            value: AtomicPtr::new(ptr::null_mut()),
            lock: Mutex::new(()),
            _owns: PhantomData,
        }
    }

    /// The value, if some caller has already initialized it. Never blocks.
    pub fn get(&self) -> Option<&T> {
        let ptr = self.value.load(Ordering::Acquire);
        // SAFETY: a non-null pointer was produced by `Box::into_raw` in `get_or_init`,
        // published with `Release` after the value was written, and is only freed in
        // `Drop`, which cannot run while `&self` is borrowed.
        unsafe { ptr.as_ref() }
    }

    pub fn is_initialized(&self) -> bool {
        !self.value.load(Ordering::Acquire).is_null()
    }

    /// Returns the value, running `init` first if nobody has yet.
    ///
    /// `init` runs at most once per cell, even under concurrent calls. If `init`
    /// panics the cell stays empty and a later call may try again.
    pub fn get_or_init<F>(&self, init: F) -> &T
    where
        F: FnOnce() -> T,
    {
        if let Some(value) = self.get() {
            return value;
        }

        // A poisoned lock only means an earlier `init` panicked before publishing;
        // the cell is still empty and safe to fill.
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(value) = self.get() {
            trace!("Lost initialization race");
            return value;
        }

        let ptr = Box::into_raw(Box::new(init()));
        self.value.store(ptr, Ordering::Release);
        // SAFETY: `ptr` came from `Box::into_raw` just above and is freed only in `Drop`.
        unsafe { &*ptr }
    }
}

impl<T> Default for DoubleCheckedCell<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for DoubleCheckedCell<T> {
    fn drop(&mut self) {
        let ptr = *self.value.get_mut();
        if !ptr.is_null() {
            // SAFETY: `&mut self` rules out outstanding borrows; the pointer came from
            // `Box::into_raw` and is freed exactly once, here.
            drop(unsafe { Box::from_raw(ptr) });
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for DoubleCheckedCell<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.get() {
            Some(value) => f.debug_tuple("DoubleCheckedCell").field(value).finish(),
            None => f.write_str("DoubleCheckedCell(<uninit>)"),
        }
    }
}
