use super::{next_instance_id, DoubleCheckedCell, GREETING};
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::info;

static INSTANCE: DoubleCheckedCell<SingletonDoubleChecked> = DoubleCheckedCell::new();
static CONSTRUCTIONS: AtomicUsize = AtomicUsize::new(0);

/// Process-wide singleton built through [`DoubleCheckedCell`].
///
/// The private field keeps construction inside this module; [`SingletonDoubleChecked::instance`]
/// is the only way to obtain one.
#[derive(Debug)]
pub struct SingletonDoubleChecked {
    id: u64,
}

impl SingletonDoubleChecked {
    fn new() -> Self {
        let id = next_instance_id();
        CONSTRUCTIONS.fetch_add(1, Ordering::SeqCst);
        info!(strategy = "double_checked", id, "Singleton instance created.");
        Self { id }
    }

    pub fn instance() -> &'static Self {
        INSTANCE.get_or_init(Self::new)
    }

    /// Construction sequence number of this instance.
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn show_message(&self) -> &'static str {
        GREETING
    }

    /// How many times the constructor has run in this process.
    pub fn constructions() -> usize {
        CONSTRUCTIONS.load(Ordering::SeqCst)
    }
}
