use super::{next_instance_id, GREETING};
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::info;

static CONSTRUCTIONS: AtomicUsize = AtomicUsize::new(0);

/// Private holder: nothing outside this file can reach the `LazyLock`, and it is first
/// forced by [`HolderSingleton::instance`].
mod instance_holder {
    use super::HolderSingleton;
    use std::sync::LazyLock;

    pub(super) static INSTANCE: LazyLock<HolderSingleton> = LazyLock::new(HolderSingleton::new);
}

/// Singleton initialized on first access through a private holder.
#[derive(Debug)]
pub struct HolderSingleton {
    id: u64,
}

impl HolderSingleton {
    fn new() -> Self {
        let id = next_instance_id();
        CONSTRUCTIONS.fetch_add(1, Ordering::SeqCst);
        info!(strategy = "holder", id, "Singleton instance created.");
        Self { id }
    }

    pub fn instance() -> &'static Self {
        &instance_holder::INSTANCE
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn show_message(&self) -> &'static str {
        GREETING
    }

    pub fn constructions() -> usize {
        CONSTRUCTIONS.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn concurrent_first_access_constructs_once() {
        let ids: Vec<u64> = thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| scope.spawn(|| HolderSingleton::instance().id()))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert!(ids.iter().all(|&id| id == HolderSingleton::instance().id()));
        assert_eq!(HolderSingleton::constructions(), 1);
    }
}
