use super::{next_instance_id, GREETING};
use std::cell::OnceCell;
use std::rc::Rc;
use tracing::info;

thread_local! {
    static INSTANCE: OnceCell<Rc<LazySingleton>> = const { OnceCell::new() };
}

/// The plain check-then-create singleton.
///
/// Unsynchronized lazy creation is only sound when a single thread can see the state, so
/// this version keeps one instance *per thread*: repeated calls on a thread share an
/// instance, other threads get their own. `Rc` keeps the handle from crossing threads.
#[derive(Debug)]
pub struct LazySingleton {
    id: u64,
}

impl LazySingleton {
    fn new() -> Self {
        let id = next_instance_id();
        info!(strategy = "lazy", id, "Singleton instance created.");
        Self { id }
    }

    pub fn instance() -> Rc<LazySingleton> {
        INSTANCE.with(|cell| Rc::clone(cell.get_or_init(|| Rc::new(Self::new()))))
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn show_message(&self) -> &'static str {
        GREETING
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn same_thread_reuses_the_instance() {
        let first = LazySingleton::instance();
        let second = LazySingleton::instance();
        assert!(Rc::ptr_eq(&first, &second));
        assert_eq!(first.show_message(), GREETING);
    }

    #[test]
    fn other_threads_get_their_own() {
        let here = LazySingleton::instance().id();
        let there = thread::spawn(|| LazySingleton::instance().id()).join().unwrap();
        assert_ne!(here, there);
    }
}
