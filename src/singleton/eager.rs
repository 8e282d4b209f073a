use super::GREETING;

/// Id reserved for the instance built at compile time.
pub const EAGER_INSTANCE_ID: u64 = 0;

static INSTANCE: EagerSingleton = EagerSingleton {
    id: EAGER_INSTANCE_ID,
};

/// Singleton created before the program runs.
///
/// The instance is a `const`-initialized `static`, so there is no run-time construction
/// and no race to win. The trade-off is that it must be buildable in a const context.
#[derive(Debug)]
pub struct EagerSingleton {
    id: u64,
}

impl EagerSingleton {
    pub fn instance() -> &'static Self {
        &INSTANCE
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

    #[test]
    fn instance_is_the_static() {
        assert!(std::ptr::eq(EagerSingleton::instance(), &INSTANCE));
        assert_eq!(EagerSingleton::instance().id(), EAGER_INSTANCE_ID);
    }
}
