//! The abstraction side of the bridge: remote controls.
//!
//! A remote only knows the [`Tv`] trait, so new remotes and new sets can be added
//! independently of each other.

use super::Tv;
use tracing::debug;

/// What a user can ask of a remote control.
pub trait RemoteControl {
    fn on(&mut self) -> String;

    fn off(&mut self) -> String;

    fn tune(&mut self, channel: u32) -> String;
}

/// A remote that forwards every button straight to the set it controls.
#[derive(Debug, Clone, Default)]
pub struct BasicRemote<T: Tv> {
    tv: T,
}

impl<T: Tv> BasicRemote<T> {
    pub fn new(tv: T) -> Self {
        Self { tv }
    }

    pub fn tv(&self) -> &T {
        &self.tv
    }

    /// Hands the set back, e.g. to pair it with another remote.
    pub fn into_inner(self) -> T {
        self.tv
    }
}

impl<T: Tv> RemoteControl for BasicRemote<T> {
    fn on(&mut self) -> String {
        debug!(brand = self.tv.brand(), "Remote on");
        self.tv.on()
    }

    fn off(&mut self) -> String {
        debug!(brand = self.tv.brand(), "Remote off");
        self.tv.off()
    }

    fn tune(&mut self, channel: u32) -> String {
        self.tv.tune(channel)
    }
}
