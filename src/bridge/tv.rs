//! The implementation side of the bridge: concrete television sets.

use tracing::debug;

/// Operations every television set supports.
///
/// Each operation updates the set and returns the line it announces.
pub trait Tv: Send {
    fn brand(&self) -> &'static str;

    fn on(&mut self) -> String;

    fn off(&mut self) -> String;

    fn tune(&mut self, channel: u32) -> String;

    fn is_on(&self) -> bool;

    /// The last channel tuned, if any.
    fn channel(&self) -> Option<u32>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct SetState {
    powered: bool,
    channel: Option<u32>,
}

#[derive(Debug, Clone, Default)]
pub struct SonyTv {
    state: SetState,
}

impl SonyTv {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Tv for SonyTv {
    fn brand(&self) -> &'static str {
        "Sony"
    }

    fn on(&mut self) -> String {
        self.state.powered = true;
        "Turning on Sony TV".to_string()
    }

    fn off(&mut self) -> String {
        self.state.powered = false;
        "Turning off Sony TV".to_string()
    }

    fn tune(&mut self, channel: u32) -> String {
        debug!(brand = self.brand(), channel, "Tune");
        self.state.channel = Some(channel);
        format!("Turning on channel {}", channel)
    }

    fn is_on(&self) -> bool {
        self.state.powered
    }

    fn channel(&self) -> Option<u32> {
        self.state.channel
    }
}

#[derive(Debug, Clone, Default)]
pub struct LgTv {
    state: SetState,
}

impl LgTv {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Tv for LgTv {
    fn brand(&self) -> &'static str {
        "LG"
    }

    fn on(&mut self) -> String {
        self.state.powered = true;
        "Turning on LG TV".to_string()
    }

    fn off(&mut self) -> String {
        self.state.powered = false;
        "Turning off LG TV".to_string()
    }

    fn tune(&mut self, channel: u32) -> String {
        debug!(brand = self.brand(), channel, "Tune");
        self.state.channel = Some(channel);
        format!("Switching LG TV to channel {}", channel)
    }

    fn is_on(&self) -> bool {
        self.state.powered
    }

    fn channel(&self) -> Option<u32> {
        self.state.channel
    }
}
