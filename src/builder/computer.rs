use serde::{Deserialize, Serialize};
use tracing::debug;

/// Operating system recorded when none is chosen.
pub const DEFAULT_OS: &str = "none";

/// A configured computer. Built only through [`ComputerBuilder`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Computer {
    hdd: String,
    ram: String,
    graphics_card: bool,
    bluetooth: bool,
    os: String,
}

impl Computer {
    /// Starts a builder with the two parts every computer needs.
    pub fn builder(hdd: impl Into<String>, ram: impl Into<String>) -> ComputerBuilder {
        ComputerBuilder::new(hdd, ram)
    }

    pub fn hdd(&self) -> &str {
        &self.hdd
    }

    pub fn ram(&self) -> &str {
        &self.ram
    }

    pub fn has_graphics_card(&self) -> bool {
        self.graphics_card
    }

    pub fn has_bluetooth(&self) -> bool {
        self.bluetooth
    }

    pub fn os(&self) -> &str {
        &self.os
    }
}

/// Consuming builder for [`Computer`].
///
/// Required parts go into [`ComputerBuilder::new`], so a `Computer` can never be built
/// without them. Optional parts default to off / [`DEFAULT_OS`]; setting one twice keeps
/// the last value.
#[derive(Debug, Clone)]
#[must_use = "a builder does nothing unless you call `.build()`"]
pub struct ComputerBuilder {
    hdd: String,
    ram: String,
    graphics_card: bool,
    bluetooth: bool,
    os: Option<String>,
}

impl ComputerBuilder {
    pub fn new(hdd: impl Into<String>, ram: impl Into<String>) -> Self {
        Self {
            hdd: hdd.into(),
            ram: ram.into(),
            graphics_card: false,
            bluetooth: false,
            os: None,
        }
    }

    pub fn graphics_card(mut self, enabled: bool) -> Self {
        self.graphics_card = enabled;
        self
    }

    pub fn bluetooth(mut self, enabled: bool) -> Self {
        self.bluetooth = enabled;
        self
    }

    pub fn os(mut self, os: impl Into<String>) -> Self {
        self.os = Some(os.into());
        self
    }

    pub fn build(self) -> Computer {
        let computer = Computer {
            hdd: self.hdd,
            ram: self.ram,
            graphics_card: self.graphics_card,
            bluetooth: self.bluetooth,
            os: self.os.unwrap_or_else(|| DEFAULT_OS.to_string()),
        };
        debug!(?computer, "Built computer");
        computer
    }
}
