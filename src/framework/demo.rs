//! # PatternDemo Trait
//!
//! The `PatternDemo` trait is the contract every pattern module satisfies to take part in the
//! showcase. A demo walks through its pattern and returns a [`DemoReport`]: the lines a reader
//! would see printed, in order. Returning the lines (instead of printing them) keeps demos
//! testable and leaves output to the binary.
//!
//! # Architecture Note
//! By defining one narrow contract that Adapter, Bridge, Builder, Prototype, Factory and
//! Singleton all satisfy, the [`Showcase`](crate::lifecycle::Showcase) runs the catalog with a
//! single loop. Each demo is free to do whatever its pattern needs internally.
//!
//! # Async
//! `run` is `#[async_trait]` so demos can spawn tasks (the singleton demo races tokio workers
//! against the lazy initializers).

use crate::error::PatternError;
use crate::lifecycle::ConfigError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The pattern families in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum PatternKind {
    Adapter,
    Bridge,
    Builder,
    Prototype,
    Factory,
    Singleton,
}

impl PatternKind {
    /// Every pattern, in catalog order.
    pub const ALL: [PatternKind; 6] = [
        PatternKind::Adapter,
        PatternKind::Bridge,
        PatternKind::Builder,
        PatternKind::Prototype,
        PatternKind::Factory,
        PatternKind::Singleton,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PatternKind::Adapter => "adapter",
            PatternKind::Bridge => "bridge",
            PatternKind::Builder => "builder",
            PatternKind::Prototype => "prototype",
            PatternKind::Factory => "factory",
            PatternKind::Singleton => "singleton",
        }
    }
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PatternKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        PatternKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ConfigError::UnknownPattern(wanted.to_string()))
    }
}

impl TryFrom<String> for PatternKind {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// What a demo produced, line by line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DemoReport {
    pub pattern: PatternKind,
    pub lines: Vec<String>,
}

impl DemoReport {
    pub fn new(pattern: PatternKind) -> Self {
        Self {
            pattern,
            lines: Vec::new(),
        }
    }

    /// Appends one output line.
    pub fn line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|line| line.contains(needle))
    }
}

/// Trait that every pattern demonstration implements to be run by the showcase.
///
/// # Example
///
/// ```rust
/// use async_trait::async_trait;
/// use pattern_recipe::error::PatternError;
/// use pattern_recipe::framework::{DemoReport, PatternDemo, PatternKind};
///
/// struct Hello;
///
/// #[async_trait]
/// impl PatternDemo for Hello {
///     fn kind(&self) -> PatternKind {
///         PatternKind::Singleton
///     }
///
///     async fn run(&self) -> Result<DemoReport, PatternError> {
///         let mut report = DemoReport::new(self.kind());
///         report.line("Hello from Singleton!");
///         Ok(report)
///     }
/// }
/// ```
#[async_trait]
pub trait PatternDemo: Send + Sync {
    /// Which pattern this demo covers.
    fn kind(&self) -> PatternKind;

    /// Walk through the pattern and collect the output lines.
    async fn run(&self) -> Result<DemoReport, PatternError>;
}
