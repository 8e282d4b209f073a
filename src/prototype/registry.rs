//! A keyed catalog of prototypes, and the `Graphic` trait objects it usually holds.

use std::collections::HashMap;
use std::fmt::Debug;
use tracing::{debug, warn};

/// A drawable element that can clone itself behind a `Box`.
pub trait Graphic: Debug + Send + Sync {
    fn render(&self) -> String;

    fn box_clone(&self) -> Box<dyn Graphic>;
}

impl Clone for Box<dyn Graphic> {
    fn clone(&self) -> Self {
        self.box_clone()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub label: String,
    pub color: String,
}

impl Graphic for Badge {
    fn render(&self) -> String {
        format!("[{}] ({})", self.label, self.color)
    }

    fn box_clone(&self) -> Box<dyn Graphic> {
        Box::new(self.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub text: String,
    pub width: usize,
}

impl Graphic for Banner {
    fn render(&self) -> String {
        format!("{:=^width$}", format!(" {} ", self.text), width = self.width)
    }

    fn box_clone(&self) -> Box<dyn Graphic> {
        Box::new(self.clone())
    }
}

/// Stores prototypes by key and hands out fresh copies.
///
/// [`PrototypeRegistry::spawn`] returns `None` for an unknown key instead of a
/// placeholder object.
#[derive(Debug, Clone)]
pub struct PrototypeRegistry<T: Clone> {
    prototypes: HashMap<String, T>,
}

impl<T: Clone> Default for PrototypeRegistry<T> {
    fn default() -> Self {
        Self {
            prototypes: HashMap::new(),
        }
    }
}

impl<T: Clone> PrototypeRegistry<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a prototype, returning the one it replaced.
    pub fn register(&mut self, key: impl Into<String>, prototype: T) -> Option<T> {
        let key = key.into();
        debug!(%key, "Registering prototype");
        self.prototypes.insert(key, prototype)
    }

    pub fn spawn(&self, key: &str) -> Option<T> {
        let copy = self.prototypes.get(key).cloned();
        if copy.is_none() {
            warn!(key, "No prototype registered");
        }
        copy
    }

    /// Registered keys, sorted.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.prototypes.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> PrototypeRegistry<Box<dyn Graphic>> {
        let mut registry: PrototypeRegistry<Box<dyn Graphic>> = PrototypeRegistry::new();
        registry.register(
            "new",
            Box::new(Badge {
                label: "NEW".into(),
                color: "green".into(),
            }),
        );
        registry.register(
            "sale",
            Box::new(Banner {
                text: "SALE".into(),
                width: 12,
            }),
        );
        registry
    }

    #[test]
    fn spawn_returns_independent_copies() {
        let registry = registry();
        let first = registry.spawn("new").unwrap();
        let second = registry.spawn("new").unwrap();
        assert_eq!(first.render(), "[NEW] (green)");
        assert_eq!(first.render(), second.render());
        assert_eq!(registry.spawn("sale").unwrap().render(), "=== SALE ===");
    }

    #[test]
    fn unknown_key_yields_none() {
        assert!(registry().spawn("clearance").is_none());
    }

    #[test]
    fn register_replaces_and_reports_previous() {
        let mut registry: PrototypeRegistry<Badge> = PrototypeRegistry::new();
        let hot = Badge {
            label: "HOT".into(),
            color: "red".into(),
        };
        assert!(registry.register("hot", hot.clone()).is_none());
        let warmer = Badge {
            label: "HOT".into(),
            color: "orange".into(),
        };
        assert_eq!(registry.register("hot", warmer), Some(hot));
        assert_eq!(registry.keys(), vec!["hot"]);
        assert_eq!(registry.spawn("hot").unwrap().color, "orange");
    }

    #[test]
    fn keys_are_sorted() {
        let registry = registry();
        assert_eq!(registry.keys(), vec!["new", "sale"]);
        assert!(PrototypeRegistry::<Badge>::new().keys().is_empty());
    }
}
