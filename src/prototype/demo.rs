use super::{Address, Badge, Banner, Graphic, Prototype, PrototypeRegistry, Resident};
use crate::error::PatternError;
use crate::framework::{DemoReport, PatternDemo, PatternKind};
use async_trait::async_trait;

/// Contrasts shallow and deep copies, then stamps graphics out of a registry.
#[derive(Debug, Clone, Default)]
pub struct PrototypeDemo;

impl PrototypeDemo {
    fn walkthrough() -> DemoReport {
        let mut report = DemoReport::new(PatternKind::Prototype);

        let alice = Resident::new("Alice", 30, Address::new("12 Main St", "Colombo"));
        let shallow = alice.shallow_copy();
        shallow.move_city("Kandy");
        report.line(format!(
            "Shallow copy moved to Kandy; original now lives in {}",
            alice.address().city
        ));

        let deep = alice.deep_copy();
        deep.move_city("Galle");
        report.line(format!(
            "Deep copy moved to Galle; original still lives in {}",
            alice.address().city
        ));

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
                width: 16,
            }),
        );
        report.line(format!("catalog: {}", registry.keys().join(", ")));
        for key in ["new", "sale", "clearance"] {
            match registry.spawn(key) {
                Some(graphic) => report.line(format!("{} -> {}", key, graphic.render())),
                None => report.line(format!("{} -> no prototype", key)),
            }
        }
        report
    }
}

#[async_trait]
impl PatternDemo for PrototypeDemo {
    fn kind(&self) -> PatternKind {
        PatternKind::Prototype
    }

    async fn run(&self) -> Result<DemoReport, PatternError> {
        Ok(Self::walkthrough())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn shows_aliasing_and_missing_prototypes() {
        let report = PrototypeDemo.run().await.unwrap();
        assert!(report.lines[0].ends_with("original now lives in Kandy"));
        assert!(report.lines[1].ends_with("original still lives in Kandy"));
        assert_eq!(report.lines[2], "catalog: new, sale");
        assert_eq!(report.lines[3], "new -> [NEW] (green)");
        assert_eq!(report.lines[5], "clearance -> no prototype");
    }
}
