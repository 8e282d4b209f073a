use super::{render_form, widget_factory, Logistics, RoadLogistics, SeaLogistics, ShapeFactory};
use crate::error::PatternError;
use crate::framework::{DemoReport, PatternDemo, PatternKind};
use async_trait::async_trait;

/// Runs all three factory flavours and shows the error for an unknown product.
#[derive(Debug, Clone, Default)]
pub struct FactoryDemo;

impl FactoryDemo {
    fn walkthrough() -> Result<DemoReport, PatternError> {
        let mut report = DemoReport::new(PatternKind::Factory);

        let shapes = ShapeFactory::with_defaults();
        for key in shapes.products() {
            report.line(shapes.create(key)?.draw());
        }
        if let Err(e) = shapes.create("hexagon") {
            report.line(format!("Factory refused: {}", e));
        }

        let planners: [&dyn Logistics; 2] = [&RoadLogistics, &SeaLogistics];
        for planner in planners {
            report.line(planner.plan_delivery("tea"));
        }

        for theme in ["light", "dark"] {
            let factory = widget_factory(theme)?;
            report.line(format!("{} form: {}", theme, render_form(factory.as_ref()).join(" ")));
        }
        Ok(report)
    }
}

#[async_trait]
impl PatternDemo for FactoryDemo {
    fn kind(&self) -> PatternKind {
        PatternKind::Factory
    }

    async fn run(&self) -> Result<DemoReport, PatternError> {
        Self::walkthrough()
    }
}
