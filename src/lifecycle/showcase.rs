use super::ShowcaseConfig;
use crate::adapter::AdapterDemo;
use crate::bridge::BridgeDemo;
use crate::builder::BuilderDemo;
use crate::error::PatternError;
use crate::factory::FactoryDemo;
use crate::framework::{DemoReport, PatternDemo, PatternKind};
use crate::prototype::PrototypeDemo;
use crate::singleton::SingletonDemo;
use tracing::{error, info, Instrument};

/// Runs the selected pattern demos in order.
///
/// `Showcase` is the only place that knows every pattern module: it turns a
/// [`ShowcaseConfig`] into a list of [`PatternDemo`]s and runs each inside its own
/// `demo` span.
///
/// # Example
///
/// ```ignore
/// let showcase = Showcase::new(&ShowcaseConfig::default());
/// for report in showcase.run().await? {
///     for line in &report.lines {
///         println!("{}", line);
///     }
/// }
/// ```
pub struct Showcase {
    demos: Vec<Box<dyn PatternDemo>>,
}

impl Showcase {
    pub fn new(config: &ShowcaseConfig) -> Self {
        let demos = config
            .patterns
            .iter()
            .map(|&kind| demo_for(kind, config))
            .collect();
        Self { demos }
    }

    /// A showcase over hand-picked demos.
    pub fn with_demos(demos: Vec<Box<dyn PatternDemo>>) -> Self {
        Self { demos }
    }

    pub fn patterns(&self) -> Vec<PatternKind> {
        self.demos.iter().map(|demo| demo.kind()).collect()
    }

    /// Runs every demo and returns their reports, stopping at the first failure.
    pub async fn run(&self) -> Result<Vec<DemoReport>, PatternError> {
        info!(demos = self.demos.len(), "Starting showcase");
        let mut reports = Vec::with_capacity(self.demos.len());

        for demo in &self.demos {
            let pattern = demo.kind();
            let span = tracing::info_span!("demo", %pattern);
            let report = demo.run().instrument(span).await.map_err(|e| {
                error!(%pattern, error = %e, "Demo failed");
                e
            })?;
            info!(%pattern, lines = report.lines.len(), "Demo finished");
            reports.push(report);
        }

        info!("Showcase complete");
        Ok(reports)
    }
}

fn demo_for(kind: PatternKind, config: &ShowcaseConfig) -> Box<dyn PatternDemo> {
    match kind {
        PatternKind::Adapter => Box::new(AdapterDemo::new(config.reference_year)),
        PatternKind::Bridge => Box::new(BridgeDemo),
        PatternKind::Builder => Box::new(BuilderDemo),
        PatternKind::Prototype => Box::new(PrototypeDemo),
        PatternKind::Factory => Box::new(FactoryDemo),
        PatternKind::Singleton => Box::new(SingletonDemo::new(config.workers)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn follows_configured_order() {
        let config = ShowcaseConfig {
            patterns: vec![PatternKind::Singleton, PatternKind::Bridge],
            ..ShowcaseConfig::default()
        };
        assert_eq!(
            Showcase::new(&config).patterns(),
            vec![PatternKind::Singleton, PatternKind::Bridge]
        );
    }

    #[tokio::test]
    async fn empty_showcase_runs_nothing() {
        let reports = Showcase::with_demos(Vec::new()).run().await.unwrap();
        assert!(reports.is_empty());
    }
}
