use super::{Computer, Profile};
use crate::error::PatternError;
use crate::framework::{DemoReport, PatternDemo, PatternKind};
use async_trait::async_trait;

/// Builds a computer and a profile and shows them as JSON.
#[derive(Debug, Clone, Default)]
pub struct BuilderDemo;

#[async_trait]
impl PatternDemo for BuilderDemo {
    fn kind(&self) -> PatternKind {
        PatternKind::Builder
    }

    async fn run(&self) -> Result<DemoReport, PatternError> {
        let mut report = DemoReport::new(self.kind());

        let basic = Computer::builder("500 GB", "8 GB").build();
        let gaming = Computer::builder("2 TB", "32 GB")
            .graphics_card(true)
            .bluetooth(true)
            .os("Linux")
            .build();
        report.line(serde_json::to_string(&basic)?);
        report.line(serde_json::to_string(&gaming)?);

        let profile = Profile::builder()
            .first_name("Ada")
            .last_name("Lovelace")
            .with_age(36)
            .build()?;
        report.line(serde_json::to_string(&profile)?);

        if let Err(e) = Profile::builder().first_name("Charles").build() {
            report.line(format!("Rejected profile: {}", e));
        }
        Ok(report)
    }
}
