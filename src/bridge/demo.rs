use super::{BasicRemote, LgTv, RemoteControl, SonyTv};
use crate::error::PatternError;
use crate::framework::{DemoReport, PatternDemo, PatternKind};
use async_trait::async_trait;

/// Drives an LG and a Sony set through the same remote abstraction.
#[derive(Debug, Clone, Default)]
pub struct BridgeDemo;

impl BridgeDemo {
    fn press_all(remote: &mut dyn RemoteControl, channel: u32, report: &mut DemoReport) {
        report.line(remote.on());
        report.line(remote.off());
        report.line(remote.tune(channel));
    }
}

#[async_trait]
impl PatternDemo for BridgeDemo {
    fn kind(&self) -> PatternKind {
        PatternKind::Bridge
    }

    async fn run(&self) -> Result<DemoReport, PatternError> {
        let mut report = DemoReport::new(self.kind());
        Self::press_all(&mut BasicRemote::new(LgTv::new()), 10, &mut report);
        Self::press_all(&mut BasicRemote::new(SonyTv::new()), 20, &mut report);
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn both_sets_answer_the_same_buttons() {
        let report = BridgeDemo.run().await.unwrap();
        assert_eq!(
            report.lines,
            vec![
                "Turning on LG TV",
                "Turning off LG TV",
                "Switching LG TV to channel 10",
                "Turning on Sony TV",
                "Turning off Sony TV",
                "Turning on channel 20",
            ]
        );
    }
}
