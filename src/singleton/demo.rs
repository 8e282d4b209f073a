use super::{EagerSingleton, EnumSingleton, HolderSingleton, LazySingleton, SingletonDoubleChecked};
use crate::error::PatternError;
use crate::framework::{DemoReport, PatternDemo, PatternKind};
use async_trait::async_trait;
use std::collections::HashSet;
use tracing::{debug, info};

/// Default number of workers racing for the process-wide singletons.
pub const DEFAULT_WORKERS: usize = 8;

/// Walks the five singleton strategies, racing blocking workers against the lazily
/// initialized ones.
#[derive(Debug, Clone)]
pub struct SingletonDemo {
    workers: usize,
}

impl Default for SingletonDemo {
    fn default() -> Self {
        Self::new(DEFAULT_WORKERS)
    }
}

impl SingletonDemo {
    pub fn new(workers: usize) -> Self {
        Self {
            workers: workers.max(1),
        }
    }

    /// Calls `probe` from `workers` blocking tasks at once and collects the instance ids seen.
    async fn race(&self, probe: fn() -> u64) -> Result<HashSet<u64>, PatternError> {
        let handles: Vec<_> = (0..self.workers)
            .map(|_| tokio::task::spawn_blocking(probe))
            .collect();

        let mut ids = HashSet::new();
        for handle in handles {
            let id = handle
                .await
                .map_err(|e| PatternError::TaskFailed(e.to_string()))?;
            ids.insert(id);
        }
        debug!(workers = self.workers, distinct = ids.len(), "Race finished");
        Ok(ids)
    }

    fn thread_confined_line() -> String {
        let first = LazySingleton::instance();
        let second = LazySingleton::instance();
        format!("lazy: same thread reuses its instance: {}", first.id() == second.id())
    }
}

#[async_trait]
impl PatternDemo for SingletonDemo {
    fn kind(&self) -> PatternKind {
        PatternKind::Singleton
    }

    async fn run(&self) -> Result<DemoReport, PatternError> {
        let mut report = DemoReport::new(self.kind());
        report.line(SingletonDoubleChecked::instance().show_message());
        report.line(Self::thread_confined_line());

        info!(workers = self.workers, "Racing double-checked singleton");
        let ids = self.race(|| SingletonDoubleChecked::instance().id()).await?;
        report.line(format!(
            "double-checked: {} workers saw {} instance(s)",
            self.workers,
            ids.len()
        ));

        let ids = self.race(|| HolderSingleton::instance().id()).await?;
        report.line(format!(
            "holder: {} workers saw {} instance(s)",
            self.workers,
            ids.len()
        ));

        report.line(format!(
            "eager: compiled-in instance, id {}",
            EagerSingleton::instance().id()
        ));
        report.line(format!(
            "enum: every handle is the same value: {}",
            EnumSingleton::instance() == EnumSingleton::Instance
        ));
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn workers_all_see_one_instance() {
        let report = SingletonDemo::new(4).run().await.unwrap();
        assert_eq!(
            report.lines,
            vec![
                "Hello from Singleton!",
                "lazy: same thread reuses its instance: true",
                "double-checked: 4 workers saw 1 instance(s)",
                "holder: 4 workers saw 1 instance(s)",
                "eager: compiled-in instance, id 0",
                "enum: every handle is the same value: true",
            ]
        );
    }

    #[test]
    fn zero_workers_is_raised_to_one() {
        assert_eq!(SingletonDemo::new(0).workers, 1);
    }
}
