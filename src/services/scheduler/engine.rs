use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::Duration;

use super::jobs::{expire_overdue_tasks, mark_accomplished_tasks};
use crate::config::DbPool;
use crate::services::metrics::{MetricsRegistry, MetricsTimer, SchedulerMetricsCollector};
use crate::services::notification::NotificationDispatcher;

const EXPIRE_JOB: &str = "expire";
const ACCOMPLISH_JOB: &str = "accomplish";

/// Transitions applied by one scheduler tick. A failed job reports `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunReport {
    pub expired: Option<u64>,
    pub accomplished: Option<u64>,
}

pub struct TaskScheduler {
    db: DbPool,
    notifier: NotificationDispatcher,
    period: Duration,
    metrics: SchedulerMetricsCollector,
}

impl TaskScheduler {
    pub fn new(
        db: DbPool,
        notifier: NotificationDispatcher,
        period: Duration,
        metrics: Arc<MetricsRegistry>,
    ) -> Self {
        Self {
            db,
            notifier,
            period,
            metrics: SchedulerMetricsCollector::new(metrics),
        }
    }

    /// Start the background loop; ticks until the runtime shuts down.
    pub async fn run(&self) {
        let mut interval = tokio::time::interval(self.period);
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
        tracing::info!(period_secs = self.period.as_secs(), "task scheduler started");

        loop {
            interval.tick().await;
            self.run_once(Utc::now()).await;
        }
    }

    /// Runs both jobs against `now`. Job failures are logged and counted, never propagated.
    pub async fn run_once(&self, now: DateTime<Utc>) -> RunReport {
        let timer = MetricsTimer::new();
        let expired = self
            .record(EXPIRE_JOB, expire_overdue_tasks(&self.db, &self.notifier, now).await, &timer);

        let timer = MetricsTimer::new();
        let accomplished = self.record(
            ACCOMPLISH_JOB,
            mark_accomplished_tasks(&self.db, &self.notifier, now).await,
            &timer,
        );

        RunReport {
            expired,
            accomplished,
        }
    }

    fn record(&self, job: &str, outcome: Result<u64, sqlx::Error>, timer: &MetricsTimer) -> Option<u64> {
        match outcome {
            Ok(count) => {
                self.metrics.record_run(job, count, timer.elapsed_secs());
                if count > 0 {
                    tracing::info!(job, transitioned = count, "scheduler job finished");
                } else {
                    tracing::debug!(job, "scheduler job found nothing to do");
                }
                Some(count)
            }
            Err(e) => {
                self.metrics.record_failure(job);
                tracing::error!(job, "scheduler job rolled back: {}", e);
                None
            }
        }
    }
}
