use std::sync::Arc;
use std::time::Instant;

use super::MetricsRegistry;

/// Collector for scheduler job outcomes
#[derive(Clone)]
pub struct SchedulerMetricsCollector {
    metrics: Arc<MetricsRegistry>,
}

impl SchedulerMetricsCollector {
    pub fn new(metrics: Arc<MetricsRegistry>) -> Self {
        Self { metrics }
    }

    pub fn record_run(&self, job: &str, transitions: u64, duration_secs: f64) {
        self.metrics
            .scheduler_transitions_total
            .with_label_values(&[job])
            .inc_by(transitions as f64);

        self.metrics
            .scheduler_run_duration_seconds
            .with_label_values(&[job])
            .observe(duration_secs);
    }

    pub fn record_failure(&self, job: &str) {
        self.metrics
            .scheduler_failures_total
            .with_label_values(&[job])
            .inc();
    }
}

/// Timer helper for measuring durations
pub struct MetricsTimer {
    start: Instant,
}

impl MetricsTimer {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }
}

impl Default for MetricsTimer {
    fn default() -> Self {
        Self::new()
    }
}
