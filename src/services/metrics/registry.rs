use prometheus::{
    CounterVec, Encoder, HistogramOpts, HistogramVec, Opts, Registry, TextEncoder,
};
use std::sync::Arc;

const NAMESPACE: &str = "td";

/// Central metrics registry for the API and the background scheduler
pub struct MetricsRegistry {
    registry: Registry,

    // HTTP Metrics
    pub http_requests_total: CounterVec,
    pub http_request_duration_seconds: HistogramVec,

    // Scheduler Metrics
    pub scheduler_transitions_total: CounterVec,
    pub scheduler_failures_total: CounterVec,
    pub scheduler_run_duration_seconds: HistogramVec,
}

impl MetricsRegistry {
    pub fn new() -> Result<Arc<Self>, prometheus::Error> {
        let registry = Registry::new();

        // HTTP Metrics
        let http_requests_total = CounterVec::new(
            Opts::new("http_requests_total", "Total HTTP requests").namespace(NAMESPACE),
            &["method", "endpoint", "status"],
        )?;
        registry.register(Box::new(http_requests_total.clone()))?;

        let http_request_duration_seconds = HistogramVec::new(
            HistogramOpts::new("http_request_duration_seconds", "HTTP request duration")
                .namespace(NAMESPACE)
                .buckets(vec![0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0]),
            &["method", "endpoint"],
        )?;
        registry.register(Box::new(http_request_duration_seconds.clone()))?;

        // Scheduler Metrics
        let scheduler_transitions_total = CounterVec::new(
            Opts::new(
                "scheduler_transitions_total",
                "Tasks moved out of pending by the scheduler",
            )
            .namespace(NAMESPACE),
            &["job"],
        )?;
        registry.register(Box::new(scheduler_transitions_total.clone()))?;

        let scheduler_failures_total = CounterVec::new(
            Opts::new("scheduler_failures_total", "Scheduler job runs that failed")
                .namespace(NAMESPACE),
            &["job"],
        )?;
        registry.register(Box::new(scheduler_failures_total.clone()))?;

        let scheduler_run_duration_seconds = HistogramVec::new(
            HistogramOpts::new("scheduler_run_duration_seconds", "Scheduler job duration")
                .namespace(NAMESPACE)
                .buckets(vec![0.001, 0.005, 0.01, 0.05, 0.1, 0.5, 1.0, 5.0]),
            &["job"],
        )?;
        registry.register(Box::new(scheduler_run_duration_seconds.clone()))?;

        Ok(Arc::new(Self {
            registry,
            http_requests_total,
            http_request_duration_seconds,
            scheduler_transitions_total,
            scheduler_failures_total,
            scheduler_run_duration_seconds,
        }))
    }

    /// Export metrics in Prometheus text format
    pub fn export(&self) -> Result<String, Box<dyn std::error::Error>> {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        encoder.encode(&metric_families, &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }
}
