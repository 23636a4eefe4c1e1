use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;
use std::time::Instant;

use super::MetricsRegistry;

/// Records request count and latency, and writes one access-log line per request.
pub async fn metrics_middleware(
    State(metrics): State<Arc<MetricsRegistry>>,
    req: Request,
    next: Next,
) -> Response {
    let start = Instant::now();
    let method = req.method().to_string();
    let path = normalize_path(req.uri().path());

    let response = next.run(req).await;

    let duration = start.elapsed().as_secs_f64();
    let status = response.status().as_u16();

    metrics
        .http_requests_total
        .with_label_values(&[&method, &path, &status.to_string()])
        .inc();

    metrics
        .http_request_duration_seconds
        .with_label_values(&[&method, &path])
        .observe(duration);

    let duration_ms = (duration * 1000.0) as u64;
    if status >= 500 {
        tracing::error!(method = %method, path = %path, status, duration_ms, "request failed");
    } else {
        tracing::info!(method = %method, path = %path, status, duration_ms, "request handled");
    }

    response
}

/// Normalize path to reduce cardinality
/// Converts /tasks/123 -> /tasks/:id
fn normalize_path(path: &str) -> String {
    let normalized: Vec<&str> = path
        .split('/')
        .filter(|segment| !segment.is_empty())
        .map(|segment| if is_id_like(segment) { ":id" } else { segment })
        .collect();

    format!("/{}", normalized.join("/"))
}

fn is_id_like(segment: &str) -> bool {
    // UUID
    if segment.len() == 36 && segment.chars().filter(|c| *c == '-').count() == 4 {
        return true;
    }

    segment.chars().all(|c| c.is_ascii_digit())
}
