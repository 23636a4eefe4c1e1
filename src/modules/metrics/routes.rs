use axum::{routing::get, Router};
use std::sync::Arc;

use super::controller::{get_metrics, health_check, root};
use crate::AppState;

pub fn metrics_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .route("/metrics", get(get_metrics))
}
