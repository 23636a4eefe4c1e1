use axum::{routing::post, Router};
use std::sync::Arc;

use super::controller;
use crate::services::rate_limit::{create_rate_limiter, RateLimitLayer};
use crate::AppState;

pub fn mathematician_routes(rate_limit_burst: u32) -> Router<Arc<AppState>> {
    Router::new()
        .route("/register", post(controller::register_mathematician))
        .route("/login", post(controller::login_mathematician))
        .layer(RateLimitLayer::new(create_rate_limiter(rate_limit_burst)))
}

pub fn developer_routes(rate_limit_burst: u32) -> Router<Arc<AppState>> {
    Router::new()
        .route("/register", post(controller::register_developer))
        .route("/login", post(controller::login_developer))
        .layer(RateLimitLayer::new(create_rate_limiter(rate_limit_burst)))
}
