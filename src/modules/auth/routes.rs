use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::controller;
use crate::services::rate_limit::{create_rate_limiter, RateLimitLayer};
use crate::AppState;

pub fn auth_routes(rate_limit_burst: u32) -> Router<Arc<AppState>> {
    let credentials = Router::new()
        .route("/register", post(controller::register))
        .route("/login", post(controller::login))
        .layer(RateLimitLayer::new(create_rate_limiter(rate_limit_burst)));

    Router::new()
        .merge(credentials)
        .route("/refresh", post(controller::refresh))
        .route("/logout", post(controller::logout))
        .route("/me", get(controller::me))
}
