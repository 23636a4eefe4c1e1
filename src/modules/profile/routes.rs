use axum::{routing::get, Router};
use std::sync::Arc;

use super::controller;
use crate::AppState;

pub fn profile_routes() -> Router<Arc<AppState>> {
    Router::new().route("/", get(controller::view_profile))
}
