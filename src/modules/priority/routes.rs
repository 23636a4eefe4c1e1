use axum::{routing::get, Router};
use std::sync::Arc;

use super::controller;
use crate::AppState;

pub fn priority_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/",
            get(controller::list_priorities)
                .post(controller::create_priority)
                .delete(controller::delete_all_priorities),
        )
        .route("/search", get(controller::search_priorities))
        .route(
            "/{id}",
            get(controller::get_priority).delete(controller::delete_priority),
        )
}
