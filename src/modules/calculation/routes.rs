use axum::{routing::get, Router};
use std::sync::Arc;

use super::controller;
use crate::AppState;

pub fn calculation_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/",
            get(controller::list_calculations)
                .post(controller::calculate)
                .delete(controller::delete_all_calculations),
        )
        .route("/search", get(controller::search_calculations))
        .route("/recent", get(controller::recent_calculations))
        .route(
            "/{id}",
            get(controller::get_calculation).delete(controller::delete_calculation),
        )
}
