use axum::{routing::get, Router};
use std::sync::Arc;

use super::controller;
use crate::AppState;

pub fn market_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/",
            get(controller::list_markets)
                .post(controller::create_market)
                .delete(controller::delete_all_markets),
        )
        .route("/search", get(controller::search_markets))
        .route("/sections/{section}", get(controller::get_section))
        .route(
            "/{id}",
            get(controller::get_market)
                .patch(controller::update_market)
                .delete(controller::delete_market),
        )
}
