use axum::{routing::get, Router};
use std::sync::Arc;

use super::controller;
use crate::AppState;

pub fn share_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/",
            get(controller::list_shares)
                .post(controller::create_share)
                .delete(controller::delete_all_shares),
        )
        .route(
            "/{id}",
            get(controller::get_share).delete(controller::delete_share),
        )
}
