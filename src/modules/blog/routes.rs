use axum::{routing::get, Router};
use std::sync::Arc;

use super::controller;
use crate::AppState;

pub fn blog_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/",
            get(controller::list_blogs)
                .post(controller::create_blog)
                .delete(controller::delete_all_blogs),
        )
        .route("/search", get(controller::search_blogs))
        .route("/discover", get(controller::discover_blogs))
        .route(
            "/{id}",
            get(controller::get_blog)
                .patch(controller::update_blog)
                .delete(controller::delete_blog),
        )
}
