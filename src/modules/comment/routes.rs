use axum::{routing::get, Router};
use std::sync::Arc;

use super::controller;
use crate::AppState;

pub fn comment_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/",
            get(controller::list_comments)
                .post(controller::create_comment)
                .delete(controller::delete_all_comments),
        )
        .route("/search", get(controller::search_comments))
        .route("/discover", get(controller::discover_comments))
        .route(
            "/{id}",
            get(controller::get_comment)
                .patch(controller::update_comment)
                .delete(controller::delete_comment),
        )
}
