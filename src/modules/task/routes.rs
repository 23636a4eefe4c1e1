use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::controller;
use crate::AppState;

pub fn task_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/",
            post(controller::create_task)
                .get(controller::list_tasks)
                .delete(controller::delete_all_tasks),
        )
        .route("/search", get(controller::search_tasks))
        .route(
            "/{id}",
            get(controller::get_task)
                .patch(controller::update_task)
                .delete(controller::delete_task),
        )
        .route("/{id}/complete", post(controller::complete_task))
}
