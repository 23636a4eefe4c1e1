use axum::{
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;

use super::controller;
use crate::AppState;

pub fn reaction_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", post(controller::react))
        .route("/blogs/{id}", get(controller::blog_summary))
        .route("/comments/{id}", get(controller::comment_summary))
        .route("/{id}", delete(controller::delete_reaction))
}
