use axum::{routing::get, Router};
use std::sync::Arc;

use super::controller;
use crate::AppState;

pub fn expense_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/",
            get(controller::list_expenses)
                .post(controller::create_expense)
                .delete(controller::delete_all_expenses),
        )
        .route(
            "/{id}",
            get(controller::get_expense).delete(controller::delete_expense),
        )
}
