pub mod config;
pub mod error;
pub mod modules;
pub mod services;

use axum::{
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    Json, Router,
};
use std::any::Any;
use std::sync::Arc;
use tower_http::{
    catch_panic::CatchPanicLayer, cors::CorsLayer, limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};

use config::{Config, DbPool};
use error::ErrorResponse;
use modules::{
    auth::auth_routes,
    blog::blog_routes,
    calculation::calculation_routes,
    comment::comment_routes,
    expense::expense_routes,
    identity::{developer_routes, mathematician_routes},
    market::market_routes,
    metrics::metrics_routes,
    priority::priority_routes,
    profile::profile_routes,
    reaction::reaction_routes,
    share::share_routes,
    task::task_routes,
};
use services::jwt::JwtService;
use services::metrics::{metrics_middleware, MetricsRegistry};
use services::notification::NotificationDispatcher;
use services::security::security_headers;

pub struct AppState {
    pub db: DbPool,
    pub jwt_service: JwtService,
    pub config: Config,
    pub notifier: NotificationDispatcher,
    pub metrics: Arc<MetricsRegistry>,
}

pub async fn create_app(
    db: DbPool,
    config: Config,
    notifier: NotificationDispatcher,
    metrics: Arc<MetricsRegistry>,
) -> Router {
    let jwt_service = JwtService::new(
        config.jwt_secret.clone(),
        config.access_token_minutes,
        config.refresh_token_days,
    );
    let burst = config.auth_rate_limit_burst;

    let state = Arc::new(AppState {
        db,
        jwt_service,
        config,
        notifier,
        metrics: metrics.clone(),
    });

    Router::new()
        .merge(metrics_routes())
        .nest("/auth", auth_routes(burst))
        .nest("/mathematicians", mathematician_routes(burst))
        .nest("/developers", developer_routes(burst))
        .nest("/tasks", task_routes())
        .nest("/blogs", blog_routes())
        .nest("/comments", comment_routes())
        .nest("/reactions", reaction_routes())
        .nest("/shares", share_routes())
        .nest("/calculations", calculation_routes())
        .nest("/markets", market_routes())
        .nest("/expenses", expense_routes())
        .nest("/priorities", priority_routes())
        .nest("/profile", profile_routes())
        .layer(middleware::from_fn(security_headers))
        .layer(RequestBodyLimitLayer::new(1024 * 100)) // 100KB max body
        .layer(middleware::from_fn_with_state(metrics, metrics_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(CatchPanicLayer::custom(handle_panic))
        .with_state(state)
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let reason = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    tracing::error!(reason, "handler panicked");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::new("internal server error")),
    )
        .into_response()
}
