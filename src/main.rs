use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use three_dimensions::config::{init_db, Config};
use three_dimensions::services::metrics::MetricsRegistry;
use three_dimensions::services::notification::{
    LogMailer, Mailer, NotificationDispatcher, SendGridMailer,
};
use three_dimensions::services::scheduler::TaskScheduler;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "three_dimensions=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().expect("Failed to load environment configuration");

    let db = init_db(&config.database_url)
        .await
        .expect("Failed to initialize database");
    tracing::info!("Connected to SQLite");

    let metrics = MetricsRegistry::new().expect("Failed to register metrics");

    let mailer: Arc<dyn Mailer> = match (&config.sendgrid_api_key, &config.sendgrid_sender) {
        (Some(key), Some(sender)) => {
            tracing::info!(sender = %sender, "email delivery via SendGrid");
            Arc::new(SendGridMailer::new(key.clone(), sender.clone()))
        }
        _ => {
            tracing::warn!("SENDGRID_API_KEY or SENDGRID_SENDER unset, emails will only be logged");
            Arc::new(LogMailer)
        }
    };
    let notifier = NotificationDispatcher::spawn(mailer);

    let scheduler = TaskScheduler::new(
        db.clone(),
        notifier.clone(),
        Duration::from_secs(config.scheduler_interval_secs.max(1)),
        metrics.clone(),
    );
    tokio::spawn(async move { scheduler.run().await });

    let bind_addr = config.bind_addr.clone();
    let app = three_dimensions::create_app(db, config, notifier, metrics).await;

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .expect("Failed to bind listener");
    tracing::info!("Server running on http://{}", bind_addr);
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .expect("Server error");
}
