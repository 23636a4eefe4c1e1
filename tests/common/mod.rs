use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{json, Value};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedReceiver;

use three_dimensions::config::{init_db, Config, DbPool};
use three_dimensions::services::metrics::MetricsRegistry;
use three_dimensions::services::notification::{Email, NotificationDispatcher};

pub const MATHEMATICIAN_SECRET: &str = "pythagoras";
pub const DEVELOPER_CODE: u32 = 20005;

// Allow dead_code for utilities used by other test files
#[allow(dead_code)]
pub struct TestContext {
    pub server: TestServer,
    pub db: DbPool,
    pub notifier: NotificationDispatcher,
    pub emails: UnboundedReceiver<Email>,
    pub metrics: Arc<MetricsRegistry>,
    pub db_path: Option<PathBuf>,
}

#[allow(dead_code)]
impl TestContext {
    pub async fn new() -> Self {
        // a single connection keeps the in-memory database alive and shared
        let options = SqliteConnectOptions::from_str("sqlite::memory:")
            .expect("Invalid SQLite URL")
            .foreign_keys(true);
        let db = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .expect("Failed to open in-memory database");

        sqlx::migrate!("./migrations")
            .run(&db)
            .await
            .expect("Failed to run migrations");

        Self::with_pool(db, None).await
    }

    /// Context over a pooled database file, for tests that need real
    /// concurrent connections.
    pub async fn on_disk() -> Self {
        let path = std::env::temp_dir().join(format!("td-test-{}.db", uuid::Uuid::new_v4()));
        let db = init_db(&format!("sqlite://{}", path.display()))
            .await
            .expect("Failed to open database file");

        Self::with_pool(db, Some(path)).await
    }

    async fn with_pool(db: DbPool, db_path: Option<PathBuf>) -> Self {
        let mut config = Config::with_defaults("sqlite::memory:", "test-secret-key-for-testing-only");
        config.mathematician_secrets = [MATHEMATICIAN_SECRET.to_string()].into_iter().collect();
        config.developer_codes = [DEVELOPER_CODE].into_iter().collect();
        config.auth_rate_limit_burst = 1000;

        let (notifier, emails) = NotificationDispatcher::channel();
        let metrics = MetricsRegistry::new().expect("Failed to create metrics registry");

        let app = three_dimensions::create_app(db.clone(), config, notifier.clone(), metrics.clone()).await;
        let server = TestServer::new(app).expect("Failed to create test server");

        Self {
            server,
            db,
            notifier,
            emails,
            metrics,
            db_path,
        }
    }

    /// Closes the pool and deletes the database file, if any.
    pub async fn remove_database_file(self) {
        self.db.close().await;
        if let Some(path) = self.db_path {
            for suffix in ["", "-wal", "-shm", "-journal"] {
                let _ = std::fs::remove_file(format!("{}{}", path.display(), suffix));
            }
        }
    }

    /// Emails queued so far, oldest first.
    pub fn drain_emails(&mut self) -> Vec<Email> {
        let mut emails = Vec::new();
        while let Ok(email) = self.emails.try_recv() {
            emails.push(email);
        }
        emails
    }

    pub async fn register(&self, username: &str) -> Value {
        let response = self
            .server
            .post("/auth/register")
            .json(&json!({
                "username": username,
                "email": format!("{}@example.com", username),
                "password": test_password(),
                "name": format!("{} Tester", username),
                "age": 30,
                "nationality": "Ghana"
            }))
            .await;
        response.assert_status(StatusCode::CREATED);
        response.json()
    }

    pub async fn login(&self, username: &str) -> String {
        let response = self
            .server
            .post("/auth/login")
            .json(&json!({ "username": username, "password": test_password() }))
            .await;
        response.assert_status_ok();
        let body: Value = response.json();
        body["data"]["access_token"]
            .as_str()
            .expect("access_token missing")
            .to_string()
    }

    /// Registers and logs in a fresh user, returning the bearer token.
    pub async fn user_token(&self, username: &str) -> String {
        self.register(username).await;
        self.login(username).await
    }

    pub async fn mathematician_token(&self, name: &str) -> String {
        let credentials = json!({ "name": name, "secret": MATHEMATICIAN_SECRET });
        self.server
            .post("/mathematicians/register")
            .json(&credentials)
            .await
            .assert_status(StatusCode::CREATED);
        let body: Value = self
            .server
            .post("/mathematicians/login")
            .json(&credentials)
            .await
            .json();
        body["data"]["access_token"].as_str().expect("access_token missing").to_string()
    }

    pub async fn developer_token(&self, name: &str) -> String {
        let credentials = json!({ "name": name, "code": DEVELOPER_CODE });
        self.server
            .post("/developers/register")
            .json(&credentials)
            .await
            .assert_status(StatusCode::CREATED);
        let body: Value = self
            .server
            .post("/developers/login")
            .json(&credentials)
            .await
            .json();
        body["data"]["access_token"].as_str().expect("access_token missing").to_string()
    }

    pub async fn create_blog(&self, token: &str, title: &str) -> i64 {
        let response = self
            .server
            .post("/blogs")
            .authorization_bearer(token)
            .json(&json!({ "title": title, "content": "Some thoughts worth sharing" }))
            .await;
        response.assert_status(StatusCode::CREATED);
        let body: Value = response.json();
        body["data"]["id"].as_i64().expect("blog id missing")
    }
}

#[allow(dead_code)]
pub fn test_password() -> &'static str {
    "TestPassword123!"
}
