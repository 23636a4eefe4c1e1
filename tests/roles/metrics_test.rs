use serde_json::Value;

use crate::common::TestContext;

#[tokio::test]
async fn health_reports_ok_and_version() {
    let ctx = TestContext::new().await;

    let response = ctx.server.get("/health").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn metrics_endpoint_exposes_normalised_request_counts() {
    let ctx = TestContext::new().await;
    let token = ctx.user_token("alice").await;
    ctx.server.get("/tasks/42").authorization_bearer(&token).await;

    let response = ctx.server.get("/metrics").await;

    response.assert_status_ok();
    let text = response.text();
    assert!(text.contains("td_http_requests_total"));
    assert!(text.contains("endpoint=\"/tasks/:id\""));
}
