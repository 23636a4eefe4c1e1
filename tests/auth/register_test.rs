use axum::http::StatusCode;
use serde_json::{json, Value};

use crate::common::{test_password, TestContext};

#[tokio::test]
async fn register_creates_account_and_queues_welcome_email() {
    let mut ctx = TestContext::new().await;

    let body = ctx.register("alice").await;
    assert_eq!(body["status"], "success");
    assert_eq!(body["data"]["username"], "alice");
    assert_eq!(body["data"]["nationality"], "Ghana");
    assert!(body["data"]["id"].as_i64().is_some());

    let emails = ctx.drain_emails();
    assert_eq!(emails.len(), 1);
    assert_eq!(emails[0].to, "alice@example.com");
    assert_eq!(emails[0].subject, "Registered successfully");
}

#[tokio::test]
async fn register_never_returns_password_material() {
    let ctx = TestContext::new().await;
    let body = ctx.register("alice").await;

    let raw = body.to_string();
    assert!(!raw.contains("password"));
    assert!(!raw.contains("argon2"));
}

#[tokio::test]
async fn register_with_duplicate_username_returns_conflict() {
    let ctx = TestContext::new().await;
    ctx.register("alice").await;

    let response = ctx
        .server
        .post("/auth/register")
        .json(&json!({
            "username": "alice",
            "email": "other@example.com",
            "password": test_password(),
            "name": "Another Alice",
            "age": 22,
            "nationality": "Kenya"
        }))
        .await;

    response.assert_status(StatusCode::CONFLICT);
    let body: Value = response.json();
    assert!(body["detail"].is_string());
}

#[tokio::test]
async fn register_with_duplicate_email_returns_conflict() {
    let ctx = TestContext::new().await;
    ctx.register("alice").await;

    let response = ctx
        .server
        .post("/auth/register")
        .json(&json!({
            "username": "alice2",
            "email": "alice@example.com",
            "password": test_password(),
            "name": "Alice Two",
            "age": 22,
            "nationality": "Kenya"
        }))
        .await;

    response.assert_status(StatusCode::CONFLICT);
}

#[tokio::test]
async fn register_with_short_password_returns_bad_request() {
    let ctx = TestContext::new().await;

    let response = ctx
        .server
        .post("/auth/register")
        .json(&json!({
            "username": "bob",
            "email": "bob@example.com",
            "password": "short",
            "name": "Bob",
            "age": 40,
            "nationality": "Nigeria"
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn register_with_invalid_email_returns_bad_request() {
    let ctx = TestContext::new().await;

    let response = ctx
        .server
        .post("/auth/register")
        .json(&json!({
            "username": "bob",
            "email": "not-an-email",
            "password": test_password(),
            "name": "Bob",
            "age": 40,
            "nationality": "Nigeria"
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}
