use axum::http::{header, HeaderValue, StatusCode};
use serde_json::{json, Value};

use crate::common::{test_password, TestContext};

#[tokio::test]
async fn refresh_with_cookie_issues_new_access_token() {
    let ctx = TestContext::new().await;
    ctx.register("alice").await;

    let login = ctx
        .server
        .post("/auth/login")
        .json(&json!({ "username": "alice", "password": test_password() }))
        .await;
    let cookie = login.cookie("refresh");

    let response = ctx.server.post("/auth/refresh").add_cookie(cookie).await;

    response.assert_status_ok();
    let body: Value = response.json();
    let access = body["data"]["access_token"].as_str().unwrap().to_string();
    assert!(!response.cookie("refresh").value().is_empty());

    ctx.server
        .get("/auth/me")
        .authorization_bearer(&access)
        .await
        .assert_status_ok();
}

#[tokio::test]
async fn refresh_without_cookie_returns_unauthorized() {
    let ctx = TestContext::new().await;

    ctx.server
        .post("/auth/refresh")
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn access_token_is_not_accepted_as_refresh_cookie() {
    let ctx = TestContext::new().await;
    let access = ctx.user_token("alice").await;

    let forged = HeaderValue::from_str(&format!("refresh={}", access)).unwrap();
    ctx.server
        .post("/auth/refresh")
        .add_header(header::COOKIE, forged)
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn refresh_for_deleted_account_returns_unauthorized() {
    let ctx = TestContext::new().await;
    ctx.register("alice").await;

    let login = ctx
        .server
        .post("/auth/login")
        .json(&json!({ "username": "alice", "password": test_password() }))
        .await;
    let cookie = login.cookie("refresh");

    sqlx::query("DELETE FROM users WHERE username = 'alice'")
        .execute(&ctx.db)
        .await
        .unwrap();

    ctx.server
        .post("/auth/refresh")
        .add_cookie(cookie)
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn logout_clears_refresh_cookie() {
    let ctx = TestContext::new().await;
    ctx.register("alice").await;

    let login = ctx
        .server
        .post("/auth/login")
        .json(&json!({ "username": "alice", "password": test_password() }))
        .await;
    let cookie = login.cookie("refresh");

    let response = ctx.server.post("/auth/logout").add_cookie(cookie).await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["message"], "logged out");
    assert_eq!(response.cookie("refresh").value(), "");
}
