use axum::http::StatusCode;

use crate::common::TestContext;

#[tokio::test]
async fn protected_route_without_token_returns_unauthorized() {
    let ctx = TestContext::new().await;

    ctx.server.get("/tasks").await.assert_status(StatusCode::UNAUTHORIZED);
    ctx.server.get("/auth/me").await.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn garbage_token_returns_unauthorized() {
    let ctx = TestContext::new().await;

    ctx.server
        .get("/tasks")
        .authorization_bearer("not.a.token")
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn user_token_is_forbidden_on_other_role_routes() {
    let ctx = TestContext::new().await;
    let token = ctx.user_token("alice").await;

    ctx.server
        .get("/calculations")
        .authorization_bearer(&token)
        .await
        .assert_status(StatusCode::FORBIDDEN);
    ctx.server
        .get("/markets")
        .authorization_bearer(&token)
        .await
        .assert_status(StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn role_tokens_are_forbidden_on_user_routes() {
    let ctx = TestContext::new().await;
    let math = ctx.mathematician_token("euclid").await;
    let dev = ctx.developer_token("ada").await;

    ctx.server
        .get("/tasks")
        .authorization_bearer(&math)
        .await
        .assert_status(StatusCode::FORBIDDEN);
    ctx.server
        .get("/calculations")
        .authorization_bearer(&dev)
        .await
        .assert_status(StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn responses_carry_security_headers() {
    let ctx = TestContext::new().await;

    let response = ctx.server.get("/health").await;

    response.assert_status_ok();
    assert_eq!(response.header("x-content-type-options"), "nosniff");
    assert_eq!(response.header("x-frame-options"), "DENY");
}
