use axum::http::StatusCode;
use serde_json::{json, Value};

use crate::common::TestContext;

async fn evaluate(ctx: &TestContext, token: &str, essentials: f64, extras: f64, income: f64) -> Value {
    let response = ctx
        .server
        .post("/priorities")
        .authorization_bearer(token)
        .json(&json!({ "essentials": essentials, "extras": extras, "income": income }))
        .await;
    response.assert_status(StatusCode::CREATED);
    response.json()
}

#[tokio::test]
async fn verdicts_follow_budget_rules() {
    let ctx = TestContext::new().await;
    let token = ctx.user_token("alice").await;

    let danger = evaluate(&ctx, &token, 800.0, 300.0, 1000.0).await;
    assert_eq!(danger["data"]["verdict"], "danger");
    assert_eq!(danger["message"], "your budget will put you in debt");

    let no_savings = evaluate(&ctx, &token, 600.0, 400.0, 1000.0).await;
    assert_eq!(no_savings["data"]["verdict"], "unsafe");

    let heavy_extras = evaluate(&ctx, &token, 100.0, 500.0, 1000.0).await;
    assert_eq!(heavy_extras["data"]["verdict"], "unsafe");

    let perfect = evaluate(&ctx, &token, 300.0, 200.0, 1000.0).await;
    assert_eq!(perfect["data"]["verdict"], "perfect");
    assert_eq!(perfect["data"]["detail"], "savings after budget: 500");

    let okay = evaluate(&ctx, &token, 700.0, 150.0, 1000.0).await;
    assert_eq!(okay["data"]["verdict"], "okay");
}

#[tokio::test]
async fn search_by_verdict() {
    let ctx = TestContext::new().await;
    let token = ctx.user_token("alice").await;
    evaluate(&ctx, &token, 800.0, 300.0, 1000.0).await;
    evaluate(&ctx, &token, 900.0, 300.0, 1000.0).await;
    evaluate(&ctx, &token, 300.0, 200.0, 1000.0).await;

    let danger: Value = ctx
        .server
        .get("/priorities/search?verdict=danger")
        .authorization_bearer(&token)
        .await
        .json();
    assert_eq!(danger["data"]["pagination"]["total"], 2);

    ctx.server
        .get("/priorities/search?verdict=splendid")
        .authorization_bearer(&token)
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn negative_amounts_are_rejected() {
    let ctx = TestContext::new().await;
    let token = ctx.user_token("alice").await;

    ctx.server
        .post("/priorities")
        .authorization_bearer(&token)
        .json(&json!({ "essentials": -1.0, "extras": 0.0, "income": 100.0 }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn get_and_delete_are_owner_scoped() {
    let ctx = TestContext::new().await;
    let alice = ctx.user_token("alice").await;
    let bob = ctx.user_token("bob").await;
    let created = evaluate(&ctx, &alice, 300.0, 200.0, 1000.0).await;
    let id = created["data"]["id"].as_i64().unwrap();

    let other: Value = ctx
        .server
        .delete(&format!("/priorities/{}", id))
        .authorization_bearer(&bob)
        .await
        .json();
    assert_eq!(other["status"], "failure");

    let own: Value = ctx
        .server
        .get(&format!("/priorities/{}", id))
        .authorization_bearer(&alice)
        .await
        .json();
    assert_eq!(own["data"]["verdict"], "perfect");

    let wiped: Value = ctx.server.delete("/priorities").authorization_bearer(&alice).await.json();
    assert_eq!(wiped["data"], 1);
}
