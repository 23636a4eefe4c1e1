use axum::http::StatusCode;
use serde_json::{json, Value};

use crate::common::TestContext;

async fn share_count(ctx: &TestContext, token: &str, blog_id: i64) -> i64 {
    let body: Value = ctx
        .server
        .get(&format!("/blogs/{}", blog_id))
        .authorization_bearer(token)
        .await
        .json();
    body["data"]["share_count"].as_i64().unwrap()
}

#[tokio::test]
async fn share_increments_and_delete_decrements_counter() {
    let ctx = TestContext::new().await;
    let alice = ctx.user_token("alice").await;
    let bob = ctx.user_token("bob").await;
    let blog = ctx.create_blog(&alice, "Shareable").await;

    let response = ctx
        .server
        .post("/shares")
        .authorization_bearer(&bob)
        .json(&json!({ "blog_id": blog, "content": "look at this", "kind": "wow" }))
        .await;
    response.assert_status(StatusCode::CREATED);
    let body: Value = response.json();
    assert_eq!(body["data"]["kind"], "wow");
    assert_eq!(share_count(&ctx, &alice, blog).await, 1);

    let id = body["data"]["id"].as_i64().unwrap();
    let own: Value = ctx
        .server
        .get(&format!("/shares/{}", id))
        .authorization_bearer(&bob)
        .await
        .json();
    assert_eq!(own["status"], "success");

    let others: Value = ctx
        .server
        .get(&format!("/shares/{}", id))
        .authorization_bearer(&alice)
        .await
        .json();
    assert_eq!(others["status"], "failure");

    ctx.server
        .delete(&format!("/shares/{}", id))
        .authorization_bearer(&bob)
        .await
        .assert_status_ok();
    assert_eq!(share_count(&ctx, &alice, blog).await, 0);
}

#[tokio::test]
async fn unknown_share_kind_returns_bad_request() {
    let ctx = TestContext::new().await;
    let alice = ctx.user_token("alice").await;
    let blog = ctx.create_blog(&alice, "Shareable").await;

    ctx.server
        .post("/shares")
        .authorization_bearer(&alice)
        .json(&json!({ "blog_id": blog, "kind": "like" }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn sharing_missing_blog_is_soft_failure() {
    let ctx = TestContext::new().await;
    let alice = ctx.user_token("alice").await;

    let body: Value = ctx
        .server
        .post("/shares")
        .authorization_bearer(&alice)
        .json(&json!({ "blog_id": 77 }))
        .await
        .json();

    assert_eq!(body["status"], "failure");
}

#[tokio::test]
async fn list_and_delete_all_are_owner_scoped() {
    let ctx = TestContext::new().await;
    let alice = ctx.user_token("alice").await;
    let bob = ctx.user_token("bob").await;
    let blog = ctx.create_blog(&alice, "Shareable").await;
    for who in [&alice, &bob, &bob] {
        ctx.server
            .post("/shares")
            .authorization_bearer(who)
            .json(&json!({ "blog_id": blog }))
            .await;
    }

    let listed: Value = ctx.server.get("/shares").authorization_bearer(&bob).await.json();
    assert_eq!(listed["data"]["pagination"]["total"], 2);

    let wiped: Value = ctx.server.delete("/shares").authorization_bearer(&bob).await.json();
    assert_eq!(wiped["data"], 2);
    assert_eq!(share_count(&ctx, &alice, blog).await, 1);
}
