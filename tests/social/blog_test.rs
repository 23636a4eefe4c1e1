use axum::http::StatusCode;
use serde_json::{json, Value};

use crate::common::TestContext;

#[tokio::test]
async fn create_blog_starts_with_zeroed_counters() {
    let ctx = TestContext::new().await;
    let token = ctx.user_token("alice").await;
    let id = ctx.create_blog(&token, "Hello world").await;

    let body: Value = ctx
        .server
        .get(&format!("/blogs/{}", id))
        .authorization_bearer(&token)
        .await
        .json();

    let blog = &body["data"];
    assert_eq!(blog["title"], "Hello world");
    assert_eq!(blog["author"], "alice Tester");
    assert_eq!(blog["comments_count"], 0);
    assert_eq!(blog["share_count"], 0);
    assert_eq!(blog["reacts_count"], 0);
    assert_eq!(blog["reactions"]["like"], 0);
}

#[tokio::test]
async fn create_blog_without_title_returns_bad_request() {
    let ctx = TestContext::new().await;
    let token = ctx.user_token("alice").await;

    ctx.server
        .post("/blogs")
        .authorization_bearer(&token)
        .json(&json!({ "title": "", "content": "body" }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn blogs_are_readable_by_other_users() {
    let ctx = TestContext::new().await;
    let alice = ctx.user_token("alice").await;
    let bob = ctx.user_token("bob").await;
    ctx.create_blog(&alice, "Public thoughts").await;

    let body: Value = ctx.server.get("/blogs").authorization_bearer(&bob).await.json();

    assert_eq!(body["data"]["pagination"]["total"], 1);
    assert_eq!(body["data"]["items"][0]["title"], "Public thoughts");
}

#[tokio::test]
async fn only_the_owner_can_update_or_delete() {
    let ctx = TestContext::new().await;
    let alice = ctx.user_token("alice").await;
    let bob = ctx.user_token("bob").await;
    let id = ctx.create_blog(&alice, "Mine").await;

    let hijack: Value = ctx
        .server
        .patch(&format!("/blogs/{}", id))
        .authorization_bearer(&bob)
        .json(&json!({ "title": "Hijacked" }))
        .await
        .json();
    assert_eq!(hijack["status"], "failure");

    let removed: Value = ctx
        .server
        .delete(&format!("/blogs/{}", id))
        .authorization_bearer(&bob)
        .await
        .json();
    assert_eq!(removed["status"], "failure");

    let updated: Value = ctx
        .server
        .patch(&format!("/blogs/{}", id))
        .authorization_bearer(&alice)
        .json(&json!({ "title": "Still mine" }))
        .await
        .json();
    assert_eq!(updated["data"]["title"], "Still mine");
    assert_eq!(updated["data"]["content"], "Some thoughts worth sharing");
}

#[tokio::test]
async fn search_by_title_and_author() {
    let ctx = TestContext::new().await;
    let alice = ctx.user_token("alice").await;
    let bob = ctx.user_token("bob").await;
    ctx.create_blog(&alice, "Rust tips").await;
    ctx.create_blog(&bob, "Rust tricks").await;
    ctx.create_blog(&bob, "Cooking").await;

    let by_title: Value = ctx
        .server
        .get("/blogs/search?title=rust")
        .authorization_bearer(&alice)
        .await
        .json();
    assert_eq!(by_title["data"]["pagination"]["total"], 2);

    let by_both: Value = ctx
        .server
        .get("/blogs/search?title=rust&author=bob")
        .authorization_bearer(&alice)
        .await
        .json();
    assert_eq!(by_both["data"]["pagination"]["total"], 1);
    assert_eq!(by_both["data"]["items"][0]["title"], "Rust tricks");
}

#[tokio::test]
async fn discover_popular_orders_by_engagement() {
    let ctx = TestContext::new().await;
    let alice = ctx.user_token("alice").await;
    let quiet = ctx.create_blog(&alice, "Quiet").await;
    let loud = ctx.create_blog(&alice, "Loud").await;
    assert!(quiet < loud);

    ctx.server
        .post("/comments")
        .authorization_bearer(&alice)
        .json(&json!({ "blog_id": quiet, "content": "first" }))
        .await;
    for content in ["a", "b"] {
        ctx.server
            .post("/comments")
            .authorization_bearer(&alice)
            .json(&json!({ "blog_id": loud, "content": content }))
            .await;
    }

    let popular: Value = ctx
        .server
        .get("/blogs/discover?sorting=popular")
        .authorization_bearer(&alice)
        .await
        .json();
    assert_eq!(popular["data"]["items"][0]["title"], "Loud");

    let unknown = ctx
        .server
        .get("/blogs/discover?sorting=sideways")
        .authorization_bearer(&alice)
        .await;
    assert!(unknown.status_code().is_client_error());
}

#[tokio::test]
async fn delete_all_removes_only_own_blogs() {
    let ctx = TestContext::new().await;
    let alice = ctx.user_token("alice").await;
    let bob = ctx.user_token("bob").await;
    ctx.create_blog(&alice, "a1").await;
    ctx.create_blog(&alice, "a2").await;
    ctx.create_blog(&bob, "b1").await;

    let wiped: Value = ctx
        .server
        .delete("/blogs")
        .authorization_bearer(&alice)
        .await
        .json();
    assert_eq!(wiped["data"], 2);

    let remaining: Value = ctx.server.get("/blogs").authorization_bearer(&alice).await.json();
    assert_eq!(remaining["data"]["pagination"]["total"], 1);
}
