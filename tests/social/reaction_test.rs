use axum::http::StatusCode;
use serde_json::{json, Value};

use three_dimensions::modules::reaction::crud::ReactionCrud;
use three_dimensions::modules::reaction::{ReactionKind, ReactionTarget};

use crate::common::TestContext;

async fn react(ctx: &TestContext, token: &str, body: Value) -> Value {
    ctx.server
        .post("/reactions")
        .authorization_bearer(token)
        .json(&body)
        .await
        .json()
}

#[tokio::test]
async fn second_reaction_replaces_first_without_double_counting() {
    let ctx = TestContext::new().await;
    let alice = ctx.user_token("alice").await;
    let blog = ctx.create_blog(&alice, "React to me").await;

    let first = react(&ctx, &alice, json!({ "kind": "like", "blog_id": blog })).await;
    assert_eq!(first["data"]["created"], true);

    let second = react(&ctx, &alice, json!({ "kind": "love", "blog_id": blog })).await;
    assert_eq!(second["data"]["created"], false);
    assert_eq!(second["data"]["reaction"]["kind"], "love");

    let rows: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM reactions WHERE blog_id = ?")
        .bind(blog)
        .fetch_one(&ctx.db)
        .await
        .unwrap();
    assert_eq!(rows.0, 1);

    let summary: Value = ctx
        .server
        .get(&format!("/reactions/blogs/{}", blog))
        .authorization_bearer(&alice)
        .await
        .json();
    assert_eq!(summary["data"]["total"], 1);
    assert_eq!(summary["data"]["reactions"]["love"], 1);
    assert_eq!(summary["data"]["reactions"]["like"], 0);

    let blog_view: Value = ctx
        .server
        .get(&format!("/blogs/{}", blog))
        .authorization_bearer(&alice)
        .await
        .json();
    assert_eq!(blog_view["data"]["reacts_count"], 1);
}

#[tokio::test]
async fn reactions_from_different_users_accumulate() {
    let ctx = TestContext::new().await;
    let alice = ctx.user_token("alice").await;
    let bob = ctx.user_token("bob").await;
    let blog = ctx.create_blog(&alice, "Popular").await;

    react(&ctx, &alice, json!({ "kind": "wow", "blog_id": blog })).await;
    react(&ctx, &bob, json!({ "kind": "wow", "blog_id": blog })).await;

    let summary: Value = ctx
        .server
        .get(&format!("/reactions/blogs/{}", blog))
        .authorization_bearer(&bob)
        .await
        .json();
    assert_eq!(summary["data"]["reactions"]["wow"], 2);
    assert_eq!(summary["data"]["total"], 2);
}

#[tokio::test]
async fn comment_reactions_are_counted_on_the_comment() {
    let ctx = TestContext::new().await;
    let alice = ctx.user_token("alice").await;
    let blog = ctx.create_blog(&alice, "Topic").await;
    let created: Value = ctx
        .server
        .post("/comments")
        .authorization_bearer(&alice)
        .json(&json!({ "blog_id": blog, "content": "first" }))
        .await
        .json();
    let comment = created["data"]["id"].as_i64().unwrap();

    let body = react(&ctx, &alice, json!({ "kind": "laugh", "comment_id": comment })).await;
    assert_eq!(body["status"], "success");

    let view: Value = ctx
        .server
        .get(&format!("/comments/{}", comment))
        .authorization_bearer(&alice)
        .await
        .json();
    assert_eq!(view["data"]["reacts_count"], 1);
    assert_eq!(view["data"]["reactions"]["laugh"], 1);
}

#[tokio::test]
async fn invalid_kind_returns_bad_request() {
    let ctx = TestContext::new().await;
    let alice = ctx.user_token("alice").await;
    let blog = ctx.create_blog(&alice, "Topic").await;

    ctx.server
        .post("/reactions")
        .authorization_bearer(&alice)
        .json(&json!({ "kind": "meh", "blog_id": blog }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn exactly_one_target_is_required() {
    let ctx = TestContext::new().await;
    let alice = ctx.user_token("alice").await;

    ctx.server
        .post("/reactions")
        .authorization_bearer(&alice)
        .json(&json!({ "kind": "like", "blog_id": 1, "comment_id": 1 }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);
    ctx.server
        .post("/reactions")
        .authorization_bearer(&alice)
        .json(&json!({ "kind": "like" }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn reacting_to_missing_blog_is_soft_failure() {
    let ctx = TestContext::new().await;
    let alice = ctx.user_token("alice").await;

    let body = react(&ctx, &alice, json!({ "kind": "like", "blog_id": 404 })).await;

    assert_eq!(body["status"], "failure");
    assert_eq!(body["message"], "blog not found");
}

#[tokio::test]
async fn removing_reaction_decrements_counter() {
    let ctx = TestContext::new().await;
    let alice = ctx.user_token("alice").await;
    let blog = ctx.create_blog(&alice, "Topic").await;
    let body = react(&ctx, &alice, json!({ "kind": "sad", "blog_id": blog })).await;
    let id = body["data"]["reaction"]["id"].as_i64().unwrap();

    let removed: Value = ctx
        .server
        .delete(&format!("/reactions/{}", id))
        .authorization_bearer(&alice)
        .await
        .json();
    assert_eq!(removed["status"], "success");

    let view: Value = ctx
        .server
        .get(&format!("/blogs/{}", blog))
        .authorization_bearer(&alice)
        .await
        .json();
    assert_eq!(view["data"]["reacts_count"], 0);
}

#[tokio::test]
async fn concurrent_re_reacts_all_succeed_and_count_once() {
    let ctx = TestContext::on_disk().await;
    let registered = ctx.register("alice").await;
    let user_id = registered["data"]["id"].as_i64().unwrap();
    let alice = ctx.login("alice").await;
    let blog = ctx.create_blog(&alice, "Busy post").await;

    let mut reacts = tokio::task::JoinSet::new();
    for kind in ReactionKind::ALL.into_iter().chain(ReactionKind::ALL) {
        let crud = ReactionCrud::new(ctx.db.clone());
        reacts.spawn(async move { crud.upsert(user_id, ReactionTarget::Blog(blog), kind).await });
    }

    let mut created = 0;
    while let Some(outcome) = reacts.join_next().await {
        let (_, was_created) = outcome.unwrap().unwrap().expect("blog exists");
        if was_created {
            created += 1;
        }
    }
    assert_eq!(created, 1);

    let (rows, count): (i64, i64) = sqlx::query_as(
        "SELECT (SELECT COUNT(*) FROM reactions WHERE blog_id = b.id), b.reacts_count FROM blogs b WHERE b.id = ?",
    )
    .bind(blog)
    .fetch_one(&ctx.db)
    .await
    .unwrap();
    assert_eq!(rows, 1);
    assert_eq!(count, 1);

    ctx.remove_database_file().await;
}
