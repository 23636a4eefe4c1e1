use axum::http::StatusCode;
use serde_json::{json, Value};

use crate::common::TestContext;

async fn create_task(ctx: &TestContext, token: &str, description: &str, days: i64) -> Value {
    let response = ctx
        .server
        .post("/tasks")
        .authorization_bearer(token)
        .json(&json!({ "description": description, "days_to_execution": days }))
        .await;
    response.assert_status(StatusCode::CREATED);
    let body: Value = response.json();
    body["data"].clone()
}

#[tokio::test]
async fn create_task_starts_pending_and_incomplete() {
    let ctx = TestContext::new().await;
    let token = ctx.user_token("alice").await;

    let task = create_task(&ctx, &token, "write report", 3).await;

    assert_eq!(task["description"], "write report");
    assert_eq!(task["status"], "pending");
    assert_eq!(task["complete"], false);
    assert_eq!(task["days_to_execution"], 3);
}

#[tokio::test]
async fn create_task_with_empty_description_returns_bad_request() {
    let ctx = TestContext::new().await;
    let token = ctx.user_token("alice").await;

    ctx.server
        .post("/tasks")
        .authorization_bearer(&token)
        .json(&json!({ "description": "", "days_to_execution": 1 }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn list_tasks_paginates_with_total() {
    let ctx = TestContext::new().await;
    let token = ctx.user_token("alice").await;
    for i in 0..15 {
        create_task(&ctx, &token, &format!("task {}", i), 2).await;
    }

    let first: Value = ctx
        .server
        .get("/tasks")
        .authorization_bearer(&token)
        .await
        .json();
    assert_eq!(first["data"]["items"].as_array().unwrap().len(), 10);
    assert_eq!(first["data"]["pagination"]["total"], 15);
    assert_eq!(first["data"]["pagination"]["page"], 1);

    let second: Value = ctx
        .server
        .get("/tasks?page=2&limit=10")
        .authorization_bearer(&token)
        .await
        .json();
    assert_eq!(second["data"]["items"].as_array().unwrap().len(), 5);
    assert_eq!(second["data"]["pagination"]["total"], 15);
}

#[tokio::test]
async fn list_tasks_rejects_out_of_range_limit() {
    let ctx = TestContext::new().await;
    let token = ctx.user_token("alice").await;

    ctx.server
        .get("/tasks?limit=500")
        .authorization_bearer(&token)
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn list_tasks_rejects_page_past_the_offset_range() {
    let ctx = TestContext::new().await;
    let token = ctx.user_token("alice").await;

    ctx.server
        .get("/tasks?page=9223372036854775807&limit=100")
        .authorization_bearer(&token)
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn tasks_are_scoped_to_their_owner() {
    let ctx = TestContext::new().await;
    let alice = ctx.user_token("alice").await;
    let bob = ctx.user_token("bob").await;
    let task = create_task(&ctx, &alice, "secret plan", 2).await;
    let id = task["id"].as_i64().unwrap();

    let body: Value = ctx
        .server
        .get(&format!("/tasks/{}", id))
        .authorization_bearer(&bob)
        .await
        .json();
    assert_eq!(body["status"], "failure");
    assert!(body.get("data").is_none());

    let listed: Value = ctx.server.get("/tasks").authorization_bearer(&bob).await.json();
    assert_eq!(listed["data"]["pagination"]["total"], 0);
}

#[tokio::test]
async fn search_matches_description_case_insensitively() {
    let ctx = TestContext::new().await;
    let token = ctx.user_token("alice").await;
    create_task(&ctx, &token, "Buy Groceries", 1).await;
    create_task(&ctx, &token, "call mum", 1).await;

    let body: Value = ctx
        .server
        .get("/tasks/search?description=groc")
        .authorization_bearer(&token)
        .await
        .json();

    let items = body["data"]["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["description"], "Buy Groceries");
}

#[tokio::test]
async fn update_changes_description() {
    let ctx = TestContext::new().await;
    let token = ctx.user_token("alice").await;
    let task = create_task(&ctx, &token, "draft", 2).await;
    let id = task["id"].as_i64().unwrap();

    let body: Value = ctx
        .server
        .patch(&format!("/tasks/{}", id))
        .authorization_bearer(&token)
        .json(&json!({ "description": "final" }))
        .await
        .json();

    assert_eq!(body["status"], "success");
    assert_eq!(body["data"]["description"], "final");
}

#[tokio::test]
async fn complete_marks_pending_task_complete() {
    let ctx = TestContext::new().await;
    let token = ctx.user_token("alice").await;
    let task = create_task(&ctx, &token, "ship it", 2).await;
    let id = task["id"].as_i64().unwrap();

    let body: Value = ctx
        .server
        .post(&format!("/tasks/{}/complete", id))
        .authorization_bearer(&token)
        .await
        .json();

    assert_eq!(body["status"], "success");
    assert_eq!(body["data"]["complete"], true);
}

#[tokio::test]
async fn complete_rejects_overdue_task() {
    let ctx = TestContext::new().await;
    let token = ctx.user_token("alice").await;
    let task = create_task(&ctx, &token, "too late", -1).await;
    let id = task["id"].as_i64().unwrap();

    let body: Value = ctx
        .server
        .post(&format!("/tasks/{}/complete", id))
        .authorization_bearer(&token)
        .await
        .json();

    assert_eq!(body["status"], "failure");
}

#[tokio::test]
async fn filter_by_complete_flag() {
    let ctx = TestContext::new().await;
    let token = ctx.user_token("alice").await;
    let done = create_task(&ctx, &token, "done", 2).await;
    create_task(&ctx, &token, "open", 2).await;
    ctx.server
        .post(&format!("/tasks/{}/complete", done["id"]))
        .authorization_bearer(&token)
        .await;

    let body: Value = ctx
        .server
        .get("/tasks?complete=true")
        .authorization_bearer(&token)
        .await
        .json();

    let items = body["data"]["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["description"], "done");
}

#[tokio::test]
async fn delete_one_then_delete_all() {
    let ctx = TestContext::new().await;
    let token = ctx.user_token("alice").await;
    let first = create_task(&ctx, &token, "one", 1).await;
    create_task(&ctx, &token, "two", 1).await;
    create_task(&ctx, &token, "three", 1).await;

    let deleted: Value = ctx
        .server
        .delete(&format!("/tasks/{}", first["id"]))
        .authorization_bearer(&token)
        .await
        .json();
    assert_eq!(deleted["status"], "success");

    let again: Value = ctx
        .server
        .delete(&format!("/tasks/{}", first["id"]))
        .authorization_bearer(&token)
        .await
        .json();
    assert_eq!(again["status"], "failure");

    let wiped: Value = ctx
        .server
        .delete("/tasks")
        .authorization_bearer(&token)
        .await
        .json();
    assert_eq!(wiped["data"], 2);
}
