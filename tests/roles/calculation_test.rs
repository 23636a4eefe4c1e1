use axum::http::StatusCode;
use serde_json::{json, Value};

use crate::common::TestContext;

#[tokio::test]
async fn add_folds_operands_and_persists_normalised_input() {
    let ctx = TestContext::new().await;
    let token = ctx.mathematician_token("euclid").await;

    let response = ctx
        .server
        .post("/calculations")
        .authorization_bearer(&token)
        .json(&json!({ "operation": "add", "numbers": "1, 2,3" }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let body: Value = response.json();
    assert_eq!(body["data"]["result"], 6.0);
    assert_eq!(body["data"]["operation"], "add");
    assert_eq!(body["data"]["numbers"], "1,2,3");
}

#[tokio::test]
async fn division_by_zero_is_rejected_and_not_stored() {
    let ctx = TestContext::new().await;
    let token = ctx.mathematician_token("euclid").await;

    let response = ctx
        .server
        .post("/calculations")
        .authorization_bearer(&token)
        .json(&json!({ "operation": "divide", "numbers": "10,0" }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let (rows,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM calculations")
        .fetch_one(&ctx.db)
        .await
        .unwrap();
    assert_eq!(rows, 0);
}

#[tokio::test]
async fn unsupported_operation_and_bad_operand_are_rejected() {
    let ctx = TestContext::new().await;
    let token = ctx.mathematician_token("euclid").await;

    ctx.server
        .post("/calculations")
        .authorization_bearer(&token)
        .json(&json!({ "operation": "modulo", "numbers": "1,2" }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);
    ctx.server
        .post("/calculations")
        .authorization_bearer(&token)
        .json(&json!({ "operation": "add", "numbers": "1,two" }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn search_recent_and_delete() {
    let ctx = TestContext::new().await;
    let token = ctx.mathematician_token("euclid").await;
    for (operation, numbers) in [("add", "1,1"), ("times", "2,3"), ("add", "5,5"), ("sqrt", "16")] {
        ctx.server
            .post("/calculations")
            .authorization_bearer(&token)
            .json(&json!({ "operation": operation, "numbers": numbers }))
            .await
            .assert_status(StatusCode::CREATED);
    }

    let adds: Value = ctx
        .server
        .get("/calculations/search?operation=add")
        .authorization_bearer(&token)
        .await
        .json();
    assert_eq!(adds["data"]["pagination"]["total"], 2);

    let recent: Value = ctx
        .server
        .get("/calculations/recent")
        .authorization_bearer(&token)
        .await
        .json();
    let recent = recent["data"].as_array().unwrap();
    assert_eq!(recent.len(), 4);
    assert_eq!(recent[0]["operation"], "sqrt");
    assert_eq!(recent[0]["result"], 4.0);

    let id = recent[0]["id"].as_i64().unwrap();
    let deleted: Value = ctx
        .server
        .delete(&format!("/calculations/{}", id))
        .authorization_bearer(&token)
        .await
        .json();
    assert_eq!(deleted["status"], "success");

    let wiped: Value = ctx
        .server
        .delete("/calculations")
        .authorization_bearer(&token)
        .await
        .json();
    assert_eq!(wiped["data"], 3);
}

#[tokio::test]
async fn calculations_are_scoped_to_their_mathematician() {
    let ctx = TestContext::new().await;
    let euclid = ctx.mathematician_token("euclid").await;
    let gauss = ctx.mathematician_token("gauss").await;
    let body: Value = ctx
        .server
        .post("/calculations")
        .authorization_bearer(&euclid)
        .json(&json!({ "operation": "minus", "numbers": "10,4" }))
        .await
        .json();
    assert_eq!(body["data"]["result"], 6.0);
    let id = body["data"]["id"].as_i64().unwrap();

    let other: Value = ctx
        .server
        .get(&format!("/calculations/{}", id))
        .authorization_bearer(&gauss)
        .await
        .json();
    assert_eq!(other["status"], "failure");
}
