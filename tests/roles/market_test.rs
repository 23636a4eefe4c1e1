use axum::http::StatusCode;
use serde_json::{json, Value};

use crate::common::TestContext;

async fn develop(ctx: &TestContext, token: &str, section: i64, trade: &str, union: &str) -> Value {
    let response = ctx
        .server
        .post("/markets")
        .authorization_bearer(token)
        .json(&json!({
            "section": section,
            "trade": trade,
            "traders": 40,
            "sales_per_day": 1250.5,
            "taxes": "flat levy",
            "union": union
        }))
        .await;
    response.assert_status(StatusCode::CREATED);
    let body: Value = response.json();
    body["data"].clone()
}

#[tokio::test]
async fn create_market_exposes_union_field() {
    let ctx = TestContext::new().await;
    let token = ctx.developer_token("ada").await;

    let market = develop(&ctx, &token, 1, "textiles", "Weavers Guild").await;

    assert_eq!(market["section"], 1);
    assert_eq!(market["union"], "Weavers Guild");
    assert_eq!(market["sales_per_day"], 1250.5);
    assert!(market.get("trade_union").is_none());
}

#[tokio::test]
async fn negative_traders_are_rejected() {
    let ctx = TestContext::new().await;
    let token = ctx.developer_token("ada").await;

    ctx.server
        .post("/markets")
        .authorization_bearer(&token)
        .json(&json!({
            "section": 1,
            "trade": "fish",
            "traders": -3,
            "sales_per_day": 10.0,
            "taxes": "none",
            "union": "Fishers"
        }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn search_matches_every_supplied_filter() {
    let ctx = TestContext::new().await;
    let token = ctx.developer_token("ada").await;
    develop(&ctx, &token, 1, "Textiles", "Weavers Guild").await;
    develop(&ctx, &token, 2, "textile dyes", "Dyers Union").await;
    develop(&ctx, &token, 3, "grain", "Weavers Guild").await;

    let by_trade: Value = ctx
        .server
        .get("/markets/search?trade=textile")
        .authorization_bearer(&token)
        .await
        .json();
    assert_eq!(by_trade["data"]["pagination"]["total"], 2);

    let by_both: Value = ctx
        .server
        .get("/markets/search?trade=textile&union=weavers")
        .authorization_bearer(&token)
        .await
        .json();
    assert_eq!(by_both["data"]["pagination"]["total"], 1);
    assert_eq!(by_both["data"]["items"][0]["section"], 1);
}

#[tokio::test]
async fn fetch_by_section_and_partial_update() {
    let ctx = TestContext::new().await;
    let token = ctx.developer_token("ada").await;
    let market = develop(&ctx, &token, 7, "spices", "Spice Traders").await;
    let id = market["id"].as_i64().unwrap();

    let section: Value = ctx
        .server
        .get("/markets/sections/7")
        .authorization_bearer(&token)
        .await
        .json();
    assert_eq!(section["data"].as_array().unwrap().len(), 1);

    let empty: Value = ctx
        .server
        .get("/markets/sections/8")
        .authorization_bearer(&token)
        .await
        .json();
    assert_eq!(empty["status"], "failure");

    let updated: Value = ctx
        .server
        .patch(&format!("/markets/{}", id))
        .authorization_bearer(&token)
        .json(&json!({ "traders": 55 }))
        .await
        .json();
    assert_eq!(updated["data"]["traders"], 55);
    assert_eq!(updated["data"]["trade"], "spices");
}

#[tokio::test]
async fn markets_are_scoped_to_their_developer() {
    let ctx = TestContext::new().await;
    let ada = ctx.developer_token("ada").await;
    let linus = ctx.developer_token("linus").await;
    let market = develop(&ctx, &ada, 1, "books", "Readers").await;

    let other: Value = ctx
        .server
        .delete(&format!("/markets/{}", market["id"]))
        .authorization_bearer(&linus)
        .await
        .json();
    assert_eq!(other["status"], "failure");

    let wiped: Value = ctx.server.delete("/markets").authorization_bearer(&ada).await.json();
    assert_eq!(wiped["data"], 1);
}
