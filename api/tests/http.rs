use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use blockdb_api::{
    application::http::server::{
        app_state::AppState,
        http_server::{router, state},
    },
    args::Args,
};
use blockdb_core::entity::blocks;
use chrono::{Duration, TimeZone, Utc};
use clap::Parser;
use sea_orm::{ActiveValue::Set, EntityTrait};
use serde_json::{Value, json};

const GENERATOR: &str = "03a02b9d5fdd1307c2ee4652ba54d492d1fd11a7d1bb3f3a44c4a05e79f19de933";

fn args() -> Arc<Args> {
    Arc::new(Args::parse_from([
        "blockdb",
        "--db-dialect",
        "sqlite",
        "--db-storage",
        ":memory:",
        "--root-path",
        "/api",
    ]))
}

fn block(height: i64) -> blocks::ActiveModel {
    let created_at = Utc.with_ymd_and_hms(2018, 6, 1, 12, 0, 0).unwrap() + Duration::seconds(height);

    blocks::ActiveModel {
        id: Set(format!("block-{height}")),
        version: Set(0),
        timestamp: Set(height * 50),
        previous_block: Set((height > 1).then(|| format!("block-{}", height - 1))),
        height: Set(height),
        number_of_transactions: Set(0),
        total_amount: Set(0),
        total_fee: Set(0),
        reward: Set(200_000_000),
        payload_length: Set(0),
        payload_hash: Set(format!("payload-{height}")),
        generator_public_key: Set(GENERATOR.to_string()),
        block_signature: Set(format!("signature-{height}")),
        created_at: Set(created_at),
    }
}

async fn seed(state: &AppState, heights: std::ops::RangeInclusive<i64>) {
    let db = state.service.block_repository.executor().db.clone();

    blocks::Entity::insert_many(heights.map(block))
        .exec_without_returning(&db)
        .await
        .expect("seed blocks");
}

async fn server_with_blocks(count: i64) -> TestServer {
    let state = state(args()).await.expect("state");
    if count > 0 {
        seed(&state, 1..=count).await;
    }

    TestServer::new(router(state).expect("router")).expect("test server")
}

fn heights(body: &Value) -> Vec<i64> {
    body["rows"]
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["height"].as_i64().unwrap())
        .collect()
}

#[tokio::test]
async fn list_blocks_paginates_by_height() {
    let server = server_with_blocks(5).await;

    let response = server
        .get("/api/blocks")
        .add_query_param("limit", 2)
        .add_query_param("offset", 2)
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(heights(&body), vec![3, 2]);
    assert_eq!(body["count"], 2);
}

#[tokio::test]
async fn list_blocks_returns_block_projection() {
    let server = server_with_blocks(1).await;

    let body: Value = server.get("/api/blocks").await.json();

    let row = &body["rows"][0];
    assert_eq!(row["id"], "block-1");
    assert_eq!(row["generator_public_key"], GENERATOR);
    assert_eq!(row["previous_block"], Value::Null);
    assert!(row.get("created_at").is_none());
}

#[tokio::test]
async fn search_blocks_by_timestamp_range() {
    let server = server_with_blocks(5).await;

    let response = server
        .get("/api/blocks/search")
        .add_query_param("timestamp[from]", 100)
        .add_query_param("timestamp[to]", 200)
        .add_query_param("limit", 1)
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["count"], 3);
    assert_eq!(heights(&body), vec![4]);
}

#[tokio::test]
async fn search_without_matches_is_empty() {
    let server = server_with_blocks(2).await;

    let response = server
        .get("/api/blocks/search")
        .add_query_param("height[from]", 10)
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({ "rows": [], "count": 0 }));
}

#[tokio::test]
async fn list_blocks_matches_leading_zero_id() {
    let state = state(args()).await.expect("state");
    seed(&state, 1..=2).await;
    let db = state.service.block_repository.executor().db.clone();
    let mut padded = block(3);
    padded.id = Set("007".to_string());
    blocks::Entity::insert(padded)
        .exec_without_returning(&db)
        .await
        .expect("seed padded block");
    let server = TestServer::new(router(state).expect("router")).expect("test server");

    let response = server.get("/api/blocks").add_query_param("id", "007").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(heights(&body), vec![3]);
    assert_eq!(body["rows"][0]["id"], "007");
}

#[tokio::test]
async fn unknown_filter_is_bad_request() {
    let server = server_with_blocks(1).await;

    let response = server
        .get("/api/blocks")
        .add_query_param("nonce", 1)
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["code"], "E_BAD_REQUEST");
}

#[tokio::test]
async fn limit_above_maximum_is_bad_request() {
    let server = server_with_blocks(1).await;

    let response = server
        .get("/api/blocks")
        .add_query_param("limit", 101)
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn count_blocks_returns_total() {
    let server = server_with_blocks(4).await;

    let response = server.get("/api/blocks/count").await;

    response.assert_status_ok();
    response.assert_json(&json!({ "count": 4 }));
}

#[tokio::test]
async fn get_block_by_id() {
    let server = server_with_blocks(3).await;

    let response = server.get("/api/blocks/block-2").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["height"], 2);
    assert_eq!(body["previous_block"], "block-1");
}

#[tokio::test]
async fn missing_block_is_not_found() {
    let server = server_with_blocks(1).await;

    let response = server.get("/api/blocks/unknown").await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delegate_blocks_and_last_block() {
    let server = server_with_blocks(3).await;

    let blocks: Value = server
        .get(&format!("/api/delegates/{GENERATOR}/blocks"))
        .await
        .json();
    assert_eq!(heights(&blocks), vec![3, 2, 1]);

    let response = server
        .get(&format!("/api/delegates/{GENERATOR}/last-block"))
        .await;
    response.assert_status_ok();
    response.assert_json(&json!({ "id": "block-3", "timestamp": 150 }));
}

#[tokio::test]
async fn delegate_without_blocks_has_no_last_block() {
    let server = server_with_blocks(1).await;

    let response = server.get("/api/delegates/03ff/last-block").await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn loader_status_on_empty_chain() {
    let server = server_with_blocks(0).await;

    let response = server.get("/api/loader/status").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["loaded"], false);
    assert_eq!(body["now"], 0);
    assert!(body["blocksCount"].as_i64().unwrap() > 0);
}

#[tokio::test]
async fn loader_sync_status_reports_height() {
    let server = server_with_blocks(3).await;

    let body: Value = server.get("/api/loader/status/sync").await.json();

    assert_eq!(body["syncing"], true);
    assert_eq!(body["height"], 3);
    assert_eq!(body["id"], "block-3");
}

#[tokio::test]
async fn loader_autoconfigure_describes_network() {
    let server = server_with_blocks(0).await;

    let body: Value = server.get("/api/loader/autoconfigure").await.json();

    assert_eq!(body["network"]["token"], "DARK");
    assert_eq!(body["network"]["symbol"], "DѦ");
    assert_eq!(body["network"]["version"], 30);
}

#[tokio::test]
async fn openapi_document_is_served_under_root_path() {
    let server = server_with_blocks(0).await;

    let body: Value = server.get("/api/api-docs/openapi.json").await.json();

    assert!(body["paths"].get("/api/blocks/search").is_some());
    assert!(body["paths"].get("/api/loader/status").is_some());
}
