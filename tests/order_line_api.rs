//! End-to-end HTTP tests for the OrderLine resource.
//!
//! Each test spawns the production router on an ephemeral port, backed
//! by the in-memory store, and drives it with a reqwest client.

use std::sync::Arc;

use serde_json::{Value, json};
use tokio::net::TcpListener;

use supermatech_api::gateway::{router, state::AppState};
use supermatech_api::store::MemoryStore;

/// Spawn the server on 127.0.0.1:0 and return its base URL.
async fn spawn_server() -> String {
    let state = Arc::new(AppState::new(Arc::new(MemoryStore::new()), None));
    let app = router(state);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}/api/order-lines", addr)
}

fn line_body(quantity: i32, total_price: &str) -> Value {
    json!({ "quantity": quantity, "total_price": total_price })
}

#[tokio::test]
async fn full_lifecycle_scenario() {
    let url = spawn_server().await;
    let client = reqwest::Client::new();

    // create -> 201, id assigned
    let resp = client
        .post(&url)
        .json(&line_body(3, "59.97"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 201);
    assert_eq!(
        resp.headers().get("location").unwrap(),
        "/api/order-lines/1"
    );
    assert_eq!(
        resp.headers().get("x-supermatechapp-alert").unwrap(),
        "supermatechApp.orderLine.created"
    );
    let created: Value = resp.json().await.unwrap();
    assert_eq!(created["id"], 1);
    assert_eq!(created["quantity"], 3);

    // get -> 200, same entity
    let resp = client.get(format!("{url}/1")).send().await.unwrap();
    assert_eq!(resp.status(), 200);
    let fetched: Value = resp.json().await.unwrap();
    assert_eq!(fetched, created);

    // update -> 200, replaced fields
    let resp = client
        .put(format!("{url}/1"))
        .json(&json!({ "id": 1, "quantity": 5, "total_price": "99.95" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("x-supermatechapp-alert").unwrap(),
        "supermatechApp.orderLine.updated"
    );
    let updated: Value = resp.json().await.unwrap();
    assert_eq!(updated["quantity"], 5);

    // delete -> 204
    let resp = client.delete(format!("{url}/1")).send().await.unwrap();
    assert_eq!(resp.status(), 204);
    assert_eq!(
        resp.headers().get("x-supermatechapp-alert").unwrap(),
        "supermatechApp.orderLine.deleted"
    );

    // get after delete -> 404
    let resp = client.get(format!("{url}/1")).send().await.unwrap();
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn create_with_id_is_rejected_and_nothing_is_stored() {
    let url = spawn_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(&url)
        .json(&json!({ "id": 7, "quantity": 1, "total_price": "1.00" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    assert_eq!(
        resp.headers().get("x-supermatechapp-error").unwrap(),
        "error.idexists"
    );
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error_key"], "idexists");

    // Storage unchanged
    let all: Value = client
        .get(&url)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(all.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn update_validation_failures_in_order() {
    let url = spawn_server().await;
    let client = reqwest::Client::new();

    let created: Value = client
        .post(&url)
        .json(&line_body(1, "10.00"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let id = created["id"].as_i64().unwrap();

    // (1) body id missing -> idnull, regardless of path id
    let resp = client
        .put(format!("{url}/{id}"))
        .json(&line_body(2, "20.00"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error_key"], "idnull");

    // (2) body id != path id -> idinvalid
    let resp = client
        .put(format!("{url}/{id}"))
        .json(&json!({ "id": id + 1, "quantity": 2, "total_price": "20.00" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error_key"], "idinvalid");

    // (3) matching ids but unknown in storage -> idnotfound
    let missing = id + 100;
    let resp = client
        .put(format!("{url}/{missing}"))
        .json(&json!({ "id": missing, "quantity": 2, "total_price": "20.00" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error_key"], "idnotfound");
}

#[tokio::test]
async fn patch_merges_only_supplied_fields() {
    let url = spawn_server().await;
    let client = reqwest::Client::new();

    let created: Value = client
        .post(&url)
        .json(&json!({ "quantity": 3, "total_price": "59.97", "product_id": 11 }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let id = created["id"].as_i64().unwrap();

    let resp = client
        .patch(format!("{url}/{id}"))
        .json(&json!({ "id": id, "quantity": 9 }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let merged: Value = resp.json().await.unwrap();
    assert_eq!(merged["quantity"], 9);
    assert_eq!(merged["total_price"], "59.97");
    assert_eq!(merged["product_id"], 11);
}

#[tokio::test]
async fn patch_accepts_merge_patch_content_type() {
    let url = spawn_server().await;
    let client = reqwest::Client::new();

    let created: Value = client
        .post(&url)
        .json(&json!({ "quantity": 3, "total_price": "59.97", "product_id": 11 }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let id = created["id"].as_i64().unwrap();

    let resp = client
        .patch(format!("{url}/{id}"))
        .header("content-type", "application/merge-patch+json")
        .body(format!(r#"{{ "id": {id}, "quantity": 4 }}"#))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let merged: Value = resp.json().await.unwrap();
    assert_eq!(merged["quantity"], 4);
    assert_eq!(merged["total_price"], "59.97");
    assert_eq!(merged["product_id"], 11);
}

#[tokio::test]
async fn patch_is_idempotent_over_http() {
    let url = spawn_server().await;
    let client = reqwest::Client::new();

    let created: Value = client
        .post(&url)
        .json(&line_body(3, "59.97"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let id = created["id"].as_i64().unwrap();
    let patch = json!({ "id": id, "quantity": 6, "total_price": "12.00" });

    let first: Value = client
        .patch(format!("{url}/{id}"))
        .json(&patch)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let second: Value = client
        .patch(format!("{url}/{id}"))
        .json(&patch)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn patch_identifier_failures() {
    let url = spawn_server().await;
    let client = reqwest::Client::new();

    // No body id -> idnull
    let resp = client
        .patch(format!("{url}/1"))
        .json(&json!({ "quantity": 1 }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error_key"], "idnull");

    // Mismatched body id -> idinvalid
    let resp = client
        .patch(format!("{url}/1"))
        .json(&json!({ "id": 2, "quantity": 1 }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error_key"], "idinvalid");

    // Unknown id -> idnotfound
    let resp = client
        .patch(format!("{url}/1"))
        .json(&json!({ "id": 1, "quantity": 1 }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error_key"], "idnotfound");
}

#[tokio::test]
async fn list_counts_creates_minus_deletes() {
    let url = spawn_server().await;
    let client = reqwest::Client::new();

    let mut ids = Vec::new();
    for i in 0..4 {
        let created: Value = client
            .post(&url)
            .json(&line_body(i, "1.00"))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        ids.push(created["id"].as_i64().unwrap());
    }
    client
        .delete(format!("{url}/{}", ids[1]))
        .send()
        .await
        .unwrap();

    // eagerload is a hint only; either value lists the same entities
    for query in ["", "?eagerload=true", "?eagerload=false"] {
        let all: Value = client
            .get(format!("{url}{query}"))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(all.as_array().unwrap().len(), 3);
    }
}

#[tokio::test]
async fn delete_of_unknown_id_still_returns_204() {
    let url = spawn_server().await;
    let client = reqwest::Client::new();

    let resp = client.delete(format!("{url}/999")).send().await.unwrap();
    assert_eq!(resp.status(), 204);

    let resp = client.get(format!("{url}/999")).send().await.unwrap();
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn entity_constraint_violations_are_rejected_before_id_checks() {
    let url = spawn_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(&url)
        .json(&line_body(-1, "10.00"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);

    let resp = client
        .post(&url)
        .json(&line_body(1, "-10.00"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);

    // Malformed JSON body
    let resp = client
        .post(&url)
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
}

#[tokio::test]
async fn created_ids_are_distinct_and_never_reused() {
    let url = spawn_server().await;
    let client = reqwest::Client::new();

    let first: Value = client
        .post(&url)
        .json(&line_body(1, "1.00"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let first_id = first["id"].as_i64().unwrap();

    client
        .delete(format!("{url}/{first_id}"))
        .send()
        .await
        .unwrap();

    let second: Value = client
        .post(&url)
        .json(&line_body(1, "1.00"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_ne!(second["id"].as_i64().unwrap(), first_id);
}

#[tokio::test]
async fn health_endpoint_reports_ok_on_memory_store() {
    let url = spawn_server().await;
    let base = url.trim_end_matches("/order-lines");
    let client = reqwest::Client::new();

    let resp = client
        .get(format!("{base}/health"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert!(body["timestamp_ms"].as_u64().unwrap() > 0);
}
