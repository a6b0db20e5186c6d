//! End-to-end point-of-sale flow: signup, signin, catalog, orders, totals.
//!
//! Requires a running server and database; run with `-- --ignored`.

use reqwest::StatusCode;
use serde_json::{Value, json};

use larder_integration_tests::TestOperator;

#[tokio::test]
#[ignore = "Requires a running server and database"]
async fn test_me_resolves_identity() {
    let op = TestOperator::signup().await;

    let resp = op.get("/me").await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = resp.json().await.expect("body was not JSON");
    assert_eq!(body["user"]["email"], json!(op.email));
    assert!(body["user"]["id"].is_string());
}

#[tokio::test]
#[ignore = "Requires a running server and database"]
async fn test_order_total_uses_line_value_formula() {
    let op = TestOperator::signup().await;

    let resp = op
        .post(
            "/orders",
            &json!({
                "customer_name": "Walk-in",
                "discount": 5.0,
                "items": [
                    {"item_name": "Basmati Rice", "quantity": 2, "price": 10.0,
                     "discount": 1.0, "tax": 0.5}
                ]
            }),
        )
        .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let created: Value = resp.json().await.expect("body was not JSON");
    assert_eq!(created["message"], json!("Order created successfully"));
    let order_id = created["order_id"].as_i64().expect("order_id missing");

    let body: Value = op.get("/orders").await.json().await.expect("not JSON");
    let order = body["orders"]
        .as_array()
        .expect("orders missing")
        .iter()
        .find(|o| o["order_id"].as_i64() == Some(order_id))
        .expect("created order not listed");

    // 2*10 - 2*1 + 2*0.5 = 19; the header discount (5.0) is stored but
    // never subtracted from the total.
    assert!((order["total"].as_f64().expect("total missing") - 19.0).abs() < 1e-9);
    assert!((order["order_discount"].as_f64().expect("order_discount missing") - 5.0).abs() < 1e-9);
    assert_eq!(order["items"].as_array().map(Vec::len), Some(1));
}

#[tokio::test]
#[ignore = "Requires a running server and database"]
async fn test_zero_item_order_is_accepted() {
    let op = TestOperator::signup().await;

    let resp = op
        .post(
            "/orders",
            &json!({"customer_name": "Walk-in", "items": []}),
        )
        .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let created: Value = resp.json().await.expect("body was not JSON");
    let order_id = created["order_id"].as_i64().expect("order_id missing");

    let body: Value = op.get("/orders").await.json().await.expect("not JSON");
    let order = body["orders"]
        .as_array()
        .expect("orders missing")
        .iter()
        .find(|o| o["order_id"].as_i64() == Some(order_id))
        .expect("zero-item order not listed");
    assert_eq!(order["items"].as_array().map(Vec::len), Some(0));
    assert!((order["total"].as_f64().expect("total missing")).abs() < f64::EPSILON);
}

#[tokio::test]
#[ignore = "Requires a running server and database"]
async fn test_listing_orders_is_idempotent() {
    let op = TestOperator::signup().await;

    op.post(
        "/orders",
        &json!({
            "customer_name": "Repeat Reader",
            "items": [{"item_name": "Oats", "quantity": 3, "price": 2.0}]
        }),
    )
    .await;

    let first: Value = op.get("/orders").await.json().await.expect("not JSON");
    let second: Value = op.get("/orders").await.json().await.expect("not JSON");

    // No hidden mutation on read.
    assert_eq!(first, second);
}

#[tokio::test]
#[ignore = "Requires a running server and database"]
async fn test_product_crud_roundtrip() {
    let op = TestOperator::signup().await;

    let id = op.create_product("Lentils", 3.5, 12).await;

    let resp = op.put(&format!("/products/{id}"), &json!({"price": 3.25})).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = op.get("/products").await.json().await.expect("not JSON");
    let product = body["products"]
        .as_array()
        .expect("products missing")
        .iter()
        .find(|p| p["id"].as_i64() == Some(id))
        .expect("created product not listed");
    assert!((product["price"].as_f64().expect("price missing") - 3.25).abs() < 1e-9);
    assert_eq!(product["stock"], json!(12));
}

#[tokio::test]
#[ignore = "Requires a running server and database"]
async fn test_empty_update_payload_is_rejected() {
    let op = TestOperator::signup().await;
    let id = op.create_product("Flour", 2.0, 6).await;

    let resp = op.put(&format!("/products/{id}"), &json!({})).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // The product is untouched.
    let body: Value = op.get("/products").await.json().await.expect("not JSON");
    let product = body["products"]
        .as_array()
        .expect("products missing")
        .iter()
        .find(|p| p["id"].as_i64() == Some(id))
        .expect("product missing after rejected update");
    assert!((product["price"].as_f64().expect("price missing") - 2.0).abs() < 1e-9);
}
