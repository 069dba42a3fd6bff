//! 商品路由单元测试

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use tower::ServiceExt;

use crate::AppState;
use crate::database::repositories::memory::{MemoryProductRepository, MemoryUserRepository};
use crate::router::create_router;

fn test_app(products: Vec<serde_json::Value>) -> Router {
    let state = AppState {
        users: Arc::new(MemoryUserRepository::default()),
        products: Arc::new(MemoryProductRepository::with_products(products)),
    };
    create_router(state)
}

async fn get_json(app: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

fn sample_products(n: i64) -> Vec<serde_json::Value> {
    (1..=n)
        .map(|i| {
            serde_json::json!({
                "id": i,
                "name": format!("product-{i}"),
                "price": i * 100,
            })
        })
        .collect()
}

#[tokio::test]
async fn empty_catalog_returns_zero_count() {
    let app = test_app(vec![]);

    let (status, body) = get_json(&app, "/products").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["type"], "succeed");
    assert_eq!(body["code"], 200);
    assert_eq!(body["count"], 0);
    assert_eq!(body["data"], serde_json::json!([]));
}

#[tokio::test]
async fn count_matches_data_length() {
    let app = test_app(sample_products(3));

    let (status, body) = get_json(&app, "/products").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 3);
    assert_eq!(body["data"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn product_row_is_passed_through_verbatim() {
    let products = sample_products(2);
    let app = test_app(products.clone());

    let (status, body) = get_json(&app, "/product/2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, products[1]);
}

#[tokio::test]
async fn missing_product_is_not_found() {
    let app = test_app(sample_products(1));

    let (status, body) = get_json(&app, "/product/42").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["kind"], "not_found");
}

#[tokio::test]
async fn non_numeric_product_id_is_rejected() {
    let app = test_app(vec![]);

    let (status, body) = get_json(&app, "/product/abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["kind"], "validation");
}
