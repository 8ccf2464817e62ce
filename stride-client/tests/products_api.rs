// stride-client/tests/products_api.rs
// Integration tests against a stub catalog API

use axum::{
    Json, Router,
    extract::Path,
    http::StatusCode,
    routing::{get, post},
};
use serde_json::{Value, json};
use stride_client::{ClientConfig, ClientError};

fn catalog() -> Vec<Value> {
    vec![
        json!({
            "id": 1,
            "name": "Air Trainer",
            "description": "Running shoes",
            "price": 89.99,
            "imageUrl": "https://cdn.example.com/air-trainer.png",
            "sizes": ["7", "8", "9"]
        }),
        json!({
            "id": 2,
            "name": "Court Classic",
            "description": "Basketball shoes",
            "price": 140.0,
            "sizes": ["9", "10", "11"]
        }),
    ]
}

async fn list_products() -> Json<Vec<Value>> {
    Json(catalog())
}

async fn get_product(Path(id): Path<u32>) -> Result<Json<Value>, StatusCode> {
    if id == 1 {
        // Detail endpoint serves sizes as a comma-delimited string
        Ok(Json(json!({
            "id": 1,
            "name": "Air Trainer",
            "description": "Running shoes",
            "price": 89.99,
            "sizes": "7,8,9"
        })))
    } else {
        Err(StatusCode::NOT_FOUND)
    }
}

async fn association_stub(Path(_id): Path<u32>) -> StatusCode {
    StatusCode::OK
}

/// Serve the stub API on an ephemeral port, returning the base URL
async fn spawn_stub_api() -> String {
    let app = Router::new()
        .route("/api/Products", get(list_products))
        .route("/api/Products/{id}", get(get_product))
        .route("/api/Products/{id}/bag", post(association_stub))
        .route("/api/Products/{id}/favourite", post(association_stub));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}/api")
}

#[tokio::test]
async fn list_products_returns_full_catalog() {
    let base_url = spawn_stub_api().await;
    let client = ClientConfig::new(base_url).build_http_client();

    let products = client.list_products().await.unwrap();
    assert_eq!(products.len(), 2);
    assert_eq!(products[0].id, 1);
    assert_eq!(products[0].name, "Air Trainer");
    assert_eq!(products[1].sizes, vec!["9", "10", "11"]);
}

#[tokio::test]
async fn get_product_splits_delimited_sizes() {
    let base_url = spawn_stub_api().await;
    let client = ClientConfig::new(base_url).build_http_client();

    let product = client.get_product(1).await.unwrap();
    assert_eq!(product.sizes, vec!["7", "8", "9"]);
    assert_eq!(product.price, 89.99);
}

#[tokio::test]
async fn get_unknown_product_is_not_found() {
    let base_url = spawn_stub_api().await;
    let client = ClientConfig::new(base_url).build_http_client();

    let err = client.get_product(99).await.unwrap_err();
    match err {
        ClientError::NotFound(resource) => assert_eq!(resource, "product 99"),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn bag_and_favourite_associations_succeed() {
    let base_url = spawn_stub_api().await;
    let client = ClientConfig::new(base_url).build_http_client();

    client.add_to_bag(1).await.unwrap();
    client.add_to_favourite(2).await.unwrap();
}

#[tokio::test]
async fn transport_failure_surfaces_as_http_error() {
    // Bind then immediately drop a listener so the port refuses connections
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = ClientConfig::new(format!("http://{addr}/api"))
        .with_timeout(2)
        .build_http_client();

    let err = client.list_products().await.unwrap_err();
    assert!(matches!(err, ClientError::Http(_)), "got {err:?}");
}
