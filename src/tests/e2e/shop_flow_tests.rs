use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use rstest::{fixture, rstest};
use serde_json::{Value, json};
use std::path::Path;
use tempfile::TempDir;
use tower::ServiceExt;

use crate::shell::config::AppConfig;
use crate::shell::http::router;
use crate::shell::state::AppState;

struct Shop {
    _dir: TempDir,
    config: AppConfig,
    app: Router,
}

impl Shop {
    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Request::get(uri).body(Body::empty()).unwrap())
            .await
    }

    async fn post(&self, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let request = match body {
            Some(body) => Request::post(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => Request::post(uri).body(Body::empty()).unwrap(),
        };
        self.send(request).await
    }

    fn read_file(&self, path: &Path) -> Value {
        serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
    }
}

#[fixture]
async fn shop() -> Shop {
    let dir = TempDir::new().expect("failed to create temp dir");
    let config = AppConfig {
        products_file: dir.path().join("productos.json"),
        carts_file: dir.path().join("carrito.json"),
        ..AppConfig::default()
    };
    std::fs::write(
        &config.carts_file,
        r#"[{"id": "c1", "products": [{"product": "seed", "quantity": 1}]}]"#,
    )
    .unwrap();
    let state = AppState::from_config(&config)
        .await
        .expect("failed to open collections");
    Shop {
        _dir: dir,
        app: router(state),
        config,
    }
}

#[rstest]
#[tokio::test]
async fn it_should_bootstrap_a_missing_products_file(#[future] shop: Shop) {
    let shop = shop.await;
    assert_eq!(shop.read_file(&shop.config.products_file), json!([]));
    let (status, json) = shop.get("/api/products/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!([]));
}

#[rstest]
#[tokio::test]
async fn it_should_create_list_and_fetch_products(#[future] shop: Shop) {
    let shop = shop.await;
    let (status, created) = shop
        .post("/api/products/", Some(json!({"title": "Lamp", "price": 25})))
        .await;
    assert_eq!(status, StatusCode::OK);
    let id = created["id"].as_str().expect("id missing").to_string();
    assert!(!id.is_empty());

    let (_, second) = shop
        .post("/api/products", Some(json!({"title": "Desk"})))
        .await;

    let (status, fetched) = shop.get(&format!("/api/products/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let (_, listed) = shop.get("/api/products").await;
    assert_eq!(listed, json!([created, second]));
    assert_eq!(shop.read_file(&shop.config.products_file), listed);

    let (status, _) = shop.get("/api/products/unknown").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[rstest]
#[tokio::test]
async fn it_should_merge_cart_lines_and_persist_every_cart(#[future] shop: Shop) {
    let shop = shop.await;
    shop.post("/api/carts/c1/product/p1", None).await;
    let (status, lines) = shop.post("/api/carts/c1/product/p1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        lines,
        json!([{"product": "seed", "quantity": 1}, {"product": "p1", "quantity": 2}])
    );

    let (_, listed) = shop.get("/api/carts/c1").await;
    assert_eq!(listed, lines);
    let (_, listed_again) = shop.get("/api/carts/c1").await;
    assert_eq!(listed_again, listed);

    assert_eq!(
        shop.read_file(&shop.config.carts_file),
        json!([{"id": "c1", "products": lines}])
    );
}

#[rstest]
#[tokio::test]
async fn it_should_keep_the_three_not_found_behaviors_apart(#[future] shop: Shop) {
    let shop = shop.await;
    assert_eq!(
        shop.get("/api/products/nope").await,
        (StatusCode::NOT_FOUND, json!({"error": "Producto no encontrado."}))
    );
    assert_eq!(shop.get("/api/carts/nope").await, (StatusCode::OK, json!([])));
    assert_eq!(
        shop.post("/api/carts/nope/product/p1", None).await,
        (StatusCode::OK, json!({"error": "Carrito no encontrado."}))
    );
}

#[rstest]
#[tokio::test]
async fn it_should_create_a_cart_and_fill_it(#[future] shop: Shop) {
    let shop = shop.await;
    let (status, cart) = shop.post("/api/carts/", None).await;
    assert_eq!(status, StatusCode::CREATED);
    let id = cart["id"].as_str().expect("id missing").to_string();

    let (_, lines) = shop.post(&format!("/api/carts/{id}/product/p7"), None).await;
    assert_eq!(lines, json!([{"product": "p7", "quantity": 1}]));

    let stored = shop.read_file(&shop.config.carts_file);
    assert_eq!(stored.as_array().map(Vec::len), Some(2));
    assert_eq!(stored[1]["id"], json!(id));
}

#[rstest]
#[tokio::test]
async fn it_should_answer_500_when_a_collection_file_is_corrupted(#[future] shop: Shop) {
    let shop = shop.await;
    std::fs::write(&shop.config.products_file, "{ broken").unwrap();
    assert_eq!(
        shop.get("/api/products").await,
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            json!({"error": "Error al obtener productos."})
        )
    );
    let (status, _) = shop
        .post("/api/products", Some(json!({"title": "Lamp"})))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
