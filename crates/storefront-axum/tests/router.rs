/* crates/storefront-axum/tests/router.rs */

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use http_body_util::BodyExt;
use storefront_core::Catalog;
use tower::util::ServiceExt;

const SHELL: &str = "<!doctype html><html><head><!--app-head--></head>\
                     <body><!--app-html--></body></html>";

fn catalog() -> Arc<Catalog> {
  let raw = r#"[
    {"productId": "1", "title": "Apple Juice", "brand": "A", "lprice": "1000",
     "image": "https://img.test/1.jpg", "category1": "Food", "category2": "Drink"},
    {"productId": "2", "title": "Banana", "brand": "B", "lprice": "500",
     "image": "https://img.test/2.jpg", "category1": "Food", "category2": "Fruit"},
    {"productId": "3", "title": "Cider", "brand": "C", "lprice": "700",
     "image": "https://img.test/3.jpg", "category1": "Food", "category2": "Drink"}
  ]"#;
  let items = serde_json::from_str(raw).expect("fixture");
  Arc::new(Catalog::from_items(items).expect("catalog"))
}

fn router() -> axum::Router {
  storefront_axum::build_router(catalog(), SHELL.to_string(), String::new())
}

async fn get(router: axum::Router, uri: &str) -> Response {
  router
    .oneshot(Request::builder().uri(uri).body(Body::empty()).expect("request"))
    .await
    .expect("response")
}

async fn body_json(response: Response) -> serde_json::Value {
  let bytes = response.into_body().collect().await.expect("body").to_bytes();
  serde_json::from_slice(&bytes).expect("json body")
}

async fn body_text(response: Response) -> String {
  let bytes = response.into_body().collect().await.expect("body").to_bytes();
  String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

#[tokio::test]
async fn products_endpoint_filters_and_sorts() {
  let response = get(router(), "/products?search=apple").await;
  assert_eq!(response.status(), StatusCode::OK);
  let body = body_json(response).await;
  let products = body["products"].as_array().expect("products");
  assert_eq!(products.len(), 1);
  assert_eq!(products[0]["title"], "Apple Juice");
  assert_eq!(body["filters"]["search"], "apple");
  assert_eq!(body["filters"]["sort"], "price_asc");
}

#[tokio::test]
async fn products_endpoint_pagination_block() {
  let response = get(router(), "/products?limit=2&page=2").await;
  let body = body_json(response).await;
  assert_eq!(body["pagination"]["page"], 2);
  assert_eq!(body["pagination"]["limit"], 2);
  assert_eq!(body["pagination"]["total"], 3);
  assert_eq!(body["pagination"]["totalPages"], 2);
  assert_eq!(body["pagination"]["hasNext"], false);
  assert_eq!(body["pagination"]["hasPrev"], true);
  assert_eq!(body["products"].as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn products_endpoint_page_beyond_range_is_empty() {
  let response = get(router(), "/products?page=99").await;
  assert_eq!(response.status(), StatusCode::OK);
  let body = body_json(response).await;
  assert_eq!(body["products"].as_array().map(Vec::len), Some(0));
  assert_eq!(body["pagination"]["total"], 3);
}

#[tokio::test]
async fn products_endpoint_malformed_params_silently_default() {
  let response = get(router(), "/products?page=abc&limit=&sort=bogus").await;
  assert_eq!(response.status(), StatusCode::OK);
  let body = body_json(response).await;
  assert_eq!(body["pagination"]["page"], 1);
  assert_eq!(body["pagination"]["limit"], 20);
  // unknown sort falls back to price_asc ordering
  assert_eq!(body["products"][0]["title"], "Banana");
}

#[tokio::test]
async fn product_detail_found() {
  let response = get(router(), "/products/2").await;
  assert_eq!(response.status(), StatusCode::OK);
  let body = body_json(response).await;
  assert_eq!(body["productId"], "2");
  assert_eq!(body["images"].as_array().map(Vec::len), Some(3));
  assert!(body["rating"].as_u64().is_some_and(|r| (4..=5).contains(&r)));
}

#[tokio::test]
async fn product_detail_not_found() {
  let response = get(router(), "/products/nope").await;
  assert_eq!(response.status(), StatusCode::NOT_FOUND);
  let body = body_json(response).await;
  assert_eq!(body["error"], "Product not found");
}

#[tokio::test]
async fn categories_endpoint_full_tree() {
  let response = get(router(), "/categories").await;
  let body = body_json(response).await;
  assert!(body["Food"]["Drink"].is_object());
  assert!(body["Food"]["Fruit"].is_object());
}

#[tokio::test]
async fn ssr_home_injects_document() {
  let response = get(router(), "/?search=banana").await;
  assert_eq!(response.status(), StatusCode::OK);
  let html = body_text(response).await;
  assert!(html.contains("window.__INITIAL_DATA__ = "));
  assert!(!html.contains("<!--app-html-->"));
  assert!(!html.contains("<!--app-head-->"));
  assert!(html.contains("Banana"));
}

#[tokio::test]
async fn ssr_and_api_agree_on_listing() {
  let api_body = body_json(get(router(), "/products?category2=Drink&sort=price_desc").await).await;
  let page = body_text(get(router(), "/?category2=Drink&sort=price_desc").await).await;

  let marker = "window.__INITIAL_DATA__ = ";
  let start = page.find(marker).expect("hydration script") + marker.len();
  let end = page[start..].find(";</script>").expect("script end") + start;
  let state: serde_json::Value = serde_json::from_str(&page[start..end]).expect("state json");

  assert_eq!(state["productStore"]["products"], api_body["products"]);
  assert_eq!(state["productStore"]["totalCount"], api_body["pagination"]["total"]);
}

#[tokio::test]
async fn ssr_detail_not_found_renders_error_view() {
  let response = get(router(), "/product/nope/").await;
  assert_eq!(response.status(), StatusCode::OK);
  let html = body_text(response).await;
  assert!(html.contains("상품을 찾을 수 없습니다"));
}

#[tokio::test]
async fn broken_shell_aborts_with_diagnostic() {
  let router = storefront_axum::build_router(catalog(), "<html></html>".to_string(), String::new());
  let response = get(router, "/").await;
  assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
  let text = body_text(response).await;
  assert!(text.contains("template configuration error"));
}
