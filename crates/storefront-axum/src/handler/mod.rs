/* crates/storefront-axum/src/handler/mod.rs */

mod api;
mod page;

use std::collections::HashMap;
use std::sync::Arc;

use axum::http::Uri;
use axum::routing::get;
use axum::Router;
use storefront_core::Catalog;

pub(crate) struct AppState {
  pub catalog: Arc<Catalog>,
  pub template: String,
  pub base: String,
}

/// API routes plus an SSR fallback: any GET that is not a product/category
/// endpoint renders a page against the shell template.
pub(crate) fn build_router(catalog: Arc<Catalog>, template: String, base: String) -> Router {
  let state = Arc::new(AppState { catalog, template, base });
  Router::new()
    .route("/products", get(api::list_products))
    .route("/products/{id}", get(api::get_product))
    .route("/categories", get(api::get_categories))
    .fallback(get(page::handle_page))
    .with_state(state)
}

/// Decode query parameters without ever rejecting the request: malformed
/// pairs are kept as-is or dropped, and the pipeline's defaults cover the
/// rest. Repeated keys keep the last value.
pub(crate) fn query_params(uri: &Uri) -> HashMap<String, String> {
  let Some(query) = uri.query() else {
    return HashMap::new();
  };
  url::form_urlencoded::parse(query.as_bytes()).into_owned().collect()
}
