/* crates/storefront-axum/src/handler/api.rs */

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::Uri;
use axum::Json;
use storefront_core::{category_tree, fetch_detail, prefetch_listing, PageQuery, StoreError};

use super::{query_params, AppState};
use crate::error::AxumError;

/// `GET /products`: runs the same pipeline as the SSR prefetch, so both
/// surfaces return byte-identical products/pagination for a given query.
/// Malformed query parameters silently default.
pub(super) async fn list_products(
  State(state): State<Arc<AppState>>,
  uri: Uri,
) -> Json<serde_json::Value> {
  let params = query_params(&uri);
  let query = PageQuery::from_params(&params);
  let listing = prefetch_listing(&state.catalog, &query);
  Json(serde_json::json!({
    "products": listing.products,
    "pagination": listing.pagination,
    "filters": {
      "search": query.search,
      "category1": query.category1,
      "category2": query.category2,
      "sort": query.sort,
    },
  }))
}

/// `GET /products/{id}`: detail object or a structured not-found error.
pub(super) async fn get_product(
  State(state): State<Arc<AppState>>,
  Path(product_id): Path<String>,
) -> Result<Json<serde_json::Value>, AxumError> {
  let detail = fetch_detail(&state.catalog, &product_id)
    .ok_or_else(|| StoreError::not_found("Product not found"))?;
  let body = serde_json::to_value(&detail)
    .map_err(|e| StoreError::internal(format!("detail serialization failed: {e}")))?;
  Ok(Json(body))
}

/// `GET /categories`: the full two-level facet tree, filter-independent.
pub(super) async fn get_categories(
  State(state): State<Arc<AppState>>,
) -> Json<serde_json::Value> {
  Json(serde_json::Value::Object(category_tree(state.catalog.products())))
}
