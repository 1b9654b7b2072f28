/* crates/storefront-engine/src/state.rs */

use serde::Serialize;
use serde_json::json;

use storefront_core::category::CategoryTree;
use storefront_core::errors::StoreError;
use storefront_core::prefetch::Listing;
use storefront_core::product::{Product, ProductDetail};

/// The product-store slice of the hydration state. Mirrors exactly what the
/// page markup was rendered from, so the client rehydrates to the same view
/// without refetching.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductState {
  pub products: Vec<Product>,
  pub total_count: usize,
  pub categories: CategoryTree,
  pub current_product: Option<ProductDetail>,
  pub related_products: Vec<Product>,
  pub loading: bool,
  pub status: String,
  pub error: Option<String>,
}

impl ProductState {
  pub fn empty() -> Self {
    Self {
      products: Vec::new(),
      total_count: 0,
      categories: CategoryTree::new(),
      current_product: None,
      related_products: Vec::new(),
      loading: false,
      status: "done".to_string(),
      error: None,
    }
  }

  pub fn listing(listing: &Listing) -> Self {
    Self {
      products: listing.products.clone(),
      total_count: listing.total_count,
      categories: listing.categories.clone(),
      ..Self::empty()
    }
  }

  pub fn detail(detail: ProductDetail, related: Vec<Product>) -> Self {
    Self { current_product: Some(detail), related_products: related, ..Self::empty() }
  }

  pub fn not_found(message: impl Into<String>) -> Self {
    Self { status: "error".to_string(), error: Some(message.into()), ..Self::empty() }
  }
}

/// Full hydration payload. Cart and UI stores live in client storage and
/// rehydrate there; the server emits empty placeholders for them.
pub fn initial_state(product: &ProductState) -> Result<serde_json::Value, StoreError> {
  let product_store = serde_json::to_value(product)
    .map_err(|e| StoreError::internal(format!("state serialization failed: {e}")))?;
  Ok(json!({
    "productStore": product_store,
    "cartStore": { "items": [], "selectedAll": false },
    "uiStore": {},
  }))
}
