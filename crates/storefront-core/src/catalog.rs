/* crates/storefront-core/src/catalog.rs */

use std::path::Path;

use crate::errors::StoreError;
use crate::product::Product;

/// The full product catalog, loaded once at startup and shared read-only
/// for the lifetime of the process. Callers pass a handle (`Arc<Catalog>`)
/// into every pipeline call; there is no process-global.
#[derive(Debug)]
pub struct Catalog {
  items: Vec<Product>,
}

impl Catalog {
  pub fn load(path: &Path) -> Result<Self, StoreError> {
    let raw = std::fs::read_to_string(path)
      .map_err(|e| StoreError::internal(format!("catalog '{}' unreadable: {e}", path.display())))?;
    let items: Vec<Product> = serde_json::from_str(&raw)
      .map_err(|e| StoreError::internal(format!("catalog '{}' invalid: {e}", path.display())))?;
    Self::from_items(items)
  }

  /// An empty catalog is a data-load failure, not a valid state.
  pub fn from_items(items: Vec<Product>) -> Result<Self, StoreError> {
    if items.is_empty() {
      return Err(StoreError::internal("catalog is empty"));
    }
    Ok(Self { items })
  }

  pub fn products(&self) -> &[Product] {
    &self.items
  }

  pub fn len(&self) -> usize {
    self.items.len()
  }

  pub fn is_empty(&self) -> bool {
    self.items.is_empty()
  }
}
