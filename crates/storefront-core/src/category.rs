/* crates/storefront-core/src/category.rs */

use serde_json::{Map, Value};

use crate::product::Product;

/// Two-level category tree: `category1 -> category2 -> {}`. Key order is
/// catalog order (serde_json is built with `preserve_order`), so repeated
/// builds serialize byte-identically.
pub type CategoryTree = Map<String, Value>;

/// Derive the tree from the full, unfiltered catalog. Duplicate keys are
/// no-ops; `category2` is only inserted when non-empty.
pub fn category_tree(products: &[Product]) -> CategoryTree {
  let mut tree = CategoryTree::new();
  for item in products {
    let entry =
      tree.entry(item.category1.clone()).or_insert_with(|| Value::Object(Map::new()));
    if !item.category2.is_empty() {
      if let Value::Object(children) = entry {
        children.entry(item.category2.clone()).or_insert_with(|| Value::Object(Map::new()));
      }
    }
  }
  tree
}

#[cfg(test)]
mod tests {
  use super::*;

  fn product(cat1: &str, cat2: &str) -> Product {
    Product {
      product_id: String::new(),
      title: String::new(),
      link: String::new(),
      image: String::new(),
      lprice: "0".to_string(),
      hprice: String::new(),
      mall_name: String::new(),
      product_type: String::new(),
      brand: String::new(),
      maker: String::new(),
      category1: cat1.to_string(),
      category2: cat2.to_string(),
      category3: String::new(),
      category4: String::new(),
    }
  }

  #[test]
  fn builds_two_level_tree() {
    let products = vec![
      product("생활/건강", "생활용품"),
      product("생활/건강", "주방용품"),
      product("디지털/가전", "태블릿PC"),
    ];
    let tree = category_tree(&products);
    assert_eq!(tree.len(), 2);
    let sub = tree["생활/건강"].as_object().expect("nested object");
    assert_eq!(sub.len(), 2);
    assert!(sub.contains_key("생활용품"));
    assert_eq!(tree["디지털/가전"]["태블릿PC"], Value::Object(Map::new()));
  }

  #[test]
  fn duplicates_are_noops() {
    let products = vec![product("Food", "Drink"), product("Food", "Drink")];
    let tree = category_tree(&products);
    assert_eq!(tree.len(), 1);
    assert_eq!(tree["Food"].as_object().map(Map::len), Some(1));
  }

  #[test]
  fn empty_category2_not_inserted() {
    let products = vec![product("Food", "")];
    let tree = category_tree(&products);
    assert_eq!(tree["Food"], Value::Object(Map::new()));
  }

  #[test]
  fn insertion_follows_catalog_order() {
    let products = vec![product("나중", "b"), product("가나", "a")];
    let tree = category_tree(&products);
    let keys: Vec<&str> = tree.keys().map(String::as_str).collect();
    // catalog order, not lexicographic order
    assert_eq!(keys, vec!["나중", "가나"]);
  }
}
