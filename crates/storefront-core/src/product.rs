/* crates/storefront-core/src/product.rs */

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One catalog record. Field names mirror the catalog JSON (camelCase),
/// which is also the wire format of the JSON API: products pass through
/// untouched so SSR and API responses stay byte-compatible.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
  pub product_id: String,
  pub title: String,
  #[serde(default)]
  pub link: String,
  #[serde(default)]
  pub image: String,
  pub lprice: String,
  #[serde(default)]
  pub hprice: String,
  #[serde(default)]
  pub mall_name: String,
  #[serde(default)]
  pub product_type: String,
  #[serde(default)]
  pub brand: String,
  #[serde(default)]
  pub maker: String,
  #[serde(default)]
  pub category1: String,
  #[serde(default)]
  pub category2: String,
  #[serde(default)]
  pub category3: String,
  #[serde(default)]
  pub category4: String,
}

/// A catalog record plus the synthesized presentation fields of the detail
/// endpoint. Rating/review/stock derive deterministically from the product
/// id, so repeated fetches agree (and so do SSR and the API).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetail {
  #[serde(flatten)]
  pub product: Product,
  pub description: String,
  pub rating: u32,
  pub review_count: u32,
  pub stock: u32,
  pub images: Vec<String>,
}

/// Normalized listing query. Every field has a default; malformed or
/// missing parameters never error.
#[derive(Debug, Clone, Serialize)]
pub struct PageQuery {
  pub search: String,
  pub category1: String,
  pub category2: String,
  pub sort: String,
  pub page: usize,
  pub limit: usize,
}

impl Default for PageQuery {
  fn default() -> Self {
    Self {
      search: String::new(),
      category1: String::new(),
      category2: String::new(),
      sort: "price_asc".to_string(),
      page: 1,
      limit: 20,
    }
  }
}

impl PageQuery {
  /// Build a query from raw request parameters. `current` is accepted as an
  /// alias for `page`. Non-numeric or sub-1 numbers fall back to defaults.
  pub fn from_params(params: &HashMap<String, String>) -> Self {
    let defaults = Self::default();
    let page_raw = params.get("page").or_else(|| params.get("current"));
    Self {
      search: params.get("search").cloned().unwrap_or(defaults.search),
      category1: params.get("category1").cloned().unwrap_or(defaults.category1),
      category2: params.get("category2").cloned().unwrap_or(defaults.category2),
      sort: params.get("sort").cloned().unwrap_or(defaults.sort),
      page: parse_positive(page_raw).unwrap_or(defaults.page),
      limit: parse_positive(params.get("limit")).unwrap_or(defaults.limit),
    }
  }
}

fn parse_positive(raw: Option<&String>) -> Option<usize> {
  let n = crate::filter::parse_int_prefix(raw?)?;
  usize::try_from(n).ok().filter(|&n| n >= 1)
}

#[cfg(test)]
mod tests {
  use super::*;

  fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
  }

  #[test]
  fn query_defaults() {
    let q = PageQuery::from_params(&HashMap::new());
    assert_eq!(q.search, "");
    assert_eq!(q.category1, "");
    assert_eq!(q.category2, "");
    assert_eq!(q.sort, "price_asc");
    assert_eq!(q.page, 1);
    assert_eq!(q.limit, 20);
  }

  #[test]
  fn query_current_is_page_alias() {
    let q = PageQuery::from_params(&params(&[("current", "3")]));
    assert_eq!(q.page, 3);
    // explicit page wins over the alias
    let q = PageQuery::from_params(&params(&[("page", "2"), ("current", "9")]));
    assert_eq!(q.page, 2);
  }

  #[test]
  fn query_non_numeric_page_defaults() {
    let q = PageQuery::from_params(&params(&[("page", "abc")]));
    assert_eq!(q.page, 1);
  }

  #[test]
  fn query_zero_and_negative_page_clamp() {
    assert_eq!(PageQuery::from_params(&params(&[("page", "0")])).page, 1);
    assert_eq!(PageQuery::from_params(&params(&[("page", "-2")])).page, 1);
  }

  #[test]
  fn query_limit_floor() {
    assert_eq!(PageQuery::from_params(&params(&[("limit", "0")])).limit, 20);
    assert_eq!(PageQuery::from_params(&params(&[("limit", "50")])).limit, 50);
  }

  #[test]
  fn product_parses_catalog_json() {
    let raw = r#"{
      "title": "Apple Juice",
      "link": "https://example.test/1",
      "image": "https://example.test/1.jpg",
      "lprice": "1000",
      "hprice": "",
      "mallName": "store",
      "productId": "85067212996",
      "productType": "1",
      "brand": "A",
      "maker": "",
      "category1": "Food",
      "category2": "Drink",
      "category3": "",
      "category4": ""
    }"#;
    let p: Product = serde_json::from_str(raw).expect("parse");
    assert_eq!(p.product_id, "85067212996");
    assert_eq!(p.mall_name, "store");
    assert_eq!(p.category2, "Drink");
  }

  #[test]
  fn product_roundtrips_camel_case() {
    let p = Product {
      product_id: "1".into(),
      title: "t".into(),
      link: String::new(),
      image: String::new(),
      lprice: "10".into(),
      hprice: String::new(),
      mall_name: "m".into(),
      product_type: String::new(),
      brand: "b".into(),
      maker: String::new(),
      category1: "c1".into(),
      category2: "c2".into(),
      category3: String::new(),
      category4: String::new(),
    };
    let json = serde_json::to_value(&p).expect("serialize");
    assert_eq!(json["productId"], "1");
    assert_eq!(json["mallName"], "m");
  }
}
