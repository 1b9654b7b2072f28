/* crates/storefront-core/src/title.rs */

use crate::product::Product;
use crate::route::RouteHandler;

pub const STORE_NAME: &str = "쇼핑몰";

/// Fixed title mapping per route handler. The detail page uses the product
/// title when one was found, otherwise the generic detail title.
pub fn page_title(handler: RouteHandler, product: Option<&Product>) -> String {
  match handler {
    RouteHandler::Home => format!("{STORE_NAME} - 홈"),
    RouteHandler::ProductDetail => match product {
      Some(p) if !p.title.is_empty() => format!("{} - {STORE_NAME}", p.title),
      _ => format!("상품 상세 - {STORE_NAME}"),
    },
    RouteHandler::NotFound => format!("페이지를 찾을 수 없습니다 - {STORE_NAME}"),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn product(title: &str) -> Product {
    Product {
      product_id: "1".to_string(),
      title: title.to_string(),
      link: String::new(),
      image: String::new(),
      lprice: "0".to_string(),
      hprice: String::new(),
      mall_name: String::new(),
      product_type: String::new(),
      brand: String::new(),
      maker: String::new(),
      category1: String::new(),
      category2: String::new(),
      category3: String::new(),
      category4: String::new(),
    }
  }

  #[test]
  fn home_title() {
    assert_eq!(page_title(RouteHandler::Home, None), "쇼핑몰 - 홈");
  }

  #[test]
  fn detail_title_uses_product() {
    let p = product("무선 마우스");
    assert_eq!(page_title(RouteHandler::ProductDetail, Some(&p)), "무선 마우스 - 쇼핑몰");
  }

  #[test]
  fn detail_title_fallback_when_missing() {
    assert_eq!(page_title(RouteHandler::ProductDetail, None), "상품 상세 - 쇼핑몰");
  }

  #[test]
  fn not_found_title() {
    assert_eq!(page_title(RouteHandler::NotFound, None), "페이지를 찾을 수 없습니다 - 쇼핑몰");
  }
}
