/* crates/storefront-core/src/route.rs */

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

static PRODUCT_ROUTE_RE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"^/product/([^/]+)/?$").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteHandler {
  Home,
  ProductDetail,
  NotFound,
}

#[derive(Debug, Clone)]
pub struct Route {
  /// Matched route pattern; `None` for the not-found route.
  pub path: Option<String>,
  pub params: HashMap<String, String>,
  pub handler: RouteHandler,
}

/// Map a request path to a page handler. Pure and deterministic: strips the
/// base prefix and query string, normalizes the leading slash, then matches.
pub fn match_route(url: &str, base: &str) -> Route {
  let mut pathname = url;
  if !base.is_empty() {
    if let Some(stripped) = pathname.strip_prefix(base) {
      pathname = stripped;
    }
  }
  let pathname = pathname.split('?').next().unwrap_or(pathname);
  let pathname =
    if pathname.starts_with('/') { pathname.to_string() } else { format!("/{pathname}") };

  if pathname == "/" {
    return Route { path: Some("/".to_string()), params: HashMap::new(), handler: RouteHandler::Home };
  }

  if let Some(caps) = PRODUCT_ROUTE_RE.captures(&pathname) {
    let mut params = HashMap::new();
    params.insert("id".to_string(), caps[1].to_string());
    return Route {
      path: Some("/product/:id/".to_string()),
      params,
      handler: RouteHandler::ProductDetail,
    };
  }

  Route { path: None, params: HashMap::new(), handler: RouteHandler::NotFound }
}
