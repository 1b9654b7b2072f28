/* crates/storefront-engine/src/render.rs */

use serde_json::json;

use storefront_core::catalog::Catalog;
use storefront_core::errors::StoreError;
use storefront_core::prefetch::{fetch_detail, prefetch_listing, related_products};
use storefront_core::product::PageQuery;
use storefront_core::route::{match_route, RouteHandler};
use storefront_core::title::{page_title, STORE_NAME};

use crate::markup;
use crate::state::{initial_state, ProductState};

const NOT_FOUND_MESSAGE: &str = "상품을 찾을 수 없습니다";

/// Contract between the orchestrator and the HTTP/SSG boundary. The state
/// is embedded verbatim into the shell by the injector.
#[derive(Debug, Clone)]
pub struct RenderResult {
  pub html: String,
  pub initial_state: serde_json::Value,
  pub title: String,
}

/// Render a route end to end: match, prefetch, render markup, pick title.
///
/// Stateless across calls. Never lets an error escape: any failure inside
/// produces a degraded but well-formed result with an inline error fragment.
pub fn render(catalog: &Catalog, url: &str, base: &str, query: &PageQuery) -> RenderResult {
  try_render(catalog, url, base, query).unwrap_or_else(|_| RenderResult {
    html: markup::error_fragment(),
    initial_state: json!({}),
    title: format!("서버 오류 - {STORE_NAME}"),
  })
}

fn try_render(
  catalog: &Catalog,
  url: &str,
  base: &str,
  query: &PageQuery,
) -> Result<RenderResult, StoreError> {
  let route = match_route(url, base);

  match route.handler {
    RouteHandler::Home => {
      let listing = prefetch_listing(catalog, query);
      let html = markup::home_page(&listing, query);
      let state = ProductState::listing(&listing);
      Ok(RenderResult {
        html,
        initial_state: initial_state(&state)?,
        title: page_title(RouteHandler::Home, None),
      })
    }
    RouteHandler::ProductDetail => {
      let product_id = route.params.get("id").cloned().unwrap_or_default();
      match fetch_detail(catalog, &product_id) {
        Some(detail) => {
          let related = related_products(catalog, &detail);
          let html = markup::detail_page(&detail, &related);
          let title = page_title(RouteHandler::ProductDetail, Some(&detail.product));
          let state = ProductState::detail(detail, related);
          Ok(RenderResult { html, initial_state: initial_state(&state)?, title })
        }
        None => {
          let state = ProductState::not_found(NOT_FOUND_MESSAGE);
          Ok(RenderResult {
            html: markup::product_not_found(""),
            initial_state: initial_state(&state)?,
            title: page_title(RouteHandler::ProductDetail, None),
          })
        }
      }
    }
    RouteHandler::NotFound => Ok(RenderResult {
      html: markup::not_found_page(),
      initial_state: initial_state(&ProductState::empty())?,
      title: page_title(RouteHandler::NotFound, None),
    }),
  }
}
