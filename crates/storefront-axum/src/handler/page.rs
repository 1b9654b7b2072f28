/* crates/storefront-axum/src/handler/page.rs */

use std::sync::Arc;

use axum::extract::State;
use axum::http::{StatusCode, Uri};
use axum::response::{Html, IntoResponse, Response};
use storefront_core::PageQuery;

use super::{query_params, AppState};

/// SSR fallback: render the matched page and inject it into the shell.
///
/// Render failures degrade inside the engine and still produce a document;
/// a broken shell template is the one fatal path and aborts with a 500
/// diagnostic instead of degrading silently.
pub(super) async fn handle_page(
  State(state): State<Arc<AppState>>,
  uri: Uri,
) -> Response {
  let params = query_params(&uri);
  let query = PageQuery::from_params(&params);
  let result = storefront_engine::render(&state.catalog, uri.path(), &state.base, &query);
  tracing::debug!(path = %uri.path(), title = %result.title, "ssr render");

  match storefront_injector::inject(&state.template, &result.html, &result.initial_state, &result.title)
  {
    Ok(document) => Html(document).into_response(),
    Err(err) => {
      tracing::error!(%err, "broken HTML shell");
      (StatusCode::INTERNAL_SERVER_ERROR, format!("template configuration error: {err}"))
        .into_response()
    }
  }
}
