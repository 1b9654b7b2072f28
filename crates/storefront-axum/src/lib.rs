/* crates/storefront-axum/src/lib.rs */

mod error;
mod handler;

use std::sync::Arc;

use storefront_core::Catalog;

/// Build the application router: JSON API endpoints plus the SSR fallback.
/// The catalog handle and shell template are loaded once by the caller and
/// shared read-only across requests.
pub fn build_router(catalog: Arc<Catalog>, template: String, base: String) -> axum::Router {
  handler::build_router(catalog, template, base)
}

/// Bind and serve until the task is cancelled.
pub async fn serve(router: axum::Router, addr: &str) -> std::io::Result<()> {
  let listener = tokio::net::TcpListener::bind(addr).await?;
  let local_addr = listener.local_addr()?;
  tracing::info!("storefront running on http://localhost:{}", local_addr.port());
  axum::serve(listener, router).await
}
