/* crates/storefront-cli/src/serve.rs */

use std::path::Path;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use storefront_core::Catalog;

use crate::config::load_config;

pub async fn run(config_path: &Path) -> Result<()> {
  let config = load_config(config_path)?;

  let catalog = Catalog::load(&config.catalog.path)?;
  let template = std::fs::read_to_string(&config.shell.template)
    .with_context(|| format!("failed to read template {}", config.shell.template.display()))?;
  // A shell without its markup slot can never serve a page; refuse to start.
  if !template.contains(storefront_injector::HTML_MARKER) {
    bail!(
      "template {} is missing the {} placeholder",
      config.shell.template.display(),
      storefront_injector::HTML_MARKER
    );
  }

  let router = storefront_axum::build_router(Arc::new(catalog), template, config.server.base);
  let addr = format!("0.0.0.0:{}", config.server.port);
  storefront_axum::serve(router, &addr).await.context("server error")
}
