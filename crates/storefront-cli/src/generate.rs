/* crates/storefront-cli/src/generate.rs */

use std::path::Path;

use anyhow::{Context, Result};
use storefront_core::{filter_and_sort, Catalog, PageQuery};
use storefront_engine::RenderResult;

use crate::config::load_config;

pub fn run(config_path: &Path) -> Result<()> {
  let config = load_config(config_path)?;
  let catalog = Catalog::load(&config.catalog.path)?;
  let template = std::fs::read_to_string(&config.shell.template)
    .with_context(|| format!("failed to read template {}", config.shell.template.display()))?;

  println!("generating static site into {}", config.generate.out_dir.display());
  let pages = generate_site(&catalog, &template, &config.generate.out_dir)?;
  println!("done: {pages} pages written");
  Ok(())
}

/// Pre-render the home page, every product detail page and the 404 page.
/// Product pages land at `product/{id}/index.html` for clean URLs.
pub(crate) fn generate_site(catalog: &Catalog, template: &str, out_dir: &Path) -> Result<usize> {
  std::fs::create_dir_all(out_dir)
    .with_context(|| format!("failed to create {}", out_dir.display()))?;
  let mut pages = 0;

  let home = storefront_engine::render(catalog, "/", "", &PageQuery::default());
  write_page(&out_dir.join("index.html"), template, &home)?;
  pages += 1;

  // Walk products in the listing's default order (cheapest first)
  for product in filter_and_sort(catalog.products(), &PageQuery::default()) {
    let url = format!("/product/{}/", product.product_id);
    let result = storefront_engine::render(catalog, &url, "", &PageQuery::default());
    let dir = out_dir.join("product").join(&product.product_id);
    std::fs::create_dir_all(&dir).with_context(|| format!("failed to create {}", dir.display()))?;
    write_page(&dir.join("index.html"), template, &result)?;
    pages += 1;
  }

  let not_found = storefront_engine::render(catalog, "/404", "", &PageQuery::default());
  write_page(&out_dir.join("404.html"), template, &not_found)?;
  pages += 1;

  Ok(pages)
}

fn write_page(path: &Path, template: &str, result: &RenderResult) -> Result<()> {
  let document =
    storefront_injector::inject(template, &result.html, &result.initial_state, &result.title)?;
  std::fs::write(path, document).with_context(|| format!("failed to write {}", path.display()))
}
