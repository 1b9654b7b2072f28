/* crates/storefront-cli/src/config.rs */

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StorefrontConfig {
  #[serde(default)]
  pub server: ServerSection,
  #[serde(default)]
  pub catalog: CatalogSection,
  #[serde(default)]
  pub shell: ShellSection,
  #[serde(default)]
  pub generate: GenerateSection,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSection {
  #[serde(default = "default_port")]
  pub port: u16,
  /// Base path prefix for production deployments, e.g. "/shop/vanilla".
  /// Empty means the app is served from the root.
  #[serde(default)]
  pub base: String,
}

impl Default for ServerSection {
  fn default() -> Self {
    Self { port: default_port(), base: String::new() }
  }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogSection {
  #[serde(default = "default_catalog_path")]
  pub path: PathBuf,
}

impl Default for CatalogSection {
  fn default() -> Self {
    Self { path: default_catalog_path() }
  }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ShellSection {
  #[serde(default = "default_template_path")]
  pub template: PathBuf,
}

impl Default for ShellSection {
  fn default() -> Self {
    Self { template: default_template_path() }
  }
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerateSection {
  #[serde(default = "default_out_dir")]
  pub out_dir: PathBuf,
}

impl Default for GenerateSection {
  fn default() -> Self {
    Self { out_dir: default_out_dir() }
  }
}

fn default_port() -> u16 {
  5174
}

fn default_catalog_path() -> PathBuf {
  PathBuf::from("data/items.json")
}

fn default_template_path() -> PathBuf {
  PathBuf::from("index.html")
}

fn default_out_dir() -> PathBuf {
  PathBuf::from("dist")
}

/// Load the TOML config. A missing file yields the defaults; a present but
/// malformed file is an error.
pub fn load_config(path: &Path) -> Result<StorefrontConfig> {
  if !path.exists() {
    return Ok(StorefrontConfig::default());
  }
  let raw = std::fs::read_to_string(path)
    .with_context(|| format!("failed to read config {}", path.display()))?;
  let config: StorefrontConfig = toml::from_str(&raw)
    .with_context(|| format!("failed to parse config {}", path.display()))?;
  if !config.server.base.is_empty() && !config.server.base.starts_with('/') {
    bail!("server.base \"{}\" must start with '/'", config.server.base);
  }
  Ok(config)
}
