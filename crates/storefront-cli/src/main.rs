/* crates/storefront-cli/src/main.rs */

mod config;
mod generate;
mod serve;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "storefront", version, about = "Server-rendered storefront")]
struct Cli {
  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Serve the SSR app and the JSON product API
  Serve {
    #[arg(short, long, default_value = "storefront.toml")]
    config: PathBuf,
  },
  /// Pre-render every route into a static output tree
  Generate {
    #[arg(short, long, default_value = "storefront.toml")]
    config: PathBuf,
  },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt::init();

  let cli = Cli::parse();
  match cli.command {
    Commands::Serve { config } => serve::run(&config).await,
    Commands::Generate { config } => generate::run(&config),
  }
}
