#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_errors_doc)]
use clap::Parser;

use crate::ui::{Cli, Colors, colors};

mod generator;
mod reserved;
mod ui;
mod utils;

#[cfg(test)]
mod tests;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  let cli = Cli::parse();
  let colors = Colors::new(colors::colors_enabled(cli.color));
  let config = ui::commands::GenerateConfig::from_cli(&cli);

  ui::commands::generate_models(config, &colors).await
}
