use std::path::PathBuf;

use chrono::{Local, Timelike};
use crossterm::style::Stylize;
use tokio::io::AsyncWriteExt;

use crate::{
  generator::{
    orchestrator::{GeneratedOutput, GenerationStats, Orchestrator},
    schema_graph::SchemaGraph,
  },
  ui::{Cli, Colors},
  utils::spec::SpecLoader,
};

fn format_timestamp() -> String {
  let now = Local::now();
  format!("[{:02}:{:02}:{:02}]", now.hour(), now.minute(), now.second())
}

#[derive(Debug, Clone)]
pub struct GenerateConfig {
  pub input: PathBuf,
  pub output: Option<PathBuf>,
  pub debug: bool,
  pub verbose: bool,
  pub quiet: bool,
}

impl GenerateConfig {
  pub fn from_cli(cli: &Cli) -> Self {
    Self {
      input: cli.input.clone(),
      output: cli.output.clone(),
      debug: cli.debug,
      verbose: cli.verbose,
      quiet: cli.quiet,
    }
  }

  async fn load_graph(&self) -> anyhow::Result<SchemaGraph> {
    let document = SpecLoader::open(&self.input).await?.parse()?;
    SchemaGraph::from_document(document)
  }

  async fn write_output(&self, code: String) -> anyhow::Result<()> {
    match &self.output {
      Some(path) => {
        if let Some(parent) = path.parent() {
          tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(path, code).await?;
      }
      None => {
        let mut stdout = tokio::io::stdout();
        stdout.write_all(code.as_bytes()).await?;
        stdout.flush().await?;
      }
    }
    Ok(())
  }
}

/// Progress output around the generation phases. All log lines go to stderr
/// so they never mix with generated source on stdout.
struct GenerateLogger<'a> {
  config: &'a GenerateConfig,
  colors: &'a Colors,
}

impl<'a> GenerateLogger<'a> {
  fn new(config: &'a GenerateConfig, colors: &'a Colors) -> Self {
    Self { config, colors }
  }

  fn info(&self, message: &str) {
    if !self.config.quiet {
      eprintln!("{} {message}", format_timestamp().with(self.colors.timestamp()));
    }
  }

  fn stat(&self, label: &str, value: String) {
    if !self.config.quiet {
      eprintln!(
        "            {:<22} {}",
        label.with(self.colors.label()),
        value.with(self.colors.value())
      );
    }
  }

  fn log_loading(&self) {
    self.info(
      &format!("Loading OpenAPI spec from: {}", self.config.input.display())
        .with(self.colors.primary())
        .to_string(),
    );
  }

  fn log_generating(&self) {
    let message = if self.config.debug {
      "Dumping intermediate declarations..."
    } else {
      "Generating pydantic models..."
    };
    self.info(&message.with(self.colors.primary()).to_string());
  }

  fn print_statistics(&self, stats: &GenerationStats) {
    if self.config.quiet {
      return;
    }

    self.stat("Models generated:", stats.models_generated.to_string());
    self.stat("", format!("{} classes", stats.classes_generated));
    self.stat("", format!("{} enums", stats.enums_generated));
    if stats.rebuild_calls > 0 {
      self.stat("Forward-ref rebuilds:", stats.rebuild_calls.to_string());
    }
    if !stats.skipped_schemas.is_empty() {
      self.stat("Skipped schemas:", stats.skipped_schemas.len().to_string());
    }

    if self.config.verbose {
      for name in &stats.skipped_schemas {
        eprintln!(
          "{} {}",
          "Skipped:".with(self.colors.accent()),
          name.clone().with(self.colors.primary())
        );
      }
    }
  }

  fn log_writing(&self) {
    let target = self
      .config
      .output
      .as_ref()
      .map_or_else(|| "stdout".to_string(), |path| path.display().to_string());
    self.info(&format!("Writing to: {target}").with(self.colors.primary()).to_string());
  }

  fn log_success(&self) {
    if !self.config.quiet {
      eprintln!();
      eprintln!(
        "{} {}",
        format_timestamp().with(self.colors.timestamp()),
        "Successfully generated pydantic models".with(self.colors.success())
      );
    }
  }
}

pub async fn generate_models(config: GenerateConfig, colors: &Colors) -> anyhow::Result<()> {
  let logger = GenerateLogger::new(&config, colors);

  logger.log_loading();
  let graph = config.load_graph().await?;

  logger.log_generating();
  let orchestrator = Orchestrator::new(graph);
  let GeneratedOutput { code, stats } = if config.debug {
    orchestrator.generate_debug()?
  } else {
    orchestrator.generate()?
  };

  logger.print_statistics(&stats);
  logger.log_writing();
  config.write_output(code).await?;

  logger.log_success();
  Ok(())
}
