use std::path::PathBuf;

use clap::Parser;

use super::colors::ColorMode;

#[derive(Parser, Debug)]
#[command(name = "pydantic-gen")]
#[command(author, version, about = "OpenAPI to pydantic model generator")]
pub struct Cli {
  /// Path to the OpenAPI specification file (JSON or YAML)
  #[arg(value_name = "FILE")]
  pub input: PathBuf,

  /// Path where the generated Python module will be written (default: stdout)
  #[arg(short, long, value_name = "FILE")]
  pub output: Option<PathBuf>,

  /// Emit a serialized dump of the intermediate declarations instead of
  /// Python source
  #[arg(long, default_value_t = false)]
  pub debug: bool,

  /// Enable verbose output with detailed progress information
  #[arg(short, long, default_value_t = false)]
  pub verbose: bool,

  /// Suppress non-essential output (errors only)
  #[arg(short, long, default_value_t = false)]
  pub quiet: bool,

  /// Control color output
  #[arg(long, value_enum, default_value = "auto")]
  pub color: ColorMode,
}
