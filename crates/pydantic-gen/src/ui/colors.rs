use std::io::IsTerminal;

use clap::ValueEnum;
use crossterm::style::Color;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorMode {
  Always,
  Auto,
  Never,
}

pub fn colors_enabled(mode: ColorMode) -> bool {
  match mode {
    ColorMode::Always => true,
    ColorMode::Never => false,
    ColorMode::Auto => std::io::stderr().is_terminal(),
  }
}

/// Palette for progress output. Every accessor collapses to `Color::Reset`
/// when colors are disabled.
pub struct Colors {
  enabled: bool,
}

impl Colors {
  pub const fn new(enabled: bool) -> Self {
    Self { enabled }
  }

  const fn pick(&self, color: Color) -> Color {
    if self.enabled { color } else { Color::Reset }
  }

  pub const fn timestamp(&self) -> Color {
    self.pick(Color::Rgb { r: 118, g: 166, b: 166 })
  }

  pub const fn primary(&self) -> Color {
    self.pick(Color::Rgb { r: 222, g: 222, b: 222 })
  }

  pub const fn success(&self) -> Color {
    self.pick(Color::Rgb { r: 128, g: 200, b: 120 })
  }

  pub const fn accent(&self) -> Color {
    self.pick(Color::Rgb { r: 224, g: 175, b: 104 })
  }

  pub const fn label(&self) -> Color {
    self.pick(Color::Rgb { r: 160, g: 160, b: 160 })
  }

  pub const fn value(&self) -> Color {
    self.pick(Color::Rgb { r: 152, g: 195, b: 121 })
  }
}
