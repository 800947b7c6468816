use std::{ffi::OsStr, path::Path};

use anyhow::anyhow;
use fmmap::tokio::{AsyncMmapFile, AsyncMmapFileExt};
use serde_json::Value;

/// Input document format, chosen by an explicit extension mapping.
///
/// There is no process-wide registry and no default: a path with an unmapped
/// extension fails before any parsing or resolution starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecFormat {
  Json,
  Yaml,
}

impl SpecFormat {
  #[must_use]
  pub fn from_extension(ext: &str) -> Option<Self> {
    match ext {
      "json" => Some(Self::Json),
      "yaml" | "yml" => Some(Self::Yaml),
      _ => None,
    }
  }
}

pub struct SpecLoader {
  file: AsyncMmapFile,
  format: SpecFormat,
}

impl SpecLoader {
  pub async fn open(path: &Path) -> anyhow::Result<Self> {
    let ext = path.extension().and_then(OsStr::to_str).unwrap_or_default();
    let format = SpecFormat::from_extension(ext)
      .ok_or_else(|| anyhow!("unsupported file type `.{ext}` for {}", path.display()))?;

    let file = AsyncMmapFile::open(path).await?;

    Ok(Self { file, format })
  }

  /// Parses the document into an ordered generic value. JSON keeps key order
  /// through the `preserve_order` map; YAML deserializes through the same
  /// ordered `Value` representation.
  pub fn parse(&self) -> anyhow::Result<Value> {
    match self.format {
      SpecFormat::Json => Ok(serde_json::from_slice(self.file.as_slice())?),
      SpecFormat::Yaml => {
        let content = std::str::from_utf8(self.file.as_slice())?;
        Ok(serde_yaml::from_str(content)?)
      }
    }
  }
}
