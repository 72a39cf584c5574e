use std::io;

use thiserror::Error;

/// Top-level error type for the wiregen crate.
#[derive(Debug, Error)]
pub enum WiregenError {
  #[error("Configuration error: {0}")]
  Config(String),

  #[error("I/O error: {0}")]
  Io(#[from] io::Error),

  #[error("Serde error: {0}")]
  Serde(#[from] serde_json::Error),

  #[error("TOML error: {0}")]
  Toml(#[from] toml::de::Error),

  #[error("Figma API error: {0}")]
  Figma(#[from] wiregen_figma::FigmaError),
}
