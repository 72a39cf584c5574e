use std::{
  fs,
  path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use wiregen_figma::DEFAULT_API_BASE;
use wiregen_render::RenderOptions;

use crate::error::WiregenError;

/// Environment variable holding the Figma personal access token.
///
/// The token is deliberately never read from the config file.
pub const TOKEN_ENV_VAR: &str = "FIGMA_TOKEN";

/// Service configuration.
///
/// Loaded from an optional TOML file; every field has a default so an empty
/// or absent file is valid.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
  /// Address the HTTP service binds to.
  pub listen: String,

  /// Base URL of the Figma REST API.
  pub api_base: String,

  /// File key used when a request does not name one.
  pub default_file_key: Option<String>,

  /// Default render options, overridable per request.
  pub render: RenderOptions,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      listen: "127.0.0.1:8080".to_owned(),
      api_base: DEFAULT_API_BASE.to_owned(),
      default_file_key: None,
      render: RenderOptions::default(),
    }
  }
}

impl Config {
  /// Load configuration from the given file, or from a `wiregen.toml`
  /// found in the working directory, falling back to defaults when
  /// neither exists.
  pub fn load(path: Option<&Path>) -> Result<Self, WiregenError> {
    let candidate = match path {
      Some(explicit) => {
        if !explicit.is_file() {
          return Err(WiregenError::Config(format!(
            "configuration file not found: {}",
            explicit.display()
          )));
        }
        Some(explicit.to_path_buf())
      },
      None => Self::find_config_file(),
    };

    let Some(file) = candidate else {
      return Ok(Self::default());
    };

    let raw = fs::read_to_string(&file)?;
    Ok(toml::from_str(&raw)?)
  }

  /// Search for config files in common locations
  #[must_use]
  fn find_config_file() -> Option<PathBuf> {
    let config_filenames = ["wiregen.toml", ".wiregen.toml"];

    let current_dir = std::env::current_dir().ok()?;
    config_filenames
      .iter()
      .map(|filename| current_dir.join(filename))
      .find(|path| path.is_file())
  }

  /// Resolve the Figma access token from the environment.
  #[must_use]
  pub fn token_from_env() -> Option<String> {
    std::env::var(TOKEN_ENV_VAR)
      .ok()
      .filter(|token| !token.is_empty())
  }
}
