use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors raised while loading, overriding or generating a configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
  #[error("Configuration error: {0}")]
  Config(String),

  /// An override string with no `=` in it.
  #[error("Invalid config override format: '{0}'. Expected KEY=VALUE")]
  OverrideFormat(String),

  #[error("Unknown configuration key: '{0}'")]
  UnknownKey(String),

  #[error(
    "Invalid boolean value for '{key}': '{value}'. Expected one of true, \
     false, yes, no, 1, 0, on, off"
  )]
  InvalidBoolean { key: String, value: String },

  #[error("Unsupported config file format: {}", .0.display())]
  UnsupportedFormat(PathBuf),

  #[error("Template error: {0}")]
  Template(String),

  #[error("I/O error: {0}")]
  Io(#[from] io::Error),

  #[error("JSON error: {0}")]
  Serde(#[from] serde_json::Error),

  #[error("TOML error: {0}")]
  Toml(#[from] toml::de::Error),
}
