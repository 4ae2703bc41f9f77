use std::{
  fs,
  path::{Path, PathBuf},
  sync::OnceLock,
};

use mrkdwn_convert::ConverterOptions;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Configuration for the mrkdwn converter.
///
/// Every setting is optional so that several files can be layered: a value
/// left unset in a later file keeps whatever an earlier file chose. Unset
/// values resolve to the [`ConverterOptions`] defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
  /// Settings for reading Markdown.
  pub markdown: MarkdownConfig,

  /// Settings for rendering mrkdwn as HTML.
  pub html: HtmlConfig,
}

/// The `[markdown]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkdownConfig {
  /// Enable tables, strikethrough, task lists and autolinks.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub gfm: Option<bool>,
}

/// The `[html]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HtmlConfig {
  /// Resolve `:shortcode:` emoji.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub emoji: Option<bool>,

  /// Enlarge emoji in emoji-only messages.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub large_emoji: Option<bool>,

  /// Open links in a new tab.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub new_tab_links: Option<bool>,
}

/// Keys accepted by [`Config::apply_overrides`].
pub const OVERRIDE_KEYS: [&str; 4] = [
  "markdown.gfm",
  "html.emoji",
  "html.large_emoji",
  "html.new_tab_links",
];

const LOCAL_CONFIG_FILES: [&str; 4] =
  ["mrkdwn.toml", "mrkdwn.json", ".mrkdwn.toml", ".mrkdwn.json"];

const USER_CONFIG_FILES: [&str; 2] = ["config.toml", "config.json"];

impl Config {
  /// Load configuration from a TOML or JSON file, chosen by extension.
  ///
  /// # Errors
  ///
  /// Returns an error if the file cannot be read or parsed, or if its
  /// extension is neither `toml` nor `json`.
  pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
    let path = path.as_ref();
    let extension = path
      .extension()
      .and_then(|ext| ext.to_str())
      .map(str::to_lowercase);
    if !matches!(extension.as_deref(), Some("toml" | "json")) {
      return Err(ConfigError::UnsupportedFormat(path.to_path_buf()));
    }

    let content = fs::read_to_string(path).map_err(|e| {
      ConfigError::Config(format!(
        "Failed to read config file: {}: {e}",
        path.display()
      ))
    })?;

    let parsed = if extension.as_deref() == Some("json") {
      serde_json::from_str(&content).map_err(ConfigError::from)
    } else {
      toml::from_str(&content).map_err(ConfigError::from)
    };

    parsed.map_err(|e| {
      ConfigError::Config(format!(
        "Failed to parse config from {}: {e}",
        path.display()
      ))
    })
  }

  /// Load configuration from files and `KEY=VALUE` overrides.
  ///
  /// Explicit `config_files` are loaded and merged in order. Without any,
  /// a config file is looked up with [`Config::find_config_file`], and the
  /// defaults are used when none exists. Overrides are applied last.
  ///
  /// # Errors
  ///
  /// Returns an error if a file fails to load or an override is invalid.
  pub fn load(
    config_files: &[PathBuf],
    config_overrides: &[String],
  ) -> Result<Self, ConfigError> {
    let mut config = if config_files.is_empty() {
      match Self::find_config_file() {
        Some(discovered) => {
          log::info!("Using discovered config file: {}", discovered.display());
          Self::from_file(&discovered)?
        },
        None => {
          log::debug!("No config file found, using defaults");
          Self::default()
        },
      }
    } else {
      let mut merged = Self::default();
      for path in config_files {
        merged.merge(Self::from_file(path)?);
      }
      if config_files.len() > 1 {
        log::info!("Loaded and merged {} config files", config_files.len());
      }
      merged
    };

    if !config_overrides.is_empty() {
      config.apply_overrides(config_overrides)?;
    }

    Ok(config)
  }

  /// Merge another config into this one. Every value set in `other`
  /// replaces the value here; unset values leave this config untouched.
  pub fn merge(&mut self, other: Self) {
    let Self { markdown, html } = other;

    if markdown.gfm.is_some() {
      self.markdown.gfm = markdown.gfm;
    }
    if html.emoji.is_some() {
      self.html.emoji = html.emoji;
    }
    if html.large_emoji.is_some() {
      self.html.large_emoji = html.large_emoji;
    }
    if html.new_tab_links.is_some() {
      self.html.new_tab_links = html.new_tab_links;
    }
  }

  /// Apply configuration overrides from `KEY=VALUE` strings, where `KEY` is
  /// one of [`OVERRIDE_KEYS`].
  ///
  /// # Errors
  ///
  /// Returns an error if a string has no `=`, names an unknown key, or
  /// carries a value that is not a boolean.
  ///
  /// # Example
  ///
  /// ```
  /// use mrkdwn_config::Config;
  ///
  /// let mut config = Config::default();
  /// config
  ///   .apply_overrides(&["html.large_emoji=yes".to_string()])
  ///   .unwrap();
  /// assert_eq!(config.html.large_emoji, Some(true));
  /// ```
  pub fn apply_overrides(
    &mut self,
    overrides: &[String],
  ) -> Result<(), ConfigError> {
    for override_str in overrides {
      let (key, value) = override_str
        .split_once('=')
        .ok_or_else(|| ConfigError::OverrideFormat(override_str.clone()))?;

      self.apply_override(key.trim(), value.trim())?;
    }

    Ok(())
  }

  fn apply_override(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
    let slot = match key {
      "markdown.gfm" => &mut self.markdown.gfm,
      "html.emoji" => &mut self.html.emoji,
      "html.large_emoji" => &mut self.html.large_emoji,
      "html.new_tab_links" => &mut self.html.new_tab_links,
      _ => return Err(ConfigError::UnknownKey(key.to_string())),
    };
    *slot = Some(parse_bool(key, value)?);
    log::debug!("Applied config override: {key}={value}");
    Ok(())
  }

  /// Search for a config file in the current directory, then in the user
  /// configuration directory. The result is computed once per process.
  #[must_use]
  pub fn find_config_file() -> Option<PathBuf> {
    static RESULT: OnceLock<Option<PathBuf>> = OnceLock::new();
    RESULT
      .get_or_init(|| {
        let current_dir = std::env::current_dir().ok();
        let user_dir = std::env::var_os("XDG_CONFIG_HOME")
          .map(PathBuf::from)
          .or_else(|| {
            std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".config"))
          })
          .map(|dir| dir.join("mrkdwn"));

        find_config_in(current_dir.as_deref(), user_dir.as_deref())
      })
      .clone()
  }

  /// Write the default configuration file for `format` to `path`.
  ///
  /// # Errors
  ///
  /// Returns an error if the format is unsupported or the file cannot be
  /// written.
  pub fn generate_default_config(
    format: &str,
    path: &Path,
  ) -> Result<(), ConfigError> {
    let content = crate::templates::get_template(format)?;

    fs::write(path, content).map_err(|e| {
      ConfigError::Config(format!(
        "Failed to write default config to {}: {e}",
        path.display()
      ))
    })?;

    log::info!("Created default configuration file: {}", path.display());
    Ok(())
  }
}

impl From<&Config> for ConverterOptions {
  fn from(config: &Config) -> Self {
    let defaults = Self::default();
    Self {
      gfm:           config.markdown.gfm.unwrap_or(defaults.gfm),
      emoji:         config.html.emoji.unwrap_or(defaults.emoji),
      large_emoji:   config.html.large_emoji.unwrap_or(defaults.large_emoji),
      new_tab_links: config
        .html
        .new_tab_links
        .unwrap_or(defaults.new_tab_links),
    }
  }
}

/// First existing config file: local names in `current_dir`, then
/// `config.{toml,json}` in `user_dir`.
fn find_config_in(
  current_dir: Option<&Path>,
  user_dir: Option<&Path>,
) -> Option<PathBuf> {
  let local = current_dir
    .into_iter()
    .flat_map(|dir| LOCAL_CONFIG_FILES.iter().map(move |name| dir.join(name)));
  let user = user_dir
    .into_iter()
    .flat_map(|dir| USER_CONFIG_FILES.iter().map(move |name| dir.join(name)));

  local.chain(user).find(|path| path.is_file())
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
  match value.to_lowercase().as_str() {
    "true" | "yes" | "1" | "on" => Ok(true),
    "false" | "no" | "0" | "off" => Ok(false),
    _ => {
      Err(ConfigError::InvalidBoolean {
        key:   key.to_string(),
        value: value.to_string(),
      })
    },
  }
}
