//! Commented default configuration files, written by `mrkdwn init`.
use crate::error::ConfigError;

/// Default configuration in TOML. Every key is present with its default
/// value so the file doubles as a reference.
pub const DEFAULT_TOML_TEMPLATE: &str = r#"# mrkdwn configuration file

[markdown]
# Enable GitHub-flavored extensions when reading Markdown: tables,
# ~~strikethrough~~, task list items and bare URL autolinks.
gfm = true

[html]
# Replace :shortcode: emoji with their glyphs in HTML previews.
emoji = true

# Render emoji at a larger size when a message contains nothing but emoji.
large_emoji = false

# Open links in a new tab (adds target="_blank" rel="noopener noreferrer").
new_tab_links = true
"#;

/// Default configuration in JSON. JSON has no comments, so the keys carry
/// their default values and nothing else.
pub const DEFAULT_JSON_TEMPLATE: &str = r#"{
  "markdown": {
    "gfm": true
  },
  "html": {
    "emoji": true,
    "large_emoji": false,
    "new_tab_links": true
  }
}
"#;

/// Get the default configuration template for `format` (`toml` or `json`,
/// case-insensitive).
///
/// # Errors
///
/// Returns [`ConfigError::Template`] for any other format.
pub fn get_template(format: &str) -> Result<&'static str, ConfigError> {
  match format.to_lowercase().as_str() {
    "toml" => Ok(DEFAULT_TOML_TEMPLATE),
    "json" => Ok(DEFAULT_JSON_TEMPLATE),
    _ => {
      Err(ConfigError::Template(format!(
        "Unsupported config format: {format}"
      )))
    },
  }
}

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used, reason = "Fine in tests")]

  use super::*;
  use crate::Config;

  #[test]
  fn test_get_template_is_case_insensitive() {
    assert!(get_template("TOML").is_ok());
    assert!(get_template("Json").is_ok());
  }

  #[test]
  fn test_get_template_rejects_unknown_format() {
    let err = get_template("yaml").unwrap_err();
    assert!(err.to_string().contains("Unsupported config format: yaml"));
  }

  #[test]
  fn test_templates_parse_to_defaults() {
    let from_toml: Config = toml::from_str(DEFAULT_TOML_TEMPLATE).unwrap();
    let from_json: Config = serde_json::from_str(DEFAULT_JSON_TEMPLATE).unwrap();

    let defaults = mrkdwn_convert::ConverterOptions::default();
    assert_eq!(mrkdwn_convert::ConverterOptions::from(&from_toml), defaults);
    assert_eq!(mrkdwn_convert::ConverterOptions::from(&from_json), defaults);
  }
}
