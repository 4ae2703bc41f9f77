//! Type definitions for the converter.
//!
//! # Examples
//!
//! ```
//! use mrkdwn_convert::{Converter, ConverterOptions};
//!
//! let options = ConverterOptions {
//!   large_emoji: true,
//!   ..Default::default()
//! };
//!
//! let converter = Converter::new(options);
//! ```

/// Options for both conversion directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(
  clippy::struct_excessive_bools,
  reason = "Config struct with related boolean flags"
)]
pub struct ConverterOptions {
  /// Enable GitHub Flavored Markdown (tables, strikethrough, task lists and
  /// autolinks) when lexing Markdown.
  pub gfm: bool,

  /// Replace `:name:` shortcodes with emoji fragments in HTML output.
  pub emoji: bool,

  /// Render emoji with the enlarged class when a message holds nothing but
  /// emoji.
  pub large_emoji: bool,

  /// Add `target="_blank" rel="noopener noreferrer"` to generated links.
  pub new_tab_links: bool,
}

impl Default for ConverterOptions {
  fn default() -> Self {
    Self {
      gfm:           true,
      emoji:         true,
      large_emoji:   false,
      new_tab_links: true,
    }
  }
}

/// Stateless converter carrying a fixed set of options.
///
/// Holds no mutable state, so a single instance can be shared freely across
/// threads.
#[derive(Debug, Clone, Default)]
pub struct Converter {
  pub(crate) options: ConverterOptions,
}

/// Builder for constructing `ConverterOptions` with method chaining.
#[derive(Debug, Clone)]
pub struct ConverterOptionsBuilder {
  options: ConverterOptions,
}

impl ConverterOptionsBuilder {
  /// Create a new builder with default options.
  #[must_use]
  pub fn new() -> Self {
    Self {
      options: ConverterOptions::default(),
    }
  }

  /// Enable or disable GitHub Flavored Markdown.
  #[must_use]
  pub const fn gfm(mut self, enabled: bool) -> Self {
    self.options.gfm = enabled;
    self
  }

  /// Enable or disable emoji shortcode substitution.
  #[must_use]
  pub const fn emoji(mut self, enabled: bool) -> Self {
    self.options.emoji = enabled;
    self
  }

  /// Enable or disable enlarged emoji for emoji-only messages.
  #[must_use]
  pub const fn large_emoji(mut self, enabled: bool) -> Self {
    self.options.large_emoji = enabled;
    self
  }

  /// Enable or disable opening links in a new tab.
  #[must_use]
  pub const fn new_tab_links(mut self, enabled: bool) -> Self {
    self.options.new_tab_links = enabled;
    self
  }

  /// Build the final `ConverterOptions`.
  #[must_use]
  pub const fn build(self) -> ConverterOptions {
    self.options
  }
}

impl Default for ConverterOptionsBuilder {
  fn default() -> Self {
    Self::new()
  }
}
