//! Core implementation of the converter.
use log::trace;

use super::types::{Converter, ConverterOptions};
use crate::{html, markdown};

impl Converter {
  /// Create a new `Converter` with the given options.
  #[must_use]
  pub const fn new(options: ConverterOptions) -> Self {
    Self { options }
  }

  /// Access converter options.
  #[must_use]
  pub const fn options(&self) -> &ConverterOptions {
    &self.options
  }

  /// Convert standard Markdown into chat mrkdwn.
  ///
  /// Empty or whitespace-only input yields an empty string.
  ///
  /// # Examples
  ///
  /// ```
  /// use mrkdwn_convert::Converter;
  ///
  /// let converter = Converter::default();
  /// assert_eq!(converter.markdown_to_mrkdwn("**hi** [docs](https://x.io)"), "*hi* <https://x.io|docs>");
  /// ```
  #[must_use]
  pub fn markdown_to_mrkdwn(&self, markdown: &str) -> String {
    if markdown.trim().is_empty() {
      return String::new();
    }
    trace!("Converting {} bytes of markdown to mrkdwn", markdown.len());
    let tokens = markdown::tokenize(markdown, self.options.gfm);
    markdown::render_tokens(&tokens)
  }

  /// Convert chat mrkdwn into sanitized preview HTML.
  ///
  /// Empty input yields an empty string. Every character that reaches the
  /// output as text is HTML-escaped.
  ///
  /// # Examples
  ///
  /// ```
  /// use mrkdwn_convert::Converter;
  ///
  /// let converter = Converter::default();
  /// assert_eq!(converter.mrkdwn_to_html("*hello*"), "<strong>hello</strong>");
  /// ```
  #[must_use]
  pub fn mrkdwn_to_html(&self, text: &str) -> String {
    if text.is_empty() {
      return String::new();
    }
    trace!("Converting {} bytes of mrkdwn to html", text.len());
    html::render(text, &self.options)
  }
}

impl From<ConverterOptions> for Converter {
  fn from(options: ConverterOptions) -> Self {
    Self::new(options)
  }
}
