//! # mrkdwn-convert
//!
//! Conversions between standard Markdown, the mrkdwn chat formatting dialect
//! and sanitized HTML for message previews.
//!
//! ## Quick Start
//!
//! ```rust
//! use mrkdwn_convert::{markdown_to_mrkdwn, mrkdwn_to_html};
//!
//! assert_eq!(markdown_to_mrkdwn("**bold** and *italic*"), "*bold* and _italic_");
//! assert_eq!(mrkdwn_to_html("*hello*"), "<strong>hello</strong>");
//! ```
//!
//! ## Directions
//!
//! - **Markdown to mrkdwn** lexes with `comrak`, lowers the AST into a
//!   closed [`Token`] tree and renders it. Headings become bold lines, lists
//!   get bullet or numeral prefixes, tables become a boxed code block.
//! - **Mrkdwn to HTML** treats its input as untrusted. Code is shielded
//!   first, quotes and lists are grouped line by line, and inline rules
//!   (links, mentions, emphasis, emoji) run as linear scans. All text is
//!   escaped; only generated tags reach the output unescaped.
//!
//! Both directions are total: every input string produces output, and empty
//! input produces an empty string.
//!
//! ## Configuration
//!
//! ```rust
//! use mrkdwn_convert::{Converter, ConverterOptionsBuilder};
//!
//! let options = ConverterOptionsBuilder::new()
//!   .large_emoji(true)
//!   .new_tab_links(false)
//!   .build();
//!
//! let converter = Converter::new(options);
//! let html = converter.mrkdwn_to_html("<https://example.com|Example>");
//! assert_eq!(html, r#"<a href="https://example.com">Example</a>"#);
//! ```
pub mod converter;
pub mod emoji;
pub mod escape;
mod html;
pub mod markdown;
pub mod utils;

pub use crate::{
  converter::{Converter, ConverterOptions, ConverterOptionsBuilder},
  emoji::{EmojiOptions, is_emoji_only, render_emoji, resolve_emoji},
  escape::{escape_html, escape_mrkdwn},
  markdown::{Token, TokenKind},
};

/// Convert Markdown to mrkdwn with default options.
///
/// # Examples
///
/// ```
/// use mrkdwn_convert::markdown_to_mrkdwn;
///
/// assert_eq!(markdown_to_mrkdwn("- [x] Done\n- [ ] Not done"), "☑ Done\n☐ Not done");
/// ```
#[must_use]
pub fn markdown_to_mrkdwn(markdown: &str) -> String {
  Converter::default().markdown_to_mrkdwn(markdown)
}

/// Convert mrkdwn to sanitized HTML with default options.
///
/// # Examples
///
/// ```
/// use mrkdwn_convert::mrkdwn_to_html;
///
/// assert_eq!(mrkdwn_to_html("some_variable_name"), "some_variable_name");
/// assert_eq!(mrkdwn_to_html(":not_a_real_emoji:"), ":not_a_real_emoji:");
/// ```
#[must_use]
pub fn mrkdwn_to_html(text: &str) -> String {
  Converter::default().mrkdwn_to_html(text)
}
