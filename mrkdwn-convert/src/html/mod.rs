//! Mrkdwn to sanitized HTML.
//!
//! The conversion runs in phases over typed intermediate values rather than
//! over marked-up strings:
//!
//! 1. [`fence`] extracts triple-backtick code into pre-rendered segments and
//!    splits the rest into lines of text and code pieces.
//! 2. [`block`] classifies each line, groups quote and list runs, and formats
//!    the text pieces through [`inline`].
//! 3. [`block::assemble`] joins the fragments, placing `<br>` between lines
//!    except where a block element already delimits them.
//!
//! Every character of input text that reaches the output is HTML-escaped;
//! the only unescaped markup is what this module generates itself.
mod block;
mod directive;
mod emphasis;
mod fence;
mod inline;

use log::trace;

use crate::{ConverterOptions, emoji::is_emoji_only};

/// Per-call settings for inline formatting.
#[derive(Debug, Clone, Copy)]
pub(crate) struct InlineContext {
  pub(crate) emoji:         bool,
  /// Resolved for the whole message: only set when the message is
  /// emoji-only.
  pub(crate) large_emoji:   bool,
  pub(crate) new_tab_links: bool,
}

impl InlineContext {
  fn new(text: &str, options: &ConverterOptions) -> Self {
    Self {
      emoji:         options.emoji,
      large_emoji:   options.emoji && options.large_emoji && is_emoji_only(text),
      new_tab_links: options.new_tab_links,
    }
  }
}

/// Convert `text` to HTML.
pub(crate) fn render(text: &str, options: &ConverterOptions) -> String {
  let context = InlineContext::new(text, options);
  let segments = fence::extract(text);
  let lines = fence::lines(&segments);
  trace!(
    "Extracted {} segments over {} lines",
    segments.len(),
    lines.len()
  );
  let fragments = block::segment(&lines, &context);
  block::assemble(&fragments, false)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::ConverterOptionsBuilder;

  fn html(text: &str) -> String {
    render(text, &ConverterOptions::default())
  }

  #[test]
  fn test_multiline_message() {
    assert_eq!(
      html("*Deploy* done\n> all green\n• api\n• web"),
      "<strong>Deploy</strong> done<blockquote>all \
       green</blockquote><ul><li>api</li><li>web</li></ul>"
    );
  }

  #[test]
  fn test_fence_between_lines() {
    assert_eq!(
      html("before\n```\nlet a = *b*;\n```\nafter"),
      "before<pre><code>let a = *b*;\n</code></pre>after"
    );
  }

  #[test]
  fn test_fence_inside_quote() {
    assert_eq!(
      html("> ```x```"),
      "<blockquote><pre><code>x</code></pre></blockquote>"
    );
  }

  #[test]
  fn test_large_emoji_only_when_emoji_only() {
    let options = ConverterOptionsBuilder::new().large_emoji(true).build();
    assert!(render(":tada: :fire:", &options).contains("emoji emoji-large"));
    assert!(!render(":tada: yay", &options).contains("emoji-large"));
  }

  #[test]
  fn test_escaped_quote_marker() {
    assert_eq!(html("&gt; quoted"), "<blockquote>quoted</blockquote>");
  }

  #[test]
  fn test_trailing_newline_keeps_break() {
    assert_eq!(html("a\n"), "a<br>");
  }
}
