//! Character-level escaping for HTML output and for mrkdwn text.
//!
//! Both functions are one-directional: nothing in this crate ever unescapes.
use std::borrow::Cow;

/// Escape `&`, `<`, `>` and `"` for use in HTML text and double-quoted
/// attribute values.
///
/// Escaping is not idempotent; escaping twice double-encodes every `&`.
///
/// # Examples
///
/// ```
/// use mrkdwn_convert::escape::escape_html;
///
/// assert_eq!(escape_html(r#"<a href="x">"#), "&lt;a href=&quot;x&quot;&gt;");
/// ```
#[must_use]
pub fn escape_html(text: &str) -> Cow<'_, str> {
  html_escape::encode_double_quoted_attribute(text)
}

/// Escape the three characters mrkdwn reserves for links, mentions and
/// directives (`&`, `<`, `>`), so literal text is never read as a directive.
///
/// # Examples
///
/// ```
/// use mrkdwn_convert::escape::escape_mrkdwn;
///
/// assert_eq!(escape_mrkdwn("a < b & \"c\""), "a &lt; b &amp; \"c\"");
/// ```
#[must_use]
pub fn escape_mrkdwn(text: &str) -> Cow<'_, str> {
  html_escape::encode_text(text)
}

/// Append the HTML-escaped form of `c` to `out`.
///
/// Used by the inline serializer, which walks text one character at a time.
pub(crate) fn push_escaped_html(out: &mut String, c: char) {
  match c {
    '&' => out.push_str("&amp;"),
    '<' => out.push_str("&lt;"),
    '>' => out.push_str("&gt;"),
    '"' => out.push_str("&quot;"),
    _ => out.push(c),
  }
}
