//! Conversion entry points with panic recovery.
//!
//! Neither conversion direction is expected to panic, but callers that feed
//! untrusted input from long-running services can use these wrappers to
//! degrade to a safe fallback instead of unwinding further.
use log::error;

use super::types::Converter;
use crate::escape::{escape_html, escape_mrkdwn};

/// Run `convert` on `content`, returning `fallback(content)` if it panics.
pub fn convert_safe<F, G>(content: &str, convert: F, fallback: G) -> String
where
  F: FnOnce(&str) -> String,
  G: FnOnce(&str) -> String,
{
  if content.is_empty() {
    return String::new();
  }

  let result =
    std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| convert(content)));

  match result {
    Ok(converted) => converted,
    Err(e) => {
      if let Some(message) = e.downcast_ref::<String>() {
        error!("Panic during conversion: {message}");
      } else if let Some(message) = e.downcast_ref::<&str>() {
        error!("Panic during conversion: {message}");
      } else {
        error!("Unknown panic during conversion");
      }
      fallback(content)
    },
  }
}

/// Markdown to mrkdwn, falling back to the escaped source text on panic.
#[must_use]
pub fn markdown_to_mrkdwn_with_recovery(
  converter: &Converter,
  markdown: &str,
) -> String {
  convert_safe(
    markdown,
    |text| converter.markdown_to_mrkdwn(text),
    |text| escape_mrkdwn(text).into_owned(),
  )
}

/// Mrkdwn to HTML, falling back to the escaped source text on panic.
#[must_use]
pub fn mrkdwn_to_html_with_recovery(converter: &Converter, text: &str) -> String {
  convert_safe(
    text,
    |text| converter.mrkdwn_to_html(text),
    |text| escape_html(text).into_owned(),
  )
}

#[cfg(test)]
mod tests {
  #![allow(clippy::panic, reason = "Fine in tests")]

  use super::*;

  #[test]
  fn test_convert_safe_passes_through() {
    let out = convert_safe("abc", str::to_uppercase, |_| String::from("x"));
    assert_eq!(out, "ABC");
  }

  #[test]
  fn test_convert_safe_empty_input() {
    let out = convert_safe("", |_| String::from("never"), |_| String::from("x"));
    assert_eq!(out, "");
  }

  #[test]
  #[allow(clippy::panic, reason = "Exercising the recovery path")]
  fn test_convert_safe_recovers_from_panic() {
    let out = convert_safe(
      "<b>",
      |_| panic!("boom"),
      |text| escape_html(text).into_owned(),
    );
    assert_eq!(out, "&lt;b&gt;");
  }

  #[test]
  fn test_recovery_wrappers_match_plain_calls() {
    let converter = Converter::default();
    assert_eq!(
      mrkdwn_to_html_with_recovery(&converter, "*a* _b_"),
      converter.mrkdwn_to_html("*a* _b_")
    );
    assert_eq!(
      markdown_to_mrkdwn_with_recovery(&converter, "# Title"),
      "*Title*"
    );
  }
}
