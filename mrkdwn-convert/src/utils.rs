use regex::Regex;

/// A regex that matches nothing.
///
/// Stands in for a static pattern that failed to compile, so a broken
/// pattern degrades to "no match" instead of taking the conversion down.
#[must_use]
pub fn never_matching_regex() -> Regex {
  #[allow(
    clippy::expect_used,
    reason = "This pattern is guaranteed to be valid"
  )]
  Regex::new(r"[^\s\S]").expect("regex pattern [^\\s\\S] should always compile")
}

/// Find the first char boundary at or after `index`, clamped to `text.len()`.
pub(crate) fn ceil_char_boundary(text: &str, index: usize) -> usize {
  let mut index = index.min(text.len());
  while !text.is_char_boundary(index) {
    index += 1;
  }
  index
}
