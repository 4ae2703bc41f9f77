//! Emoji shortcode resolution.
//!
//! Lookups go through two process-wide tables that are built once on first
//! use and never mutated afterwards: the canonical name table and an alias
//! table that maps alternate spellings onto canonical names. Lookup is
//! case-sensitive and exact.
mod table;

use std::{collections::HashMap, sync::LazyLock};

use crate::escape::escape_html;

static EMOJI_MAP: LazyLock<HashMap<&'static str, &'static str>> =
  LazyLock::new(|| table::EMOJI.iter().copied().collect());

static ALIAS_MAP: LazyLock<HashMap<&'static str, &'static str>> =
  LazyLock::new(|| table::ALIASES.iter().copied().collect());

static SKIN_TONE_MAP: LazyLock<HashMap<&'static str, &'static str>> =
  LazyLock::new(|| table::SKIN_TONES.iter().copied().collect());

/// Display options for [`render_emoji`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmojiOptions {
  /// Use the enlarged variant, meant for messages that contain nothing but
  /// emoji.
  pub large: bool,
}

/// Resolve a shortcode name (without colons) to its glyph.
///
/// Falls back to the alias table when the name is not canonical.
///
/// # Examples
///
/// ```
/// use mrkdwn_convert::emoji::resolve_emoji;
///
/// assert_eq!(resolve_emoji("thinking_face"), Some("🤔"));
/// assert_eq!(resolve_emoji("thumbsup"), resolve_emoji("+1"));
/// assert_eq!(resolve_emoji("Thinking_Face"), None);
/// ```
#[must_use]
pub fn resolve_emoji(name: &str) -> Option<&'static str> {
  EMOJI_MAP.get(name).copied().or_else(|| {
    ALIAS_MAP
      .get(name)
      .and_then(|canonical| EMOJI_MAP.get(canonical))
      .copied()
  })
}

/// Resolve a `skin-tone-N` modifier name to its Fitzpatrick code point.
#[must_use]
pub fn resolve_skin_tone(name: &str) -> Option<&'static str> {
  SKIN_TONE_MAP.get(name).copied()
}

/// Render a shortcode as an inline HTML fragment.
///
/// The fragment carries the glyph and an accessible tooltip with the
/// original `:name:` text. Returns `None` for unknown names so the caller can
/// keep the literal shortcode.
///
/// # Examples
///
/// ```
/// use mrkdwn_convert::emoji::{EmojiOptions, render_emoji};
///
/// let html = render_emoji("tada", EmojiOptions::default()).unwrap();
/// assert!(html.contains("🎉"));
/// assert!(html.contains(r#"title=":tada:""#));
/// assert!(render_emoji("not_a_real_emoji", EmojiOptions::default()).is_none());
/// ```
#[must_use]
pub fn render_emoji(name: &str, options: EmojiOptions) -> Option<String> {
  resolve_emoji(name).map(|glyph| render_glyph(&format!(":{name}:"), glyph, options))
}

/// Build the emoji fragment for an already-resolved glyph. `shortcode` is
/// the literal source text, colons included.
pub(crate) fn render_glyph(
  shortcode: &str,
  glyph: &str,
  options: EmojiOptions,
) -> String {
  let class = if options.large {
    "emoji emoji-large"
  } else {
    "emoji"
  };
  let label = escape_html(shortcode);
  format!(
    r#"<span class="{class}" role="img" title="{label}" aria-label="{label}">{glyph}</span>"#
  )
}

/// Characters allowed inside a shortcode name.
pub(crate) const fn is_shortcode_char(c: char) -> bool {
  c.is_ascii_alphanumeric() || matches!(c, '_' | '+' | '-' | '\'')
}

/// Parse a `:name:` shortcode at the start of `text`.
///
/// Returns the name and the byte length of the whole shortcode, colons
/// included.
pub(crate) fn parse_shortcode(text: &str) -> Option<(&str, usize)> {
  let rest = text.strip_prefix(':')?;
  let name_len = rest
    .char_indices()
    .find(|&(_, c)| !is_shortcode_char(c))
    .map_or(rest.len(), |(idx, _)| idx);
  if name_len == 0 || !rest[name_len..].starts_with(':') {
    return None;
  }
  Some((&rest[..name_len], name_len + 2))
}

/// Whether `text` consists solely of resolvable emoji shortcodes and
/// whitespace, with at least one shortcode.
///
/// Skin-tone modifiers count when they directly follow an emoji.
///
/// # Examples
///
/// ```
/// use mrkdwn_convert::emoji::is_emoji_only;
///
/// assert!(is_emoji_only(":tada: :rocket:"));
/// assert!(is_emoji_only(":wave::skin-tone-3:"));
/// assert!(!is_emoji_only(":tada: shipped"));
/// assert!(!is_emoji_only("   "));
/// ```
#[must_use]
pub fn is_emoji_only(text: &str) -> bool {
  let mut seen = false;
  for word in text.split_whitespace() {
    let mut rest = word;
    let mut previous_was_emoji = false;
    while !rest.is_empty() {
      let Some((name, len)) = parse_shortcode(rest) else {
        return false;
      };
      if resolve_emoji(name).is_some() {
        previous_was_emoji = true;
      } else if previous_was_emoji && resolve_skin_tone(name).is_some() {
        previous_was_emoji = false;
      } else {
        return false;
      }
      rest = &rest[len..];
      seen = true;
    }
  }
  seen
}
