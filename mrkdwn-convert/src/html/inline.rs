//! Inline formatting for one run of line text.
//!
//! Text is parsed into a flat sequence of [`Atom`]s. Inline code and
//! directives become opaque HTML atoms up front; emphasis then rewrites
//! delimiter characters into markers, and serialization resolves emoji
//! while escaping every remaining character.
use super::{InlineContext, directive, emphasis};
use crate::{
  emoji::{self, EmojiOptions},
  escape::{escape_html, push_escaped_html},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum Atom {
  /// A source character, escaped on output.
  Char(char),
  /// Generated HTML, emitted verbatim.
  Html(String),
  Open(Style),
  Close(Style),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Style {
  Bold,
  Italic,
  Strike,
}

impl Style {
  /// Application order.
  const ALL: [Self; 3] = [Self::Bold, Self::Italic, Self::Strike];

  pub(super) const fn delimiter(self) -> char {
    match self {
      Self::Bold => '*',
      Self::Italic => '_',
      Self::Strike => '~',
    }
  }

  const fn open_tag(self) -> &'static str {
    match self {
      Self::Bold => "<strong>",
      Self::Italic => "<em>",
      Self::Strike => "<del>",
    }
  }

  const fn close_tag(self) -> &'static str {
    match self {
      Self::Bold => "</strong>",
      Self::Italic => "</em>",
      Self::Strike => "</del>",
    }
  }
}

enum Run<'a> {
  Text(&'a str),
  Code(&'a str),
}

/// Format one run of text as HTML.
pub(super) fn format(text: &str, context: &InlineContext) -> String {
  let mut atoms = Vec::with_capacity(text.len());
  for run in split_code_spans(text) {
    match run {
      Run::Text(text) => directive::lex(text, context, &mut atoms),
      Run::Code(code) => {
        atoms.push(Atom::Html(format!("<code>{}</code>", escape_html(code))));
      },
    }
  }

  for style in Style::ALL {
    emphasis::apply(&mut atoms, style);
  }

  serialize(&atoms, context)
}

/// Split out `` `code` `` spans. An empty pair or an unmatched backtick is
/// literal text.
fn split_code_spans(text: &str) -> Vec<Run<'_>> {
  let mut runs = Vec::new();
  let mut start = 0;
  let mut search = 0;

  while let Some(found) = text[search..].find('`') {
    let open = search + found;
    let Some(found) = text[open + 1..].find('`') else {
      break;
    };
    let close = open + 1 + found;
    if close == open + 1 {
      search = close;
      continue;
    }
    if open > start {
      runs.push(Run::Text(&text[start..open]));
    }
    runs.push(Run::Code(&text[open + 1..close]));
    start = close + 1;
    search = start;
  }

  if start < text.len() {
    runs.push(Run::Text(&text[start..]));
  }
  runs
}

fn serialize(atoms: &[Atom], context: &InlineContext) -> String {
  let mut out = String::with_capacity(atoms.len());
  let mut idx = 0;

  while let Some(atom) = atoms.get(idx) {
    match atom {
      Atom::Char(':') if context.emoji => {
        if let Some((html, used)) = emoji_at(atoms, idx, context) {
          out.push_str(&html);
          idx += used;
          continue;
        }
        out.push(':');
      },
      Atom::Char(c) => push_escaped_html(&mut out, *c),
      Atom::Html(html) => out.push_str(html),
      Atom::Open(style) => out.push_str(style.open_tag()),
      Atom::Close(style) => out.push_str(style.close_tag()),
    }
    idx += 1;
  }

  out
}

/// Read a `:name:` shortcode starting at `start`, returning the name and the
/// number of atoms it spans.
fn shortcode_at(atoms: &[Atom], start: usize) -> Option<(String, usize)> {
  if atoms.get(start) != Some(&Atom::Char(':')) {
    return None;
  }
  let mut name = String::new();
  let mut idx = start + 1;
  loop {
    match atoms.get(idx)? {
      Atom::Char(':') if !name.is_empty() => {
        return Some((name, idx - start + 1));
      },
      Atom::Char(c) if emoji::is_shortcode_char(*c) => name.push(*c),
      _ => return None,
    }
    idx += 1;
  }
}

/// Render the emoji starting at `start`, including a directly following
/// skin-tone modifier.
fn emoji_at(
  atoms: &[Atom],
  start: usize,
  context: &InlineContext,
) -> Option<(String, usize)> {
  let (name, mut used) = shortcode_at(atoms, start)?;
  let glyph = emoji::resolve_emoji(&name)?;

  let mut shortcode = format!(":{name}:");
  let mut glyph = glyph.to_owned();
  if let Some((tone, tone_len)) = shortcode_at(atoms, start + used)
    && let Some(modifier) = emoji::resolve_skin_tone(&tone)
  {
    glyph.push_str(modifier);
    shortcode.push(':');
    shortcode.push_str(&tone);
    shortcode.push(':');
    used += tone_len;
  }

  let options = EmojiOptions {
    large: context.large_emoji,
  };
  Some((emoji::render_glyph(&shortcode, &glyph, options), used))
}

#[cfg(test)]
mod tests {
  use super::*;

  fn context() -> InlineContext {
    InlineContext {
      emoji:         true,
      large_emoji:   false,
      new_tab_links: true,
    }
  }

  fn fmt(text: &str) -> String {
    format(text, &context())
  }

  #[test]
  fn test_plain_text_is_escaped() {
    assert_eq!(fmt(r#"a & b "c""#), "a &amp; b &quot;c&quot;");
  }

  #[test]
  fn test_styles() {
    assert_eq!(fmt("*b* _i_ ~s~"), "<strong>b</strong> <em>i</em> <del>s</del>");
  }

  #[test]
  fn test_code_span_shields_content() {
    assert_eq!(
      fmt("run `*not bold* :smile:` now"),
      "run <code>*not bold* :smile:</code> now"
    );
  }

  #[test]
  fn test_code_span_is_escaped() {
    assert_eq!(fmt("`<b>`"), "<code>&lt;b&gt;</code>");
  }

  #[test]
  fn test_unmatched_backtick_is_literal() {
    assert_eq!(fmt("a ` b"), "a ` b");
    assert_eq!(fmt("``"), "``");
  }

  #[test]
  fn test_bold_around_code() {
    assert_eq!(fmt("*`x`*"), "<strong><code>x</code></strong>");
  }

  #[test]
  fn test_emoji_resolved() {
    let html = fmt("ship it :rocket:");
    assert!(html.starts_with("ship it <span class=\"emoji\""));
    assert!(html.contains("🚀"));
  }

  #[test]
  fn test_unknown_emoji_literal_and_rescanned() {
    let html = fmt(":nope:rocket:");
    assert!(html.starts_with(":nope"));
    assert!(html.contains("🚀"));
  }

  #[test]
  fn test_emoji_skin_tone() {
    let html = fmt(":wave::skin-tone-3:");
    assert!(html.contains("👋\u{1F3FC}"));
    assert!(html.contains(r#"title=":wave::skin-tone-3:""#));
  }

  #[test]
  fn test_standalone_skin_tone_is_literal() {
    assert_eq!(fmt(":skin-tone-3:"), ":skin-tone-3:");
  }

  #[test]
  fn test_emoji_disabled() {
    let context = InlineContext {
      emoji: false,
      ..context()
    };
    assert_eq!(format(":rocket:", &context), ":rocket:");
  }

  #[test]
  fn test_time_like_text_is_not_emoji() {
    assert_eq!(fmt("at 10:30:45"), "at 10:30:45");
  }

  #[test]
  fn test_emoji_name_with_underscore_inside_italic_text() {
    let html = fmt("_see :thinking_face:_");
    assert!(html.contains("🤔"));
  }
}
