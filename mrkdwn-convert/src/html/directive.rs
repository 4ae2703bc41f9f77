//! Angle-bracket directives: links, user and channel mentions, broadcasts.
//!
//! Bodies that do not form a recognized directive are kept as literal
//! characters, so a stray `<` or `>` always survives as escaped text.
use super::{InlineContext, inline::Atom};
use crate::escape::escape_html;

const LINK_SCHEMES: [&str; 3] = ["http://", "https://", "mailto:"];
const BROADCASTS: [&str; 3] = ["here", "channel", "everyone"];

/// Lex `text` into atoms, turning every recognized `<...>` directive into a
/// single HTML atom.
pub(super) fn lex(text: &str, context: &InlineContext, atoms: &mut Vec<Atom>) {
  let mut rest = text;

  while let Some(open) = rest.find('<') {
    push_chars(&rest[..open], atoms);
    let after = &rest[open + 1..];
    let Some(end) = after.find(['<', '>']) else {
      push_chars(&rest[open..], atoms);
      return;
    };

    if after[end..].starts_with('<') {
      // Another `<` before any `>`: the first one is plain text.
      push_chars(&rest[open..=open + end], atoms);
      rest = &after[end..];
      continue;
    }

    match render(&after[..end], context) {
      Some(html) => atoms.push(Atom::Html(html)),
      None => push_chars(&rest[open..open + end + 2], atoms),
    }
    rest = &after[end + 1..];
  }

  push_chars(rest, atoms);
}

fn push_chars(text: &str, atoms: &mut Vec<Atom>) {
  atoms.extend(text.chars().map(Atom::Char));
}

/// Render a directive body (the text between `<` and `>`).
fn render(body: &str, context: &InlineContext) -> Option<String> {
  let (target, label) = match body.split_once('|') {
    Some((target, label)) => (target, Some(label).filter(|l| !l.is_empty())),
    None => (body, None),
  };

  if let Some(id) = target.strip_prefix('@') {
    if !is_id(id) {
      return None;
    }
    let name = label.map_or(id, |l| l.trim_start_matches('@'));
    return Some(mention(&format!("@{name}")));
  }

  if let Some(id) = target.strip_prefix('#') {
    if !is_id(id) {
      return None;
    }
    let name = label.map_or(id, |l| l.trim_start_matches('#'));
    return Some(mention(&format!("#{name}")));
  }

  if let Some(command) = target.strip_prefix('!') {
    return broadcast(command, label);
  }

  link(target, label, context)
}

fn broadcast(command: &str, label: Option<&str>) -> Option<String> {
  if BROADCASTS.contains(&command) {
    return Some(mention(&format!("@{command}")));
  }
  if command.starts_with("subteam^") {
    let handle = label?.trim_start_matches('@');
    return Some(mention(&format!("@{handle}")));
  }
  if command.starts_with("date^") {
    return label.map(|fallback| escape_html(fallback).into_owned());
  }
  None
}

fn link(target: &str, label: Option<&str>, context: &InlineContext) -> Option<String> {
  let has_scheme = LINK_SCHEMES
    .iter()
    .any(|scheme| target.len() > scheme.len() && target.starts_with(scheme));
  if !has_scheme || target.chars().any(char::is_whitespace) {
    return None;
  }

  let attributes = if context.new_tab_links {
    r#" target="_blank" rel="noopener noreferrer""#
  } else {
    ""
  };
  Some(format!(
    r#"<a href="{}"{attributes}>{}</a>"#,
    escape_html(target),
    escape_html(label.unwrap_or(target))
  ))
}

fn is_id(id: &str) -> bool {
  !id.is_empty() && id.chars().all(|c| c.is_ascii_alphanumeric())
}

fn mention(text: &str) -> String {
  format!(r#"<span class="mention">{}</span>"#, escape_html(text))
}

#[cfg(test)]
mod tests {
  use super::*;

  fn context(new_tab_links: bool) -> InlineContext {
    InlineContext {
      emoji: true,
      large_emoji: false,
      new_tab_links,
    }
  }

  fn html_atoms(text: &str) -> Vec<Atom> {
    let mut atoms = Vec::new();
    lex(text, &context(true), &mut atoms);
    atoms
  }

  fn single(text: &str) -> Option<String> {
    match html_atoms(text).as_slice() {
      [Atom::Html(html)] => Some(html.clone()),
      _ => None,
    }
  }

  #[test]
  fn test_labeled_link() {
    assert_eq!(
      single("<https://example.com|Example>").as_deref(),
      Some(
        r#"<a href="https://example.com" target="_blank" rel="noopener noreferrer">Example</a>"#
      )
    );
  }

  #[test]
  fn test_bare_link_uses_url_as_label() {
    let html = single("<mailto:a@b.io>").unwrap_or_default();
    assert!(html.ends_with(">mailto:a@b.io</a>"));
  }

  #[test]
  fn test_link_without_new_tab() {
    let mut atoms = Vec::new();
    lex("<http://x.io>", &context(false), &mut atoms);
    assert_eq!(atoms, vec![Atom::Html(
      r#"<a href="http://x.io">http://x.io</a>"#.into()
    )]);
  }

  #[test]
  fn test_disallowed_scheme_is_literal() {
    assert_eq!(html_atoms("<javascript:alert(1)>").len(), 21);
    assert_eq!(single("<https://>"), None);
  }

  #[test]
  fn test_label_is_escaped() {
    let html = single(r#"<https://x.io|"a" & b>"#).unwrap_or_default();
    assert!(html.contains(">&quot;a&quot; &amp; b</a>"));
  }

  #[test]
  fn test_user_mentions() {
    assert_eq!(
      single("<@U123>").as_deref(),
      Some(r#"<span class="mention">@U123</span>"#)
    );
    assert_eq!(
      single("<@U123|alice>").as_deref(),
      Some(r#"<span class="mention">@alice</span>"#)
    );
  }

  #[test]
  fn test_channel_mentions() {
    assert_eq!(
      single("<#C42|general>").as_deref(),
      Some(r#"<span class="mention">#general</span>"#)
    );
    assert_eq!(
      single("<#C42>").as_deref(),
      Some(r#"<span class="mention">#C42</span>"#)
    );
  }

  #[test]
  fn test_broadcasts() {
    for name in BROADCASTS {
      assert_eq!(
        single(&format!("<!{name}>")),
        Some(format!(r#"<span class="mention">@{name}</span>"#))
      );
    }
    assert_eq!(single("<!nobody>"), None);
  }

  #[test]
  fn test_subteam_and_date() {
    assert_eq!(
      single("<!subteam^S1|@oncall>").as_deref(),
      Some(r#"<span class="mention">@oncall</span>"#)
    );
    assert_eq!(single("<!subteam^S1>"), None);
    assert_eq!(
      single("<!date^1392734382^{date}|Feb 18, 2014>").as_deref(),
      Some("Feb 18, 2014")
    );
  }

  #[test]
  fn test_nested_open_bracket() {
    let atoms = html_atoms("a <b <@U1>");
    assert_eq!(
      atoms.last(),
      Some(&Atom::Html(r#"<span class="mention">@U1</span>"#.into()))
    );
    assert_eq!(atoms.len(), 6);
  }

  #[test]
  fn test_unclosed_bracket_is_literal() {
    let atoms = html_atoms("1 < 2");
    assert_eq!(atoms, "1 < 2".chars().map(Atom::Char).collect::<Vec<_>>());
  }

  #[test]
  fn test_invalid_mention_id_is_literal() {
    assert_eq!(single("<@ U1>"), None);
    assert_eq!(single("<@>"), None);
  }
}
