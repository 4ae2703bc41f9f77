//! Line classification, block grouping and reassembly.
use std::sync::LazyLock;

use regex::Regex;

use super::{
  InlineContext,
  fence::{Line, Piece},
  inline,
};
use crate::utils::never_matching_regex;

static ORDERED_ITEM_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"^\s*(\d{1,9})[.)]\s+").unwrap_or_else(|e| {
    log::error!(
      "Failed to compile ORDERED_ITEM_RE regex: {e}\n Falling back to never \
       matching regex."
    );
    never_matching_regex()
  })
});

const BULLETS: [char; 4] = ['•', '◦', '-', '*'];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineKind {
  /// Nothing but fenced code.
  Protected,
  Quote,
  Bullet,
  Ordered,
  Plain,
}

/// A rendered piece of output, before line breaks are resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum Fragment {
  Inline(String),
  /// A self-delimiting block element.
  Block(String),
  /// A source line break.
  Break,
}

fn classify(line: &Line<'_>) -> LineKind {
  let has_protected = line.iter().any(|p| matches!(p, Piece::Protected(_)));
  let only_protected = line.iter().all(|piece| {
    match piece {
      Piece::Protected(_) => true,
      Piece::Text(text) => text.trim().is_empty(),
    }
  });
  if has_protected && only_protected {
    return LineKind::Protected;
  }

  let Some(Piece::Text(first)) = line.first() else {
    return LineKind::Plain;
  };
  if quote_body(first).is_some() {
    LineKind::Quote
  } else if bullet_body(first).is_some() {
    LineKind::Bullet
  } else if ORDERED_ITEM_RE.is_match(first) {
    LineKind::Ordered
  } else {
    LineKind::Plain
  }
}

fn quote_body(text: &str) -> Option<&str> {
  let body = text
    .strip_prefix('>')
    .or_else(|| text.strip_prefix("&gt;"))?;
  Some(body.strip_prefix(' ').unwrap_or(body))
}

fn bullet_body(text: &str) -> Option<&str> {
  let mut chars = text.trim_start().chars();
  let marker = chars.next()?;
  if !BULLETS.contains(&marker) {
    return None;
  }
  let rest = chars.as_str();
  if rest.starts_with([' ', '\t']) {
    Some(rest.trim_start())
  } else {
    None
  }
}

fn ordered_body(text: &str) -> Option<(u32, &str)> {
  let captures = ORDERED_ITEM_RE.captures(text)?;
  let number = captures.get(1)?.as_str().parse().ok()?;
  let end = captures.get(0)?.end();
  Some((number, &text[end..]))
}

/// The line with its block marker removed from the first text piece.
fn strip_marker<'a>(line: &Line<'a>, kind: LineKind) -> Line<'a> {
  let mut pieces = line.clone();
  if let Some(Piece::Text(first)) = pieces.first_mut() {
    let text: &'a str = *first;
    let body = match kind {
      LineKind::Quote => quote_body(text),
      LineKind::Bullet => bullet_body(text),
      LineKind::Ordered => ordered_body(text).map(|(_, body)| body),
      LineKind::Protected | LineKind::Plain => None,
    };
    *first = body.unwrap_or(text);
  }
  pieces.retain(|piece| !matches!(piece, Piece::Text("")));
  pieces
}

fn push_line(line: &[Piece<'_>], context: &InlineContext, out: &mut Vec<Fragment>) {
  for piece in line {
    match piece {
      Piece::Text(text) => out.push(Fragment::Inline(inline::format(text, context))),
      Piece::Protected(html) => out.push(Fragment::Block((*html).to_owned())),
    }
  }
}

/// Group lines into blocks and render them. Fragments from consecutive
/// lines are separated by [`Fragment::Break`].
pub(super) fn segment(lines: &[Line<'_>], context: &InlineContext) -> Vec<Fragment> {
  let kinds: Vec<LineKind> = lines.iter().map(classify).collect();
  let mut fragments = Vec::new();
  let mut idx = 0;

  while idx < lines.len() {
    if idx > 0 {
      fragments.push(Fragment::Break);
    }
    let kind = kinds[idx];
    match kind {
      LineKind::Protected | LineKind::Plain => {
        push_line(&lines[idx], context, &mut fragments);
        idx += 1;
      },
      LineKind::Quote | LineKind::Bullet | LineKind::Ordered => {
        let run = kinds[idx..].iter().take_while(|k| **k == kind).count();
        let html = render_run(kind, &lines[idx..idx + run], context);
        fragments.push(Fragment::Block(html));
        idx += run;
      },
    }
  }

  fragments
}

fn render_run(kind: LineKind, lines: &[Line<'_>], context: &InlineContext) -> String {
  let members: Vec<Vec<Fragment>> = lines
    .iter()
    .map(|line| {
      let mut fragments = Vec::new();
      push_line(&strip_marker(line, kind), context, &mut fragments);
      fragments
    })
    .collect();

  match kind {
    LineKind::Quote => {
      let mut joined = Vec::new();
      for (idx, member) in members.into_iter().enumerate() {
        if idx > 0 {
          joined.push(Fragment::Break);
        }
        joined.extend(member);
      }
      format!("<blockquote>{}</blockquote>", assemble(&joined, true))
    },
    LineKind::Bullet => format!("<ul>{}</ul>", list_items(&members)),
    LineKind::Ordered => {
      let start = lines
        .first()
        .and_then(|line| {
          match line.first() {
            Some(Piece::Text(text)) => ordered_body(text).map(|(n, _)| n),
            _ => None,
          }
        })
        .unwrap_or(1);
      if start == 1 {
        format!("<ol>{}</ol>", list_items(&members))
      } else {
        format!(r#"<ol start="{start}">{}</ol>"#, list_items(&members))
      }
    },
    LineKind::Protected | LineKind::Plain => assemble(&members.concat(), false),
  }
}

fn list_items(members: &[Vec<Fragment>]) -> String {
  members
    .iter()
    .map(|member| format!("<li>{}</li>", assemble(member, true)))
    .collect()
}

/// Concatenate fragments, resolving each break to `<br>` unless it touches a
/// block element. With `trim_edges`, breaks before the first or after the
/// last content fragment are dropped as well.
pub(super) fn assemble(fragments: &[Fragment], trim_edges: bool) -> String {
  let is_content = |f: &Fragment| !matches!(f, Fragment::Break);
  let first = fragments.iter().position(is_content);
  let last = fragments.iter().rposition(is_content);

  let mut out = String::new();
  for (idx, fragment) in fragments.iter().enumerate() {
    match fragment {
      Fragment::Inline(html) | Fragment::Block(html) => out.push_str(html),
      Fragment::Break => {
        let before = idx.checked_sub(1).and_then(|i| fragments.get(i));
        let after = fragments.get(idx + 1);
        let touches_block = matches!(before, Some(Fragment::Block(_)))
          || matches!(after, Some(Fragment::Block(_)));
        let outside = match (first, last) {
          (Some(first), Some(last)) => idx < first || idx > last,
          _ => true,
        };
        if touches_block || (trim_edges && outside) {
          continue;
        }
        out.push_str("<br>");
      },
    }
  }
  out
}
