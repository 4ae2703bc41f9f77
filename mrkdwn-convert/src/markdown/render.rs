//! Token tree to mrkdwn.
use super::{
  table,
  token::{Token, TokenKind},
};
use crate::escape::escape_mrkdwn;

/// One nesting level of list indentation.
pub(super) const INDENT: &str = "    ";

const BULLET: &str = "•";
const TASK_DONE: &str = "☑";
const TASK_OPEN: &str = "☐";
const RULE: &str = "───";

/// Render a token tree as mrkdwn, with trailing whitespace removed.
#[must_use]
pub fn render_tokens(tokens: &[Token]) -> String {
  let mut out = String::new();
  render_blocks(tokens, 0, &mut out);
  out.truncate(out.trim_end().len());
  out
}

pub(super) fn render_blocks(tokens: &[Token], depth: usize, out: &mut String) {
  for token in tokens {
    render_block(token, depth, out);
  }
}

fn render_block(token: &Token, depth: usize, out: &mut String) {
  match &token.kind {
    TokenKind::Paragraph => {
      render_inlines(&token.children, out);
      out.push('\n');
    },
    TokenKind::Heading { .. } => {
      // The whole line is already bold; a nested `*` would print literally.
      out.push('*');
      for child in &token.children {
        match child.kind {
          TokenKind::Strong => render_inlines(&child.children, out),
          _ => render_inline(child, out),
        }
      }
      out.push_str("*\n");
    },
    TokenKind::BlockQuote => render_blockquote(token, out),
    TokenKind::List { ordered, start } => {
      render_list(token, *ordered, *start, depth, out);
    },
    TokenKind::Item { task } => {
      render_item(token, &marker(*task, None), depth, out);
    },
    TokenKind::CodeBlock { literal } => {
      let code = literal.strip_suffix('\n').unwrap_or(literal);
      out.push_str("```\n");
      out.push_str(code);
      out.push_str("\n```\n");
    },
    TokenKind::Html { literal } => {
      out.push_str(&escape_mrkdwn(literal.trim_end()));
      out.push('\n');
    },
    TokenKind::Table => table::render_table(token, out),
    TokenKind::TableRow { .. } | TokenKind::TableCell => {
      render_inlines(&token.children, out);
      out.push('\n');
    },
    TokenKind::ThematicBreak => {
      out.push_str(RULE);
      out.push('\n');
    },
    TokenKind::Space => out.push('\n'),
    TokenKind::Raw => {
      out.push_str(&token.raw);
      if !token.raw.ends_with('\n') {
        out.push('\n');
      }
    },
    TokenKind::Text(_)
    | TokenKind::Strong
    | TokenKind::Emph
    | TokenKind::Del
    | TokenKind::CodeSpan(_)
    | TokenKind::Link { .. }
    | TokenKind::Image { .. }
    | TokenKind::SoftBreak
    | TokenKind::LineBreak => {
      render_inline(token, out);
      out.push('\n');
    },
  }
}

fn render_blockquote(token: &Token, out: &mut String) {
  let mut inner = String::new();
  render_blocks(&token.children, 0, &mut inner);
  for line in inner.trim_end().lines() {
    out.push_str("> ");
    out.push_str(line);
    out.push('\n');
  }
}

fn render_list(
  token: &Token,
  ordered: bool,
  start: usize,
  depth: usize,
  out: &mut String,
) {
  let mut number = start;
  for item in &token.children {
    let task = match item.kind {
      TokenKind::Item { task } => task,
      _ => None,
    };
    let marker = marker(task, ordered.then_some(number));
    render_item(item, &marker, depth, out);
    number += 1;
  }
}

fn marker(task: Option<bool>, number: Option<usize>) -> String {
  match (task, number) {
    (Some(true), _) => TASK_DONE.to_owned(),
    (Some(false), _) => TASK_OPEN.to_owned(),
    (None, Some(number)) => format!("{number}."),
    (None, None) => BULLET.to_owned(),
  }
}

/// Render one list item. Leading paragraphs form the item line, everything
/// after them is placed below it one level deeper.
fn render_item(item: &Token, marker: &str, depth: usize, out: &mut String) {
  let indent = INDENT.repeat(depth);
  let mut text = String::new();
  let mut below = String::new();
  let mut in_text = true;

  for child in &item.children {
    match &child.kind {
      TokenKind::Paragraph if in_text => {
        if !text.is_empty() {
          text.push('\n');
        }
        render_inlines(&child.children, &mut text);
      },
      TokenKind::List { .. } => {
        in_text = false;
        render_block(child, depth + 1, &mut below);
      },
      TokenKind::Space => {},
      _ => {
        in_text = false;
        let mut block = String::new();
        render_block(child, 0, &mut block);
        let nested_indent = INDENT.repeat(depth + 1);
        for line in block.trim_end().lines() {
          below.push_str(&nested_indent);
          below.push_str(line);
          below.push('\n');
        }
      },
    }
  }

  let hanging = " ".repeat(marker.chars().count() + 1);
  out.push_str(&indent);
  out.push_str(marker);
  for (idx, line) in text.lines().enumerate() {
    if idx == 0 {
      out.push(' ');
    } else {
      out.push('\n');
      out.push_str(&indent);
      out.push_str(&hanging);
    }
    out.push_str(line);
  }
  out.push('\n');
  out.push_str(&below);
}

pub(super) fn render_inlines(tokens: &[Token], out: &mut String) {
  for token in tokens {
    render_inline(token, out);
  }
}

fn render_inline(token: &Token, out: &mut String) {
  match &token.kind {
    TokenKind::Text(text) => out.push_str(&escape_mrkdwn(text)),
    TokenKind::Strong => wrap('*', &token.children, out),
    TokenKind::Emph => wrap('_', &token.children, out),
    TokenKind::Del => wrap('~', &token.children, out),
    TokenKind::CodeSpan(code) => {
      out.push('`');
      out.push_str(code);
      out.push('`');
    },
    TokenKind::Link { href } => {
      let mut label = String::new();
      render_inlines(&token.children, &mut label);
      out.push('<');
      out.push_str(href);
      if !label.is_empty() {
        out.push('|');
        out.push_str(&label);
      }
      out.push('>');
    },
    TokenKind::Image { src, alt } => {
      let alt = alt.replace(['|', '>'], "");
      let alt = alt.trim();
      out.push('<');
      out.push_str(src);
      out.push('|');
      out.push_str(if alt.is_empty() { "image" } else { alt });
      out.push('>');
    },
    TokenKind::SoftBreak | TokenKind::LineBreak => out.push('\n'),
    TokenKind::Html { literal } => out.push_str(&escape_mrkdwn(literal)),
    TokenKind::Raw => out.push_str(&token.raw),
    TokenKind::Space => out.push(' '),
    TokenKind::Paragraph
    | TokenKind::Heading { .. }
    | TokenKind::BlockQuote
    | TokenKind::List { .. }
    | TokenKind::Item { .. }
    | TokenKind::CodeBlock { .. }
    | TokenKind::Table
    | TokenKind::TableRow { .. }
    | TokenKind::TableCell
    | TokenKind::ThematicBreak => {
      let mut block = String::new();
      render_block(token, 0, &mut block);
      out.push_str(block.trim_end());
    },
  }
}

fn wrap(delimiter: char, children: &[Token], out: &mut String) {
  out.push(delimiter);
  render_inlines(children, out);
  out.push(delimiter);
}

#[cfg(test)]
mod tests {
  use super::*;

  fn text(t: &str) -> Token {
    Token::text(t)
  }

  fn node(kind: TokenKind, children: Vec<Token>) -> Token {
    Token::new(kind).with_children(children)
  }

  #[test]
  fn test_render_paragraph_escapes_text() {
    let tokens = vec![node(TokenKind::Paragraph, vec![text("a < b & c")])];
    assert_eq!(render_tokens(&tokens), "a &lt; b &amp; c");
  }

  #[test]
  fn test_render_heading() {
    let tokens = vec![node(TokenKind::Heading { level: 2 }, vec![text("Hi")])];
    assert_eq!(render_tokens(&tokens), "*Hi*");
  }

  #[test]
  fn test_render_heading_unwraps_strong() {
    let tokens = vec![node(TokenKind::Heading { level: 1 }, vec![
      node(TokenKind::Strong, vec![text("a")]),
      text(" b "),
      node(TokenKind::Emph, vec![text("c")]),
    ])];
    assert_eq!(render_tokens(&tokens), "*a b _c_*");
  }

  #[test]
  fn test_render_inline_styles() {
    let tokens = vec![node(TokenKind::Paragraph, vec![
      node(TokenKind::Strong, vec![text("b")]),
      text(" "),
      node(TokenKind::Emph, vec![text("i")]),
      text(" "),
      node(TokenKind::Del, vec![text("s")]),
      text(" "),
      Token::new(TokenKind::CodeSpan("a<b".into())),
    ])];
    assert_eq!(render_tokens(&tokens), "*b* _i_ ~s~ `a<b`");
  }

  #[test]
  fn test_render_link_without_label() {
    let tokens = vec![node(TokenKind::Paragraph, vec![Token::new(
      TokenKind::Link {
        href: "https://x.io".into(),
      },
    )])];
    assert_eq!(render_tokens(&tokens), "<https://x.io>");
  }

  #[test]
  fn test_render_image_alt_sanitized() {
    let tokens = vec![node(TokenKind::Paragraph, vec![
      Token::new(TokenKind::Image {
        src: "a.png".into(),
        alt: "x|y>z".into(),
      }),
      text(" "),
      Token::new(TokenKind::Image {
        src: "b.png".into(),
        alt: String::new(),
      }),
    ])];
    assert_eq!(render_tokens(&tokens), "<a.png|xyz> <b.png|image>");
  }

  #[test]
  fn test_render_raw_verbatim() {
    let tokens = vec![Token::new(TokenKind::Raw).with_raw("[^1]: note")];
    assert_eq!(render_tokens(&tokens), "[^1]: note");
  }

  #[test]
  fn test_render_nested_list_indent() {
    let inner = node(TokenKind::List { ordered: false, start: 0 }, vec![node(
      TokenKind::Item { task: None },
      vec![node(TokenKind::Paragraph, vec![text("child")])],
    )]);
    let outer = node(TokenKind::List { ordered: true, start: 1 }, vec![node(
      TokenKind::Item { task: None },
      vec![node(TokenKind::Paragraph, vec![text("parent")]), inner],
    )]);
    assert_eq!(render_tokens(&[outer]), "1. parent\n    • child");
  }

  #[test]
  fn test_render_task_markers() {
    let list = node(TokenKind::List { ordered: false, start: 0 }, vec![
      node(TokenKind::Item { task: Some(true) }, vec![node(
        TokenKind::Paragraph,
        vec![text("done")],
      )]),
      node(TokenKind::Item { task: Some(false) }, vec![node(
        TokenKind::Paragraph,
        vec![text("open")],
      )]),
    ]);
    assert_eq!(render_tokens(&[list]), "☑ done\n☐ open");
  }

  #[test]
  fn test_render_code_block_strips_one_newline() {
    let tokens = vec![Token::new(TokenKind::CodeBlock {
      literal: "let x = 1;\n".into(),
    })];
    assert_eq!(render_tokens(&tokens), "```\nlet x = 1;\n```");
  }

  #[test]
  fn test_render_blockquote_prefixes_lines() {
    let quote = node(TokenKind::BlockQuote, vec![
      node(TokenKind::Paragraph, vec![text("a")]),
      Token::new(TokenKind::Space),
      node(TokenKind::Paragraph, vec![text("b")]),
    ]);
    assert_eq!(render_tokens(&[quote]), "> a\n> \n> b");
  }

  #[test]
  fn test_render_html_is_escaped() {
    let tokens = vec![Token::new(TokenKind::Html {
      literal: "<div>x</div>\n".into(),
    })];
    assert_eq!(render_tokens(&tokens), "&lt;div&gt;x&lt;/div&gt;");
  }
}
