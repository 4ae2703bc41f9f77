//! The token tree consumed by the mrkdwn renderer, and the lexer that builds
//! it from a comrak AST.
use comrak::{
  Arena,
  nodes::{AstNode, ListType, NodeValue, Sourcepos},
  options::Options,
  parse_document,
};
use log::debug;

use crate::utils::ceil_char_boundary;

/// Deepest token nesting that is lowered structurally. Deeper subtrees
/// become [`TokenKind::Raw`], which keeps lowering, rendering and dropping
/// the tree within a bounded stack.
pub const MAX_DEPTH: usize = 64;

/// A node in the Markdown token tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
  /// What this token is.
  pub kind:     TokenKind,
  /// The original source text this token spans.
  pub raw:      String,
  /// Child tokens, in document order.
  pub children: Vec<Self>,
}

/// The closed set of token kinds the renderer understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
  Paragraph,
  Heading { level: u8 },
  BlockQuote,
  List { ordered: bool, start: usize },
  /// A list item. `task` is `Some(checked)` for task-list items.
  Item { task: Option<bool> },
  CodeBlock { literal: String },
  /// Raw HTML, block or inline.
  Html { literal: String },
  Table,
  TableRow { header: bool },
  TableCell,
  ThematicBreak,
  /// A blank line separating two sibling blocks.
  Space,
  Text(String),
  Strong,
  Emph,
  Del,
  CodeSpan(String),
  Link { href: String },
  Image { src: String, alt: String },
  SoftBreak,
  LineBreak,
  /// Anything else. Rendered as its raw source text.
  Raw,
}

impl Token {
  /// A token with no children and no recorded source text.
  #[must_use]
  pub const fn new(kind: TokenKind) -> Self {
    Self {
      kind,
      raw: String::new(),
      children: Vec::new(),
    }
  }

  /// Attach child tokens.
  #[must_use]
  pub fn with_children(mut self, children: Vec<Self>) -> Self {
    self.children = children;
    self
  }

  /// Attach raw source text.
  #[must_use]
  pub fn with_raw(mut self, raw: impl Into<String>) -> Self {
    self.raw = raw.into();
    self
  }

  /// A plain text token whose raw text is the text itself.
  #[must_use]
  pub fn text(text: &str) -> Self {
    Self::new(TokenKind::Text(text.to_owned())).with_raw(text)
  }
}

/// Lex `markdown` into a token tree.
///
/// `gfm` enables tables, strikethrough, task lists and bare-URL autolinks.
#[must_use]
pub fn tokenize(markdown: &str, gfm: bool) -> Vec<Token> {
  let arena = Arena::new();
  let options = lexer_options(gfm);
  let root = parse_document(&arena, markdown, &options);
  let source = SourceMap::new(markdown);
  lower_children(root, &source, true, 0)
}

fn lexer_options(gfm: bool) -> Options<'static> {
  let mut options = Options::default();
  if gfm {
    options.extension.table = true;
    options.extension.strikethrough = true;
    options.extension.tasklist = true;
    options.extension.autolink = true;
  }
  options
}

/// Lower the children of `node`. When `blocks` is set, a blank line directly
/// above a sibling block becomes a [`TokenKind::Space`] token.
fn lower_children<'a>(
  node: &'a AstNode<'a>,
  source: &SourceMap<'_>,
  blocks: bool,
  depth: usize,
) -> Vec<Token> {
  let mut tokens = Vec::new();
  let mut previous_start: Option<usize> = None;

  for child in node.children() {
    let start = child.data.borrow().sourcepos.start.line;
    if blocks
      && let Some(previous) = previous_start
      && start > previous + 1
      && source.is_blank_line(start - 1)
    {
      tokens.push(Token::new(TokenKind::Space));
    }
    previous_start = Some(start);
    tokens.push(lower(child, source, depth));
  }

  tokens
}

fn lower<'a>(node: &'a AstNode<'a>, source: &SourceMap<'_>, depth: usize) -> Token {
  let ast = node.data.borrow();
  let raw = source.slice(ast.sourcepos);

  if depth >= MAX_DEPTH {
    debug!("Markdown nested deeper than {MAX_DEPTH} levels, keeping raw text");
    return Token::new(TokenKind::Raw).with_raw(raw);
  }

  let kind = match &ast.value {
    NodeValue::Paragraph => TokenKind::Paragraph,
    NodeValue::Heading(heading) => TokenKind::Heading {
      level: heading.level,
    },
    NodeValue::BlockQuote => TokenKind::BlockQuote,
    NodeValue::List(list) => TokenKind::List {
      ordered: matches!(list.list_type, ListType::Ordered),
      start:   list.start,
    },
    NodeValue::Item(_) => TokenKind::Item { task: None },
    NodeValue::TaskItem(..) => TokenKind::Item {
      task: Some(task_checked(&raw)),
    },
    NodeValue::CodeBlock(block) => TokenKind::CodeBlock {
      literal: block.literal.clone(),
    },
    NodeValue::HtmlBlock(block) => TokenKind::Html {
      literal: block.literal.clone(),
    },
    NodeValue::HtmlInline(html) => TokenKind::Html {
      literal: html.to_string(),
    },
    NodeValue::Table(..) => TokenKind::Table,
    NodeValue::TableRow(header) => TokenKind::TableRow { header: *header },
    NodeValue::TableCell => TokenKind::TableCell,
    NodeValue::ThematicBreak => TokenKind::ThematicBreak,
    NodeValue::Text(text) => TokenKind::Text(text.to_string()),
    NodeValue::Strong => TokenKind::Strong,
    NodeValue::Emph => TokenKind::Emph,
    NodeValue::Strikethrough => TokenKind::Del,
    NodeValue::Code(code) => TokenKind::CodeSpan(code.literal.clone()),
    NodeValue::Link(link) => TokenKind::Link {
      href: link.url.clone(),
    },
    NodeValue::Image(link) => TokenKind::Image {
      src: link.url.clone(),
      alt: collect_text(node, depth),
    },
    NodeValue::SoftBreak => TokenKind::SoftBreak,
    NodeValue::LineBreak => TokenKind::LineBreak,
    other => {
      debug!("Lowering unsupported markdown node {other:?} as raw text");
      TokenKind::Raw
    },
  };
  drop(ast);

  let children = match kind {
    TokenKind::Image { .. } | TokenKind::Raw | TokenKind::CodeSpan(_) => {
      Vec::new()
    },
    TokenKind::BlockQuote => lower_children(node, source, true, depth + 1),
    _ => lower_children(node, source, false, depth + 1),
  };

  Token {
    kind,
    raw,
    children,
  }
}

/// Read the checked state of a task item from its `[ ]` / `[x]` marker.
fn task_checked(raw: &str) -> bool {
  let line = raw.lines().next().unwrap_or_default().trim_start();
  let after_marker = line
    .trim_start_matches(|c: char| c.is_ascii_digit())
    .trim_start_matches(['-', '*', '+', '.', ')'])
    .trim_start();
  after_marker.starts_with("[x]") || after_marker.starts_with("[X]")
}

/// Plain text content of an inline subtree.
fn collect_text<'a>(node: &'a AstNode<'a>, depth: usize) -> String {
  let mut text = String::new();
  if depth >= MAX_DEPTH {
    return text;
  }
  for child in node.children() {
    match &child.data.borrow().value {
      NodeValue::Text(t) => text.push_str(t),
      NodeValue::Code(code) => text.push_str(&code.literal),
      NodeValue::SoftBreak | NodeValue::LineBreak => text.push(' '),
      _ => text.push_str(&collect_text(child, depth + 1)),
    }
  }
  text
}

/// Maps comrak's 1-based line/column positions back to byte offsets.
struct SourceMap<'s> {
  source:      &'s str,
  line_starts: Vec<usize>,
}

impl<'s> SourceMap<'s> {
  fn new(source: &'s str) -> Self {
    let line_starts = std::iter::once(0)
      .chain(source.match_indices('\n').map(|(idx, _)| idx + 1))
      .collect();
    Self {
      source,
      line_starts,
    }
  }

  fn offset(&self, line: usize, column: usize) -> Option<usize> {
    let start = *self.line_starts.get(line.checked_sub(1)?)?;
    Some(start + column.saturating_sub(1))
  }

  /// Whether 1-based `line` holds nothing but whitespace and blockquote
  /// markers.
  fn is_blank_line(&self, line: usize) -> bool {
    let Some(start) = line.checked_sub(1).and_then(|idx| self.line_starts.get(idx)) else {
      return false;
    };
    let rest = &self.source[*start..];
    let text = rest.split('\n').next().unwrap_or_default();
    text.trim_matches(|c: char| c.is_whitespace() || c == '>').is_empty()
  }

  /// The source text covered by `pos`, or an empty string when the position
  /// is unknown or out of range.
  fn slice(&self, pos: Sourcepos) -> String {
    let (Some(start), Some(end)) = (
      self.offset(pos.start.line, pos.start.column),
      self.offset(pos.end.line, pos.end.column),
    ) else {
      return String::new();
    };
    let start = ceil_char_boundary(self.source, start);
    let end = ceil_char_boundary(self.source, end + 1);
    if start >= end {
      return String::new();
    }
    self
      .source
      .get(start..end)
      .map_or_else(String::new, ToOwned::to_owned)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn kinds(tokens: &[Token]) -> Vec<&TokenKind> {
    tokens.iter().map(|t| &t.kind).collect()
  }

  #[test]
  fn test_paragraph_and_heading() {
    let tokens = tokenize("# Title\n\nBody text", true);
    assert_eq!(kinds(&tokens), vec![
      &TokenKind::Heading { level: 1 },
      &TokenKind::Space,
      &TokenKind::Paragraph,
    ]);
    assert_eq!(tokens[2].children, vec![Token {
      kind:     TokenKind::Text("Body text".into()),
      raw:      "Body text".into(),
      children: Vec::new(),
    }]);
  }

  #[test]
  fn test_no_space_without_blank_line() {
    let tokens = tokenize("# Title\nBody", true);
    assert_eq!(kinds(&tokens), vec![
      &TokenKind::Heading { level: 1 },
      &TokenKind::Paragraph,
    ]);
  }

  #[test]
  fn test_raw_text_recovered() {
    let tokens = tokenize("Some **bold** text", true);
    let paragraph = &tokens[0];
    assert_eq!(paragraph.raw, "Some **bold** text");
    assert_eq!(paragraph.children[1].kind, TokenKind::Strong);
    assert_eq!(paragraph.children[0].raw, "Some ");
  }

  #[test]
  fn test_ordered_list_start() {
    let tokens = tokenize("3. a\n4. b", true);
    assert_eq!(tokens[0].kind, TokenKind::List {
      ordered: true,
      start:   3,
    });
    assert_eq!(tokens[0].children.len(), 2);
  }

  #[test]
  fn test_task_items() {
    let tokens = tokenize("- [x] done\n- [ ] todo\n- plain", true);
    let items = kinds(&tokens[0].children);
    assert_eq!(items, vec![
      &TokenKind::Item { task: Some(true) },
      &TokenKind::Item { task: Some(false) },
      &TokenKind::Item { task: None },
    ]);
  }

  #[test]
  fn test_gfm_disabled_has_no_tables_or_tasks() {
    let tokens = tokenize("| a |\n|---|\n| b |", false);
    assert_eq!(kinds(&tokens), vec![&TokenKind::Paragraph]);

    let tokens = tokenize("- [x] done", false);
    assert_eq!(tokens[0].children[0].kind, TokenKind::Item { task: None });
  }

  #[test]
  fn test_table_rows() {
    let tokens = tokenize("| a | b |\n|---|---|\n| 1 | 2 |", true);
    assert_eq!(tokens[0].kind, TokenKind::Table);
    let rows = kinds(&tokens[0].children);
    assert_eq!(rows, vec![
      &TokenKind::TableRow { header: true },
      &TokenKind::TableRow { header: false },
    ]);
  }

  #[test]
  fn test_image_alt_text() {
    let tokens = tokenize("![a *cat*](cat.png)", true);
    assert_eq!(tokens[0].children[0].kind, TokenKind::Image {
      src: "cat.png".into(),
      alt: "a cat".into(),
    });
  }

  #[test]
  fn test_code_block_literal() {
    let tokens = tokenize("```rust\nfn main() {}\n```", true);
    assert_eq!(tokens[0].kind, TokenKind::CodeBlock {
      literal: "fn main() {}\n".into(),
    });
  }

  #[test]
  fn test_blockquote_children_have_spaces() {
    let tokens = tokenize("> one\n>\n> two", true);
    assert_eq!(kinds(&tokens[0].children), vec![
      &TokenKind::Paragraph,
      &TokenKind::Space,
      &TokenKind::Paragraph,
    ]);
  }

  fn depth(tokens: &[Token]) -> usize {
    tokens
      .iter()
      .map(|token| 1 + depth(&token.children))
      .max()
      .unwrap_or(0)
  }

  #[test]
  fn test_deep_blockquotes_are_capped() {
    let markdown = format!("{} a", ">".repeat(5_000));
    let tokens = tokenize(&markdown, true);
    assert!(depth(&tokens) <= MAX_DEPTH + 1);

    let mut innermost = &tokens[0];
    while let Some(child) = innermost.children.first() {
      innermost = child;
    }
    assert_eq!(innermost.kind, TokenKind::Raw);
    assert!(innermost.raw.ends_with('a'));
  }

  #[test]
  fn test_shallow_nesting_is_not_capped() {
    let markdown = format!("{} a", ">".repeat(10));
    let tokens = tokenize(&markdown, true);
    assert!(!format!("{tokens:?}").contains("Raw"));
  }

  #[test]
  fn test_task_checked_marker() {
    assert!(task_checked("- [x] a"));
    assert!(task_checked("1. [X] a"));
    assert!(!task_checked("- [ ] a"));
    assert!(!task_checked(""));
  }

  #[test]
  fn test_source_map_out_of_range() {
    let map = SourceMap::new("ab\ncd");
    assert_eq!(map.slice(Sourcepos::from((2, 1, 2, 2))), "cd");
    assert_eq!(map.slice(Sourcepos::from((9, 1, 9, 2))), "");
    assert_eq!(map.slice(Sourcepos::from((0, 0, 0, 0))), "");
  }

  #[test]
  fn test_source_map_blank_lines() {
    let map = SourceMap::new("a\n  \n> \n>b");
    assert!(!map.is_blank_line(1));
    assert!(map.is_blank_line(2));
    assert!(map.is_blank_line(3));
    assert!(!map.is_blank_line(4));
    assert!(!map.is_blank_line(9));
  }

  #[test]
  fn test_source_map_multibyte() {
    let map = SourceMap::new("é!");
    // Column 2 is the second byte of 'é'.
    assert_eq!(map.slice(Sourcepos::from((1, 2, 1, 3))), "!");
  }
}
