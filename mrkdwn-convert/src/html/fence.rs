//! Code-fence extraction and line splitting.
//!
//! Fenced code is pulled out of the text before anything else runs and is
//! carried as pre-rendered HTML from then on, so no later rule can see it.
use crate::escape::escape_html;

const FENCE: &str = "```";

/// A piece of the input after fence extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum Segment<'a> {
  /// Unprocessed mrkdwn text.
  Text(&'a str),
  /// A rendered `<pre><code>` block.
  Protected(String),
}

/// A piece of a single source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Piece<'a> {
  Text(&'a str),
  /// Pre-rendered block HTML.
  Protected(&'a str),
}

pub(super) type Line<'a> = Vec<Piece<'a>>;

/// Split `text` into text and fenced-code segments. An opening fence with no
/// closing fence is left as literal text.
pub(super) fn extract(text: &str) -> Vec<Segment<'_>> {
  let mut segments = Vec::new();
  let mut rest = text;

  while let Some(open) = rest.find(FENCE) {
    let body_start = open + FENCE.len();
    let Some(close) = rest[body_start..].find(FENCE) else {
      break;
    };
    let body = &rest[body_start..body_start + close];
    let body = body
      .strip_prefix("\r\n")
      .or_else(|| body.strip_prefix('\n'))
      .unwrap_or(body);

    if open > 0 {
      segments.push(Segment::Text(&rest[..open]));
    }
    segments.push(Segment::Protected(format!(
      "<pre><code>{}</code></pre>",
      escape_html(body)
    )));
    rest = &rest[body_start + close + FENCE.len()..];
  }

  if !rest.is_empty() {
    segments.push(Segment::Text(rest));
  }
  segments
}

/// Regroup segments into source lines. A fence stays on the line it opened
/// on; the text around it splits at newlines as usual.
pub(super) fn lines<'a>(segments: &'a [Segment<'a>]) -> Vec<Line<'a>> {
  let mut lines = Vec::new();
  let mut current = Vec::new();

  for segment in segments {
    match *segment {
      Segment::Text(text) => {
        for (idx, part) in text.split('\n').enumerate() {
          if idx > 0 {
            lines.push(std::mem::take(&mut current));
          }
          let part = part.strip_suffix('\r').unwrap_or(part);
          if !part.is_empty() {
            current.push(Piece::Text(part));
          }
        }
      },
      Segment::Protected(ref html) => current.push(Piece::Protected(html)),
    }
  }

  lines.push(current);
  lines
}
