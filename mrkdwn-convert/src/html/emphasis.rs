//! Single-pass delimiter matching for bold, italic and strikethrough.
//!
//! Each style gets one left-to-right scan over the atom sequence. A scan
//! keeps at most one open candidate per nesting level, so pairs produced by
//! an earlier style act as walls that later pairs cannot straddle.
use super::inline::{Atom, Style};

/// What sits on one side of a delimiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Class {
  /// Start or end of the text.
  Edge,
  Space,
  /// Punctuation, symbols and pre-rendered fragments.
  Punct,
  Word,
}

fn class_at(atoms: &[Atom], idx: Option<usize>) -> Class {
  match idx.and_then(|idx| atoms.get(idx)) {
    None => Class::Edge,
    Some(Atom::Char(c)) if c.is_whitespace() => Class::Space,
    Some(Atom::Char(c)) if c.is_alphanumeric() => Class::Word,
    Some(_) => Class::Punct,
  }
}

/// A delimiter opens when it follows a boundary and touches content.
const fn can_open(before: Class, after: Class) -> bool {
  matches!(before, Class::Edge | Class::Space | Class::Punct)
    && matches!(after, Class::Punct | Class::Word)
}

/// A delimiter closes when it touches content and precedes a boundary.
const fn can_close(before: Class, after: Class) -> bool {
  matches!(before, Class::Punct | Class::Word)
    && matches!(after, Class::Edge | Class::Space | Class::Punct)
}

/// Replace matched `style` delimiters in `atoms` with open/close markers.
/// Unmatched delimiters stay literal.
pub(super) fn apply(atoms: &mut [Atom], style: Style) {
  let delimiter = style.delimiter();
  let mut pending: Vec<Option<usize>> = vec![None];

  for idx in 0..atoms.len() {
    let is_delimiter = match atoms[idx] {
      Atom::Open(_) => {
        pending.push(None);
        false
      },
      Atom::Close(_) => {
        if pending.len() > 1 {
          pending.pop();
        }
        false
      },
      Atom::Char(c) => c == delimiter,
      Atom::Html(_) => false,
    };
    if !is_delimiter {
      continue;
    }

    let before = class_at(atoms, idx.checked_sub(1));
    let after = class_at(atoms, Some(idx + 1));
    let Some(slot) = pending.last_mut() else {
      continue;
    };

    match *slot {
      Some(open) if idx > open + 1 && can_close(before, after) => {
        atoms[open] = Atom::Open(style);
        atoms[idx] = Atom::Close(style);
        *slot = None;
      },
      _ if can_open(before, after) => *slot = Some(idx),
      _ => *slot = None,
    }
  }
}
