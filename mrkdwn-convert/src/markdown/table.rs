//! Tables render as a fixed-width box inside a code fence, since mrkdwn has
//! no table syntax.
use super::{
  render::render_inlines,
  token::{Token, TokenKind},
};

const VERTICAL: char = '│';
const HORIZONTAL: char = '─';

struct Row {
  header: bool,
  cells:  Vec<String>,
}

pub(super) fn render_table(table: &Token, out: &mut String) {
  let rows: Vec<Row> = table
    .children
    .iter()
    .map(|row| Row {
      header: matches!(row.kind, TokenKind::TableRow { header: true }),
      cells:  row
        .children
        .iter()
        .map(|cell| {
          let mut text = String::new();
          render_inlines(&cell.children, &mut text);
          text.replace('\n', " ")
        })
        .collect(),
    })
    .collect();

  let columns = rows.iter().map(|row| row.cells.len()).max().unwrap_or(0);
  if columns == 0 {
    return;
  }

  let mut widths = vec![0; columns];
  for row in &rows {
    for (width, cell) in widths.iter_mut().zip(&row.cells) {
      *width = (*width).max(cell.chars().count());
    }
  }

  out.push_str("```\n");
  for (idx, row) in rows.iter().enumerate() {
    push_row(&row.cells, &widths, out);
    let next_is_body = rows.get(idx + 1).is_some_and(|next| !next.header);
    if row.header && next_is_body {
      push_separator(&widths, out);
    }
  }
  out.push_str("```\n");
}

fn push_row(cells: &[String], widths: &[usize], out: &mut String) {
  out.push(VERTICAL);
  for (col, width) in widths.iter().enumerate() {
    let cell = cells.get(col).map_or("", String::as_str);
    let padding = width.saturating_sub(cell.chars().count());
    out.push(' ');
    out.push_str(cell);
    out.extend(std::iter::repeat_n(' ', padding + 1));
    out.push(VERTICAL);
  }
  out.push('\n');
}

fn push_separator(widths: &[usize], out: &mut String) {
  out.push(VERTICAL);
  for width in widths {
    out.extend(std::iter::repeat_n(HORIZONTAL, width + 2));
    out.push(VERTICAL);
  }
  out.push('\n');
}
