//! Plain-text rendering of a document for line-oriented terminals.
//!
//! Tables are laid out as a grid with columns sized to their widest
//! single-span cell. Everything else renders inline on one line.

use crate::element::{Content, Element, Tag};
use crate::text::{display_width, fit_to_width, truncate_to_width};

/// Widest a single table column may grow, in terminal cells.
pub const MAX_COLUMN_WIDTH: usize = 40;

const COLUMN_SEPARATOR: &str = " | ";

/// Render a document to lines using the default inline representation.
pub fn render_lines(root: &Element) -> Vec<String> {
    render_lines_with(root, &|_, text| text)
}

/// Render a document to lines, letting `decorate` rewrite the inline text of
/// every element (e.g. to show state carried in classes).
pub fn render_lines_with(
    root: &Element,
    decorate: &dyn Fn(&Element, String) -> String,
) -> Vec<String> {
    let mut lines = Vec::new();
    block(root, decorate, &mut lines);
    lines
}

pub fn render_to_string(root: &Element) -> String {
    render_lines(root).join("\n")
}

fn block(element: &Element, decorate: &dyn Fn(&Element, String) -> String, out: &mut Vec<String>) {
    if element.tag == Tag::Table {
        out.extend(table_lines(element, decorate));
        return;
    }

    if contains_table(element) {
        for child in element.child_elements() {
            block(child, decorate, out);
        }
        return;
    }

    let line = inline(element, decorate);
    if !line.trim().is_empty() {
        out.push(line);
    }
}

fn contains_table(element: &Element) -> bool {
    element
        .child_elements()
        .iter()
        .any(|child| child.tag == Tag::Table || contains_table(child))
}

/// Single-line representation of an element and its descendants.
pub fn inline(element: &Element, decorate: &dyn Fn(&Element, String) -> String) -> String {
    let text = match &element.content {
        Content::None => String::new(),
        Content::Text(text) => text.trim().to_string(),
        Content::TextInput { value, placeholder } => {
            if value.is_empty() {
                format!("[{}]", placeholder.as_deref().unwrap_or(""))
            } else {
                format!("[{value}]")
            }
        }
        Content::Children(children) => children
            .iter()
            .map(|child| inline(child, decorate))
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" "),
    };

    let text = match element.tag {
        Tag::Button if element.disabled => format!(" {text} "),
        Tag::Button => format!("[{text}]"),
        _ => text,
    };
    decorate(element, text)
}

struct GridRow {
    cells: Vec<(u16, String)>,
    header: bool,
}

fn table_lines(table: &Element, decorate: &dyn Fn(&Element, String) -> String) -> Vec<String> {
    let mut rows = Vec::new();
    for child in table.child_elements() {
        match child.tag {
            Tag::Row => rows.push(grid_row(child, false, decorate)),
            Tag::Head | Tag::Body | Tag::Foot => {
                for row in child.child_elements().iter().filter(|r| r.tag == Tag::Row) {
                    rows.push(grid_row(row, child.tag == Tag::Head, decorate));
                }
            }
            _ => {}
        }
    }

    let widths = column_widths(&rows);
    let mut lines = Vec::new();
    let mut in_header = true;
    for row in &rows {
        if in_header && !row.header && !lines.is_empty() {
            let total = total_width(&widths, 0, widths.len());
            lines.push("-".repeat(total));
        }
        in_header = row.header;

        let line = layout_row(row, &widths);
        if !line.trim().is_empty() {
            lines.push(line.trim_end().to_string());
        }
    }
    lines
}

fn grid_row(row: &Element, header: bool, decorate: &dyn Fn(&Element, String) -> String) -> GridRow {
    let cells = row
        .child_elements()
        .iter()
        .filter(|cell| matches!(cell.tag, Tag::HeaderCell | Tag::Cell))
        .map(|cell| (cell.col_span.max(1), inline(cell, decorate)))
        .collect();
    GridRow { cells, header }
}

fn column_widths(rows: &[GridRow]) -> Vec<usize> {
    let columns = rows
        .iter()
        .map(|row| row.cells.iter().map(|(span, _)| *span as usize).sum::<usize>())
        .max()
        .unwrap_or(0);

    let mut widths = vec![0; columns];
    for row in rows {
        let mut column = 0;
        for (span, text) in &row.cells {
            if *span == 1 {
                widths[column] = widths[column].max(display_width(text).min(MAX_COLUMN_WIDTH));
            }
            column += *span as usize;
        }
    }
    widths
}

fn total_width(widths: &[usize], start: usize, span: usize) -> usize {
    let end = (start + span).min(widths.len());
    if start >= end {
        return 0;
    }
    widths[start..end].iter().sum::<usize>() + COLUMN_SEPARATOR.len() * (end - start - 1)
}

fn layout_row(row: &GridRow, widths: &[usize]) -> String {
    let mut column = 0;
    let mut parts = Vec::with_capacity(row.cells.len());
    for (span, text) in &row.cells {
        let width = total_width(widths, column, *span as usize);
        // Spanning cells may overflow the grid up to MAX_COLUMN_WIDTH.
        if *span > 1 && display_width(text) > width {
            parts.push(truncate_to_width(text, width.max(MAX_COLUMN_WIDTH)));
        } else {
            parts.push(fit_to_width(text, width));
        }
        column += *span as usize;
    }
    parts.join(COLUMN_SEPARATOR)
}
