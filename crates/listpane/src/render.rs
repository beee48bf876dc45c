//! Plain-text rendering of a [`PageView`].
//!
//! Column widths are measured in terminal cells with `unicode-width`, so
//! wide characters line up.
//!
//! ```text
//! Product List
//! ┌───────────────────┬─────────────┬───────┬───────┬───────┐
//! │ Name              │ Category    │ Price │ Stock │ Sales │
//! ├───────────────────┼─────────────┼───────┼───────┼───────┤
//! │ Bluetooth Speaker │ Electronics │ 49.99 │ 120   │ 400   │
//! └───────────────────┴─────────────┴───────┴───────┴───────┘
//! 1 row (search 'speaker')
//! Page 1 of 1
//! ```

use listpane_export::Column;
use unicode_width::UnicodeWidthStr;

use crate::view::PageView;

/// Border style for table decoration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BorderStyle {
    /// No borders; columns separated by two spaces.
    None,
    /// ASCII borders: +, -, |
    Ascii,
    /// Light Unicode box-drawing characters.
    #[default]
    Light,
    /// Light lines with rounded corners.
    Rounded,
}

#[derive(Clone, Copy, Debug)]
struct BorderChars {
    horizontal: char,
    vertical: char,
    top_left: char,
    top_right: char,
    bottom_left: char,
    bottom_right: char,
    left_t: char,
    cross: char,
    right_t: char,
    top_t: char,
    bottom_t: char,
}

impl BorderStyle {
    fn chars(self) -> Option<BorderChars> {
        match self {
            BorderStyle::None => None,
            BorderStyle::Ascii => Some(BorderChars {
                horizontal: '-',
                vertical: '|',
                top_left: '+',
                top_right: '+',
                bottom_left: '+',
                bottom_right: '+',
                left_t: '+',
                cross: '+',
                right_t: '+',
                top_t: '+',
                bottom_t: '+',
            }),
            BorderStyle::Light => Some(BorderChars {
                horizontal: '─',
                vertical: '│',
                top_left: '┌',
                top_right: '┐',
                bottom_left: '└',
                bottom_right: '┘',
                left_t: '├',
                cross: '┼',
                right_t: '┤',
                top_t: '┬',
                bottom_t: '┴',
            }),
            BorderStyle::Rounded => Some(BorderChars {
                horizontal: '─',
                vertical: '│',
                top_left: '╭',
                top_right: '╮',
                bottom_left: '╰',
                bottom_right: '╯',
                left_t: '├',
                cross: '┼',
                right_t: '┤',
                top_t: '┬',
                bottom_t: '┴',
            }),
        }
    }
}

#[derive(Clone, Copy)]
enum LineType {
    Top,
    Middle,
    Bottom,
}

/// A text table sized to its content.
#[derive(Clone, Debug)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    border: BorderStyle,
}

impl Table {
    pub fn new<S: Into<String>, I: IntoIterator<Item = S>>(headers: I) -> Self {
        Table {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
            border: BorderStyle::default(),
        }
    }

    pub fn border(mut self, border: BorderStyle) -> Self {
        self.border = border;
        self
    }

    /// Appends a row. Missing cells render empty; extra cells are dropped.
    pub fn push_row<S: Into<String>, I: IntoIterator<Item = S>>(&mut self, cells: I) {
        let mut row: Vec<String> = cells
            .into_iter()
            .map(Into::into)
            .take(self.headers.len())
            .collect();
        row.resize(self.headers.len(), String::new());
        self.rows.push(row);
    }

    /// Display width of each column: the widest of header and cells.
    pub fn widths(&self) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .map(|(i, header)| {
                self.rows
                    .iter()
                    .map(|row| row[i].width())
                    .chain(std::iter::once(header.width()))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let mut lines = Vec::with_capacity(self.rows.len() + 4);

        match self.border.chars() {
            Some(chars) => {
                lines.push(horizontal_line(&chars, &widths, LineType::Top));
                lines.push(bordered_row(&chars, &widths, &self.headers));
                lines.push(horizontal_line(&chars, &widths, LineType::Middle));
                for row in &self.rows {
                    lines.push(bordered_row(&chars, &widths, row));
                }
                lines.push(horizontal_line(&chars, &widths, LineType::Bottom));
            }
            None => {
                lines.push(plain_row(&widths, &self.headers));
                for row in &self.rows {
                    lines.push(plain_row(&widths, row));
                }
            }
        }

        lines.join("\n")
    }
}

fn pad(cell: &str, width: usize) -> String {
    let fill = width.saturating_sub(cell.width());
    format!("{}{}", cell, " ".repeat(fill))
}

fn plain_row(widths: &[usize], cells: &[String]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &w)| pad(cell, w))
        .collect();
    padded.join("  ").trim_end().to_string()
}

fn bordered_row(chars: &BorderChars, widths: &[usize], cells: &[String]) -> String {
    let mut line = String::new();
    line.push(chars.vertical);
    for (cell, &w) in cells.iter().zip(widths) {
        line.push(' ');
        line.push_str(&pad(cell, w));
        line.push(' ');
        line.push(chars.vertical);
    }
    line
}

fn horizontal_line(chars: &BorderChars, widths: &[usize], line_type: LineType) -> String {
    let (left, join, right) = match line_type {
        LineType::Top => (chars.top_left, chars.top_t, chars.top_right),
        LineType::Middle => (chars.left_t, chars.cross, chars.right_t),
        LineType::Bottom => (chars.bottom_left, chars.bottom_t, chars.bottom_right),
    };
    let segments: Vec<String> = widths
        .iter()
        .map(|w| chars.horizontal.to_string().repeat(w + 2))
        .collect();
    format!("{}{}{}", left, segments.join(&join.to_string()), right)
}

/// Renders a page: title, table, row count with active filters, and the
/// "Page X of Y" indicator.
pub fn render_page<T>(page: &PageView<&T>, columns: &[Column<T>], border: BorderStyle) -> String {
    let mut table = Table::new(columns.iter().map(Column::header)).border(border);
    for row in &page.items {
        table.push_row(columns.iter().map(|c| c.display(row)));
    }

    let mut out = String::new();
    out.push_str(&page.title);
    out.push('\n');
    out.push_str(&table.render());
    out.push('\n');

    let noun = if page.total_count == 1 { "row" } else { "rows" };
    let count = if page.total_count == 0 {
        "No matching rows".to_string()
    } else {
        format!("{} {}", page.total_count, noun)
    };
    match &page.filter_summary {
        Some(summary) => out.push_str(&format!("{} ({})\n", count, summary)),
        None => out.push_str(&format!("{}\n", count)),
    }
    out.push_str(&page.indicator());
    out.push('\n');
    out
}
