//! Fixed-width text table rendering for [`Statistics`].
//!
//! A rendered table with the header enabled looks like this (width 15):
//!
//! ```text
//! +-----------------+-----------------+-----------------+-----------------+-----------------+
//! | n               | mean            | stddev          | min             | max             |
//! +-----------------+-----------------+-----------------+-----------------+-----------------+
//! | 10.0000         | 0.5000          | 0.2887          | 0.0000          | 1.0000          |
//! +-----------------+-----------------+-----------------+-----------------+-----------------+
//! ```

use crate::stats::Statistics;

/// Default width of every column, excluding the surrounding padding.
pub const COLUMN_WIDTH: usize = 15;

/// Decimal places used for every value.
pub const PRECISION: usize = 4;

/// Renders [`Statistics`] as a bordered, left-justified text table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TableRenderer {
    column_width: usize,
}

impl Default for TableRenderer {
    fn default() -> Self {
        Self {
            column_width: COLUMN_WIDTH,
        }
    }
}

impl TableRenderer {
    /// Creates a renderer with a custom column width.
    pub fn with_column_width(column_width: usize) -> Self {
        Self { column_width }
    }

    /// Returns the column width.
    #[inline]
    pub fn column_width(&self) -> usize {
        self.column_width
    }

    /// Horizontal border: one `+` and `width + 2` dashes per column, closed by `+`.
    pub fn border(&self) -> String {
        let segment = format!("+{}", "-".repeat(self.column_width + 2));
        let mut line = segment.repeat(Statistics::LABELS.len());
        line.push('+');
        line
    }

    /// Renders the table; every line, including the last, ends with `\n`.
    ///
    /// Values are formatted to four decimal places before padding, so
    /// strings longer than the column width push the row out rather than
    /// being truncated.
    pub fn render(&self, stats: &Statistics, include_header: bool) -> String {
        let border = self.border();
        let mut out = String::new();

        out.push_str(&border);
        out.push('\n');

        if include_header {
            out.push_str(&self.row(Statistics::LABELS.iter().copied()));
            out.push_str(&border);
            out.push('\n');
        }

        let cells: Vec<String> = stats
            .to_array()
            .iter()
            .map(|value| format!("{:.*}", PRECISION, value))
            .collect();
        out.push_str(&self.row(cells.iter().map(String::as_str)));
        out.push_str(&border);
        out.push('\n');

        out
    }

    fn row<'a>(&self, cells: impl Iterator<Item = &'a str>) -> String {
        let mut line = String::new();
        for cell in cells {
            line.push_str(&format!("| {:<width$} ", cell, width = self.column_width));
        }
        line.push_str("|\n");
        line
    }
}

/// Renders with the default column width.
pub fn render(stats: &Statistics, include_header: bool) -> String {
    TableRenderer::default().render(stats, include_header)
}
