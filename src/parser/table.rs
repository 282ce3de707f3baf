//! Cell, row and table model produced by the tabular reader.

use crate::base::constants::{CONTINUATION_MARKER, TABLE_HEADER_CHAR};
use crate::base::{Position, Span};

/// Where the `...` marker sits on a continuation row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContinuationStyle {
    /// Settings and variables tables: the marker is the first cell.
    FirstCell,
    /// Keyword and test case bodies: the marker follows the indentation,
    /// so the first cell is empty.
    Indented,
}

/// The smallest addressable unit of a row: trimmed text with its source span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub content: String,
    pub span: Span,
}

impl Cell {
    pub fn new(content: impl Into<String>, span: Span) -> Self {
        Self {
            content: content.into(),
            span,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// `...` marker cell
    pub fn is_continuation_marker(&self) -> bool {
        self.content == CONTINUATION_MARKER
    }
}

/// An ordered sequence of cells from one physical line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataRow {
    pub cells: Vec<Cell>,
    pub span: Span,
}

impl DataRow {
    pub fn new(cells: Vec<Cell>, span: Span) -> Self {
        Self { cells, span }
    }

    /// Builds a row whose span covers the given cells; a row without cells
    /// is a zero-width span at the start of `line`.
    pub fn from_cells(line: usize, cells: Vec<Cell>) -> Self {
        let span = match (cells.first(), cells.last()) {
            (Some(first), Some(last)) => Span::new(first.span.start, last.span.end),
            _ => Span::empty_at(Position::new(line, 0)),
        };
        Self { cells, span }
    }

    /// A row is empty iff every cell is empty.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Cell::is_empty)
    }

    pub fn first(&self) -> Option<&Cell> {
        self.cells.first()
    }

    pub fn last(&self) -> Option<&Cell> {
        self.cells.last()
    }

    pub fn first_non_empty(&self) -> Option<(usize, &Cell)> {
        self.cells.iter().enumerate().find(|(_, c)| !c.is_empty())
    }

    /// Whether the first cell holds text
    pub fn starts_with_content(&self) -> bool {
        self.first().is_some_and(|c| !c.is_empty())
    }

    /// Header rows start a new table.
    pub fn is_table_header(&self) -> bool {
        self.first_non_empty()
            .is_some_and(|(_, c)| c.content.starts_with(TABLE_HEADER_CHAR))
    }

    /// Whether this row extends the previous logical statement under `style`.
    pub fn is_row_continuation(&self, style: ContinuationStyle) -> bool {
        match (style, self.first_non_empty()) {
            (ContinuationStyle::FirstCell, Some((0, cell))) => cell.is_continuation_marker(),
            (ContinuationStyle::Indented, Some((idx, cell))) => {
                idx > 0 && cell.is_continuation_marker()
            }
            _ => false,
        }
    }

    /// Whether the first non-empty cell is the `...` marker, wherever it sits.
    pub fn has_continuation_marker(&self) -> bool {
        self.first_non_empty()
            .is_some_and(|(_, cell)| cell.is_continuation_marker())
    }

    /// Cells after the continuation marker (the marker itself is dropped).
    pub fn continuation_cells(&self) -> &[Cell] {
        match self.first_non_empty() {
            Some((idx, cell)) if cell.is_continuation_marker() => &self.cells[idx + 1..],
            _ => &[],
        }
    }
}

/// A named block of rows introduced by a `*** Name ***` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataTable {
    pub name: String,
    pub header: DataRow,
    pub rows: Vec<DataRow>,
}

impl DataTable {
    pub fn new(name: impl Into<String>, header: DataRow) -> Self {
        Self {
            name: name.into(),
            header,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: DataRow) {
        self.rows.push(row);
    }

    /// Span from the header to the last non-empty row. An empty table's span
    /// is its header's.
    pub fn span(&self) -> Span {
        match self.rows.iter().rev().find(|r| !r.is_empty()) {
            Some(last) => self.header.span.cover(&last.span),
            None => self.header.span,
        }
    }
}
