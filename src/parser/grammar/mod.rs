//! Table grammars: one parser per table kind, plus shared primitives.
//!
//! All table parsers follow the same contract: rows that do not fit the
//! expected shape are dropped (with a `trace!`) and parsing continues.

pub mod call_expression;
pub mod functions;
pub mod primitives;
pub mod python;
pub mod settings;
pub mod variables;

use tracing::trace;

use super::table::{Cell, ContinuationStyle, DataRow};
use crate::base::Span;

/// A statement after continuation rows have been folded in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogicalRow {
    pub cells: Vec<Cell>,
    pub span: Span,
}

impl LogicalRow {
    pub fn first(&self) -> Option<&Cell> {
        self.cells.first()
    }

    pub fn starts_with_content(&self) -> bool {
        self.first().is_some_and(|c| !c.is_empty())
    }
}

/// Fold continuation rows into the statement they extend.
///
/// Empty rows are skipped without ending the current statement, so a blank
/// line between a row and its `...` continuation is allowed. A continuation
/// with nothing to continue is dropped, and so is a `...` row placed the
/// wrong way for `style`.
pub fn logical_rows(rows: &[DataRow], style: ContinuationStyle) -> Vec<LogicalRow> {
    let mut logical: Vec<LogicalRow> = Vec::new();

    for row in rows.iter().filter(|r| !r.is_empty()) {
        if row.is_row_continuation(style) {
            match logical.last_mut() {
                Some(current) => {
                    current.cells.extend(row.continuation_cells().iter().cloned());
                    current.span = current.span.cover(&row.span);
                }
                None => trace!(line = row.span.start.line, "continuation without owner dropped"),
            }
            continue;
        }
        if row.has_continuation_marker() {
            trace!(line = row.span.start.line, ?style, "misplaced continuation dropped");
            continue;
        }

        logical.push(LogicalRow {
            cells: row.cells.clone(),
            span: row.span,
        });
    }

    logical
}
