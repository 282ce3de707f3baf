//! Tabular reader: source text → tables of positioned cells.
//!
//! Each physical line becomes a [`DataRow`]. Comments and enclosing pipes are
//! stripped before segmentation, but every emitted span uses the column of
//! the character in the original line, so stripping never shifts columns.

use tracing::trace;

use super::table::{Cell, DataRow, DataTable};
use crate::base::constants::{COMMENT_CHAR, ESCAPE_CHAR, TABLE_HEADER_CHAR};
use crate::base::Span;

/// Read all tables from source text.
///
/// Rows before the first table header are dropped.
pub fn read_tables(text: &str) -> Vec<DataTable> {
    let mut reader = TableReader::new();
    for (line_no, line) in split_lines(text).enumerate() {
        reader.push_row(read_row(line_no, line));
    }
    reader.finish()
}

/// Accumulates rows into tables as they are read.
#[derive(Debug, Default)]
pub struct TableReader {
    tables: Vec<DataTable>,
    current: Option<DataTable>,
}

impl TableReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_row(&mut self, row: DataRow) {
        if row.is_table_header() {
            if let Some(table) = self.current.take() {
                self.tables.push(table);
            }
            let name = row
                .first_non_empty()
                .map(|(_, cell)| table_name(&cell.content))
                .unwrap_or_default();
            self.current = Some(DataTable::new(name, row));
            return;
        }

        match self.current.as_mut() {
            Some(table) => table.add_row(row),
            None => trace!(line = row.span.start.line, "row outside of any table dropped"),
        }
    }

    pub fn finish(mut self) -> Vec<DataTable> {
        if let Some(table) = self.current.take() {
            self.tables.push(table);
        }
        self.tables
    }
}

/// Strip header stars and surrounding whitespace: `*** Test Cases ***` → `Test Cases`.
fn table_name(header: &str) -> String {
    header
        .trim_matches(|c: char| c == TABLE_HEADER_CHAR || c.is_whitespace())
        .to_string()
}

/// Split on `\r\n`, `\n` or a lone `\r`.
fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = Some(text);
    std::iter::from_fn(move || {
        let current = rest?;
        match current.find(['\r', '\n']) {
            Some(idx) => {
                let skip = if current[idx..].starts_with("\r\n") { 2 } else { 1 };
                let remainder = &current[idx + skip..];
                // a trailing newline does not open another line
                rest = (!remainder.is_empty()).then_some(remainder);
                Some(&current[..idx])
            }
            None => {
                rest = None;
                Some(current)
            }
        }
    })
}

/// Segment one physical line into a row of cells.
pub fn read_row(line_no: usize, line: &str) -> DataRow {
    let chars: Vec<char> = line.chars().collect();

    let mut end = comment_start(&chars).unwrap_or(chars.len());
    let mut start = 0;

    let first_content = chars[..end].iter().position(|c| !c.is_whitespace());
    let pipe_mode = first_content.is_some_and(|idx| chars[idx] == '|');

    if let Some(pipe_idx) = first_content.filter(|_| pipe_mode) {
        start = pipe_idx + 1;

        let mut trimmed_end = end;
        while trimmed_end > start && chars[trimmed_end - 1].is_whitespace() {
            trimmed_end -= 1;
        }
        if trimmed_end > start
            && chars[trimmed_end - 1] == '|'
            && (trimmed_end - 1 == start || chars[trimmed_end - 2].is_whitespace())
        {
            end = trimmed_end - 1;
        }
    }

    let cells = segment(line_no, &chars, start, end, pipe_mode);
    DataRow::from_cells(line_no, cells)
}

/// Index of the first `#` not preceded by the escape character.
fn comment_start(chars: &[char]) -> Option<usize> {
    chars
        .iter()
        .enumerate()
        .find(|&(idx, &c)| c == COMMENT_CHAR && (idx == 0 || chars[idx - 1] != ESCAPE_CHAR))
        .map(|(idx, _)| idx)
}

/// Greedy left-to-right scan: at each step cut at the earliest separator
/// starting from the cursor.
fn segment(line_no: usize, chars: &[char], start: usize, end: usize, pipe_mode: bool) -> Vec<Cell> {
    let mut cells = Vec::new();
    let mut cursor = start;

    while cursor < end {
        match find_separator(chars, cursor, end, pipe_mode) {
            Some((sep_start, sep_end)) => {
                cells.push(make_cell(line_no, chars, cursor, sep_start));
                cursor = sep_end;
            }
            None => {
                cells.push(make_cell(line_no, chars, cursor, end));
                break;
            }
        }
    }

    cells
}

/// Find the earliest separator at or after `from`: two or more spaces, a
/// tab, or ` | `. Returns the separator's `[start, end)`.
fn find_separator(
    chars: &[char],
    from: usize,
    end: usize,
    pipe_mode: bool,
) -> Option<(usize, usize)> {
    let is_blank = |c: char| c == ' ' || c == '\t';

    let sep_start = (from..end).find(|&i| {
        let c = chars[i];
        let next = (i + 1 < end).then(|| chars[i + 1]);
        let after = (i + 2 < end).then(|| chars[i + 2]);
        c == '\t' || (c == ' ' && next == Some(' ')) || (c == ' ' && next == Some('|') && after == Some(' '))
    })?;

    let mut sep_end = sep_start;
    while sep_end < end && is_blank(chars[sep_end]) {
        sep_end += 1;
    }

    let pipe_follows = sep_end < end
        && chars[sep_end] == '|'
        && (sep_end + 1 == end || is_blank(chars[sep_end + 1]));
    let spaced_pipe = chars[sep_start] == ' ' && sep_start + 1 == sep_end;
    if pipe_follows && (pipe_mode || spaced_pipe) {
        sep_end += 1;
        while sep_end < end && is_blank(chars[sep_end]) {
            sep_end += 1;
        }
    }

    Some((sep_start, sep_end))
}

fn make_cell(line_no: usize, chars: &[char], from: usize, to: usize) -> Cell {
    let first = (from..to).find(|&i| !chars[i].is_whitespace());
    match first {
        Some(first) => {
            let last = (first..to)
                .rev()
                .find(|&i| !chars[i].is_whitespace())
                .unwrap_or(first);
            let content: String = chars[first..=last].iter().collect();
            Cell::new(content, Span::from_coords(line_no, first, line_no, last + 1))
        }
        None => Cell::new("", Span::from_coords(line_no, from, line_no, from)),
    }
}
