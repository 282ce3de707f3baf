//! Property tests: emitted cell columns reconstruct cell content.

use proptest::prelude::*;
use robotls::parser::read_row;

fn cell_text() -> impl Strategy<Value = String> {
    "[A-Za-z0-9_.=${}@&-]{1,8}( [A-Za-z0-9]{1,5})?"
}

fn separator() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("  "), Just("    "), Just("\t"), Just(" | "), Just(" \t ")]
}

fn slice(line: &str, start: usize, end: usize) -> String {
    line.chars().skip(start).take(end - start).collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// Property: every cell's span selects exactly its content.
    #[test]
    fn prop_cell_spans_round_trip(
        cells in prop::collection::vec(cell_text(), 1..8),
        separators in prop::collection::vec(separator(), 8),
        indent in any::<bool>(),
        comment in any::<bool>(),
    ) {
        let mut line = String::new();
        if indent {
            line.push_str("    ");
        }
        for (idx, cell) in cells.iter().enumerate() {
            if idx > 0 {
                line.push_str(separators[idx - 1]);
            }
            line.push_str(cell);
        }
        if comment {
            line.push_str("  # trailing comment");
        }

        let row = read_row(7, &line);
        let offset = usize::from(indent);
        prop_assert_eq!(row.cells.len(), cells.len() + offset);

        for (cell, expected) in row.cells[offset..].iter().zip(&cells) {
            prop_assert_eq!(&cell.content, expected);
            prop_assert_eq!(cell.span.start.line, 7);
            prop_assert_eq!(
                slice(&line, cell.span.start.column, cell.span.end.column),
                cell.content.clone()
            );
        }
    }

    /// Property: pipe-delimited lines round-trip the same way.
    #[test]
    fn prop_pipe_rows_round_trip(cells in prop::collection::vec(cell_text(), 1..6)) {
        let line = format!("| {} |", cells.join(" | "));
        let row = read_row(0, &line);
        let contents: Vec<String> = row.cells.iter().map(|c| c.content.clone()).collect();
        prop_assert_eq!(&contents, &cells);
        for cell in &row.cells {
            prop_assert_eq!(
                slice(&line, cell.span.start.column, cell.span.end.column),
                cell.content.clone()
            );
        }
    }
}
