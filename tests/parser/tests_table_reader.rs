//! Tabular reader tests across separator styles.

use rstest::rstest;
use robotls::parser::{read_row, read_tables};

fn contents(line: &str) -> Vec<String> {
    read_row(0, line)
        .cells
        .into_iter()
        .map(|c| c.content)
        .collect()
}

#[rstest]
#[case::two_spaces("Log  hello", &["Log", "hello"])]
#[case::many_spaces("Log        hello", &["Log", "hello"])]
#[case::single_space_is_content("Log hello", &["Log hello"])]
#[case::tab("Log\thello", &["Log", "hello"])]
#[case::spaced_pipe("Log | hello", &["Log", "hello"])]
#[case::pipe_line("| Log | hello |", &["Log", "hello"])]
#[case::indented_pipe_line("|    | Log | hello |", &["", "Log", "hello"])]
#[case::comment("Log  hello  # trailing", &["Log", "hello"])]
#[case::comment_only("# nothing here", &[])]
#[case::escaped_comment("Log  \\# kept", &["Log", "\\# kept"])]
fn test_segmentation(#[case] line: &str, #[case] expected: &[&str]) {
    assert_eq!(contents(line), expected);
}

#[test]
fn test_pipe_stripping_keeps_original_columns() {
    let line = "| Log | hello |";
    let row = read_row(3, line);
    let chars: Vec<char> = line.chars().collect();
    for cell in &row.cells {
        let text: String = chars[cell.span.start.column..cell.span.end.column]
            .iter()
            .collect();
        assert_eq!(text, cell.content);
        assert_eq!(cell.span.start.line, 3);
    }
    assert_eq!(row.cells[0].span.start.column, 2);
    assert_eq!(row.cells[1].span.start.column, 8);
}

#[test]
fn test_tables_and_line_endings() {
    let text = "ignored before header\r\n*** Settings ***\r\nLibrary  Collections\r*** Keywords ***\nEmpty\n\n*** Nothing ***";
    let tables = read_tables(text);
    let names: Vec<&str> = tables.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["Settings", "Keywords", "Nothing"]);

    assert_eq!(tables[0].rows.len(), 1);
    assert_eq!(tables[0].rows[0].span.start.line, 2);

    // an empty table is located at its header
    let nothing = &tables[2];
    assert!(nothing.rows.is_empty());
    assert_eq!(nothing.span(), nothing.header.span);

    // trailing blank rows do not extend a table
    assert_eq!(tables[1].span().end.line, 4);
}

#[test]
fn test_non_ascii_columns_are_characters() {
    let row = read_row(0, "Größe    prüfen");
    assert_eq!(row.cells[1].span.start.column, 9);
    assert_eq!(row.cells[1].span.end.column, 15);
}
