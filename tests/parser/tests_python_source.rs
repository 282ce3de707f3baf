//! Python keyword libraries parsed through the workspace file dispatch.

use robotls::hir::WorkspaceFile;
use robotls::parser::parse_python_source;

use crate::helpers::source_fixtures::HELPERS_PY;

#[test]
fn test_python_file_exports_public_functions() {
    let file = WorkspaceFile::from_text("/ws/lib/helpers.py", HELPERS_PY).unwrap();
    assert!(file.syntax().is_python());
    assert_eq!(file.namespace(), "helpers");

    let names: Vec<String> = file.keywords().iter().map(|k| k.name.to_string()).collect();
    assert_eq!(names, vec!["log_in", "wait_for_ready"]);
}

#[test]
fn test_python_argument_signatures() {
    let file = WorkspaceFile::from_text("/ws/lib/helpers.py", HELPERS_PY).unwrap();

    let wait = &file.keywords().find_exact("WAIT_FOR_READY")[0];
    assert_eq!(wait.arguments, vec!["${timeout}=10", "@{checks}"]);

    let log_in = &file.keywords().find_exact("log_in")[0];
    assert_eq!(log_in.arguments, vec!["${user}", "${password}=None"]);
    assert_eq!(log_in.full_name(), "helpers.log_in");
}

#[test]
fn test_def_line_is_the_location() {
    let suite = parse_python_source(HELPERS_PY, "helpers");
    let span = suite.keywords()[0].location.span().unwrap();
    assert_eq!(span.start.line, 2);
    assert_eq!(span.start.column, 0);
}

#[test]
fn test_source_without_functions() {
    let suite = parse_python_source("import os\nVALUE = 1\n", "consts");
    assert!(suite.keywords().is_empty());
}
