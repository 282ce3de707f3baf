//! IDE queries over the login workspace through the analysis host.

use std::path::Path;

use robotls::base::Position;
use robotls::ide::{AnalysisHost, CompletionKind, SymbolKind, TargetKind};
use robotls::syntax::NodeKind;

use crate::helpers::source_fixtures::BROWSER_RESOURCE;
use crate::helpers::workspace_helpers::login_host;

const LOGIN: &str = "/ws/login.robot";

fn start_line(location: robotls::base::Location) -> usize {
    location.span().map(|s| s.start.line).unwrap_or(usize::MAX)
}

#[test]
fn test_goto_qualified_call() {
    let host = login_host();
    let analysis = host.analysis();

    let targets = analysis.goto_definition(Path::new(LOGIN), Position::new(10, 6));
    assert_eq!(targets.len(), 1);
    assert_eq!(targets[0].kind, TargetKind::Keyword);
    assert_eq!(targets[0].name, "common.Find");
    assert_eq!(targets[0].path.as_deref(), Some(Path::new("/ws/common.resource")));
    assert_eq!(start_line(targets[0].location), 13);
}

#[test]
fn test_goto_from_settings_and_template() {
    let host = login_host();
    let analysis = host.analysis();

    let setup = analysis.goto_definition(Path::new(LOGIN), Position::new(3, 16));
    assert_eq!(setup.iter().map(|t| t.name.as_str()).collect::<Vec<_>>(), vec!["common.Open App"]);

    let template = analysis.goto_definition(Path::new(LOGIN), Position::new(15, 20));
    assert_eq!(template.len(), 1);
    assert_eq!(template[0].name, "common.Find");
}

#[test]
fn test_goto_ambiguous_nested_call() {
    let host = login_host();
    let analysis = host.analysis();

    let mut names: Vec<String> = analysis
        .goto_definition(Path::new(LOGIN), Position::new(12, 21))
        .into_iter()
        .map(|t| t.name)
        .collect();
    names.sort();
    assert_eq!(names, vec!["BuiltIn.Find", "browser.Find", "common.Find"]);
}

#[test]
fn test_goto_on_plain_argument_finds_nothing() {
    let host = login_host();
    let analysis = host.analysis();
    assert!(analysis.goto_definition(Path::new(LOGIN), Position::new(12, 30)).is_empty());
    assert!(analysis.goto_definition(Path::new("/ws/missing.robot"), Position::new(0, 0)).is_empty());
}

#[test]
fn test_references_of_qualified_keyword() {
    let host = login_host();
    let analysis = host.analysis();

    let references = analysis.find_references(Path::new(LOGIN), Position::new(10, 6), false);
    let mut lines: Vec<usize> = references.iter().map(|r| start_line(r.location)).collect();
    lines.sort();
    assert_eq!(lines, vec![10, 12, 15]);
    assert!(references.iter().all(|r| r.path.as_deref() == Some(Path::new(LOGIN))));
}

#[test]
fn test_references_with_declaration() {
    let host = login_host();
    let analysis = host.analysis();

    let references = analysis.find_references(Path::new(LOGIN), Position::new(4, 20), true);
    assert_eq!(references.len(), 3);
    let declarations: Vec<_> = references.iter().filter(|r| r.is_declaration).collect();
    assert_eq!(declarations.len(), 1);
    assert_eq!(declarations[0].path.as_deref(), Some(Path::new("/ws/browser.resource")));
    assert_eq!(start_line(declarations[0].location), 3);
}

#[test]
fn test_completions() {
    let host = login_host();
    let analysis = host.analysis();

    let mut labels: Vec<String> = analysis.completions("Fi").into_iter().map(|i| i.label).collect();
    labels.sort();
    assert_eq!(labels, vec!["BuiltIn.Find", "browser.Find", "common.Find"]);

    let log = analysis.completions("lo");
    assert_eq!(log.len(), 1);
    assert_eq!(log[0].label, "Log");
    assert_eq!(log[0].kind, CompletionKind::Keyword);
    assert_eq!(log[0].detail.as_deref(), Some("${message}    ${level}=INFO"));
    assert_eq!(log[0].documentation.as_deref(), Some("Logs the given message."));

    let variables = analysis.completions("${ba");
    assert_eq!(variables.len(), 1);
    assert_eq!(variables[0].label, "${BASE_URL}");
    assert_eq!(variables[0].kind, CompletionKind::Variable);
    assert_eq!(variables[0].detail.as_deref(), Some("common"));
}

#[test]
fn test_document_symbols() {
    let host = login_host();
    let analysis = host.analysis();

    let symbols = analysis.document_symbols(Path::new("/ws/common.resource"));
    let outline: Vec<(&str, SymbolKind)> = symbols.iter().map(|s| (s.name.as_str(), s.kind)).collect();
    assert_eq!(
        outline,
        vec![
            ("${BASE_URL}", SymbolKind::Variable),
            ("@{USERS}", SymbolKind::Variable),
            ("Open App", SymbolKind::Keyword),
            ("Find", SymbolKind::Keyword),
        ]
    );

    let tests = analysis.document_symbols(Path::new(LOGIN));
    assert_eq!(
        tests.iter().map(|s| s.name.as_str()).collect::<Vec<_>>(),
        vec!["Valid Login", "Templated Login"]
    );
    assert!(tests.iter().all(|s| s.container_name.as_deref() == Some("login")));
}

#[test]
fn test_workspace_symbols_include_libraries() {
    let host = login_host();
    let analysis = host.analysis();

    let found = analysis.workspace_symbols(Some("find"));
    assert_eq!(found.len(), 3);
    assert_eq!(found.iter().filter(|s| s.path.is_none()).count(), 1);
}

#[test]
fn test_node_at_position() {
    let host = login_host();
    let analysis = host.analysis();
    let node = analysis.node_at(Path::new(LOGIN), Position::new(9, 5)).unwrap();
    assert_eq!(node.kind(), NodeKind::Identifier);
    assert_eq!(node.as_identifier().unwrap().name, "Open App");
}

#[test]
fn test_edit_through_host_updates_queries() {
    let host = login_host();
    host.set_file_content("/ws/browser.resource", "*** Keywords ***\nClose All\n")
        .unwrap();

    {
        let analysis = host.analysis();
        let mut names: Vec<String> = analysis
            .goto_definition(Path::new(LOGIN), Position::new(12, 21))
            .into_iter()
            .map(|t| t.name)
            .collect();
        names.sort();
        assert_eq!(names, vec!["BuiltIn.Find", "common.Find"]);
    }

    host.set_file_content("/ws/browser.resource", BROWSER_RESOURCE).unwrap();
    assert!(host.remove_file(Path::new("/ws/common.resource")));
    let analysis = host.analysis();
    assert!(analysis.goto_definition(Path::new(LOGIN), Position::new(10, 6)).is_empty());
    assert_eq!(analysis.workspace().file_count(), 2);
}

#[test]
fn test_empty_host() {
    let host = AnalysisHost::new();
    assert_eq!(host.file_count(), 0);
    assert!(host.analysis().completions("").is_empty());
}
