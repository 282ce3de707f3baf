use std::path::Path;

use rstest::rstest;

use robotls::hir::{Module, Workspace};
use robotls::parser::{Identifier, VariableKind};
use robotls::base::Location;

use crate::helpers::source_fixtures::{BROWSER_RESOURCE, COMMON_RESOURCE, LOGIN_SUITE};
use crate::helpers::workspace_helpers::{
    assert_index_consistent, builtin, file, login_workspace, workspace_from,
};

fn id(text: &str) -> Identifier {
    match text.rsplit_once('.') {
        Some((namespace, name)) => Identifier::namespaced(namespace, name, Location::Synthetic),
        None => Identifier::new(text, Location::Synthetic),
    }
}

#[test]
fn test_same_name_in_two_resources_is_one_group() {
    let workspace = workspace_from(&[
        ("/ws/common.resource", COMMON_RESOURCE),
        ("/ws/browser.resource", BROWSER_RESOURCE),
    ]);

    let groups = workspace.find_keywords("Find");
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].keywords.len(), 2);
    assert!(groups[0].show_namespace);

    let mut namespaces: Vec<&str> = groups[0].keywords.iter().map(|k| k.namespace.as_str()).collect();
    namespaces.sort();
    assert_eq!(namespaces, vec!["browser", "common"]);
}

#[test]
fn test_library_keyword_joins_the_group() {
    let groups = login_workspace().find_keywords("find");
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].keywords.len(), 3);
}

#[rstest]
#[case("Open", vec![("Open App", false)])]
#[case("common.", vec![("Find", true), ("Open App", true)])]
#[case("browser.cl", vec![("Close All", true)])]
#[case("Run", vec![("Run Keywords", false)])]
#[case("zzz", vec![])]
fn test_find_keywords(#[case] text: &str, #[case] expected: Vec<(&str, bool)>) {
    let groups = login_workspace().find_keywords(text);
    let actual: Vec<(&str, bool)> = groups
        .iter()
        .map(|g| (g.name.as_str(), g.show_namespace))
        .collect();
    assert_eq!(actual, expected);
}

#[rstest]
#[case("Find", "login", &["BuiltIn", "browser", "common"])]
#[case("Find", "browser", &["browser"])]
#[case("common.Find", "login", &["common"])]
#[case("BUILTIN.find", "login", &["BuiltIn"])]
#[case("Close All", "login", &["browser"])]
#[case("Missing", "login", &[])]
fn test_resolve_keyword(#[case] text: &str, #[case] from: &str, #[case] expected: &[&str]) {
    let workspace = login_workspace();
    let mut namespaces: Vec<&str> = workspace
        .resolve_keyword(&id(text), from)
        .into_iter()
        .map(|k| k.namespace.as_str())
        .collect();
    namespaces.sort();
    assert_eq!(namespaces, expected);
}

#[test]
fn test_resolve_variable_by_sigil() {
    let workspace = login_workspace();
    assert_eq!(workspace.resolve_variable(VariableKind::Scalar, "base_url", "login").len(), 1);
    assert_eq!(workspace.resolve_variable(VariableKind::List, "USERS", "login").len(), 1);
    assert!(workspace.resolve_variable(VariableKind::Scalar, "USERS", "login").is_empty());
}

#[test]
fn test_modules_by_namespace() {
    let workspace = login_workspace();

    assert!(matches!(workspace.get_module_by_namespace("COMMON"), Some(Module::File(_))));
    assert!(matches!(workspace.get_module_by_namespace("builtin"), Some(Module::Library(_))));
    assert!(workspace.get_file_by_namespace("BuiltIn").is_none());

    let found: Vec<&str> = workspace
        .find_modules_by_namespace("b")
        .iter()
        .map(|m| m.namespace())
        .collect();
    assert_eq!(found, vec!["browser", "BuiltIn"]);

    let symbols = workspace.get_symbols_by_namespace("common").unwrap();
    assert_eq!(symbols.keywords.size(), 2);
    assert_eq!(symbols.variables.size(), 2);
}

#[test]
fn test_re_adding_a_file_is_idempotent() {
    let mut workspace = login_workspace();
    let before = workspace.keywords().size();

    workspace.add_file(file("/ws/common.resource", COMMON_RESOURCE));
    workspace.add_file(file("/ws/common.resource", COMMON_RESOURCE));

    assert_eq!(workspace.keywords().size(), before);
    assert_eq!(workspace.file_count(), 3);
    assert_index_consistent(&workspace);
}

#[test]
fn test_edit_replaces_symbols() {
    let mut workspace = login_workspace();
    workspace.add_file(file(
        "/ws/common.resource",
        "*** Keywords ***\nOpen App\nSearch\n",
    ));

    assert_eq!(workspace.resolve_keyword(&id("common.Find"), "login").len(), 0);
    assert_eq!(workspace.resolve_keyword(&id("Search"), "login").len(), 1);
    assert!(workspace.variables().find_exact("${base_url}").is_empty());
    assert_index_consistent(&workspace);
}

#[test]
fn test_remove_file_and_library() {
    let mut workspace = login_workspace();

    let removed = workspace.remove_file_by_path(Path::new("/ws/browser.resource")).unwrap();
    assert_eq!(removed.namespace(), "browser");
    assert!(workspace.get_module_by_namespace("browser").is_none());
    assert_eq!(workspace.find_keywords("Find")[0].keywords.len(), 2);
    assert_index_consistent(&workspace);

    let library = workspace.remove_library("builtin").unwrap();
    assert_eq!(library.name(), "BuiltIn");
    assert!(workspace.find_keywords("Log").is_empty());
    assert_index_consistent(&workspace);

    workspace.add_library(builtin());
    workspace.add_library(builtin());
    assert_eq!(workspace.libraries().count(), 1);
    assert_eq!(workspace.find_keywords("Log")[0].keywords.len(), 1);
    assert_index_consistent(&workspace);
}

#[test]
fn test_suite_without_keywords_still_registers_its_namespace() {
    let workspace = workspace_from(&[("/ws/login.robot", LOGIN_SUITE)]);
    assert!(workspace.keywords().is_empty());
    assert!(workspace.get_file_by_namespace("login").is_some());
}

#[test]
fn test_clear() {
    let mut workspace = login_workspace();
    workspace.clear();
    assert_eq!(workspace.file_count(), 0);
    assert_eq!(workspace.libraries().count(), 0);
    assert!(workspace.keywords().is_empty());
    assert!(workspace.find_modules_by_namespace("").is_empty());
    assert_index_consistent(&Workspace::new());
}
