//! Workspace and analysis host builders.

use robotls::hir::{KeywordSymbol, Library, LibraryDefinition, Workspace, WorkspaceFile};
use robotls::ide::AnalysisHost;

use super::source_fixtures::{BROWSER_RESOURCE, BUILTIN_JSON, COMMON_RESOURCE, LOGIN_SUITE};

pub fn file(path: &str, text: &str) -> WorkspaceFile {
    WorkspaceFile::from_text(path, text)
        .unwrap_or_else(|e| panic!("failed to parse '{}': {}", path, e))
}

pub fn builtin() -> Library {
    Library::new(&LibraryDefinition::from_json(BUILTIN_JSON).expect("valid library JSON"))
}

/// Workspace built from `(path, text)` pairs.
pub fn workspace_from(files: &[(&str, &str)]) -> Workspace {
    let mut workspace = Workspace::new();
    for (path, text) in files {
        workspace.add_file(file(path, text));
    }
    workspace
}

/// The two resources and the login suite, plus the BuiltIn library.
pub fn login_workspace() -> Workspace {
    let mut workspace = workspace_from(&[
        ("/ws/common.resource", COMMON_RESOURCE),
        ("/ws/browser.resource", BROWSER_RESOURCE),
        ("/ws/login.robot", LOGIN_SUITE),
    ]);
    workspace.add_library(builtin());
    workspace
}

pub fn login_host() -> AnalysisHost {
    AnalysisHost::from_workspace(login_workspace())
}

fn keyword_multiset<'a>(items: impl Iterator<Item = &'a KeywordSymbol>) -> Vec<String> {
    let mut names: Vec<String> = items
        .map(|k| format!("{}@{:?}", k.full_name(), k.location))
        .collect();
    names.sort();
    names
}

/// Global containers must hold exactly the union of every registered
/// file's and library's own containers.
pub fn assert_index_consistent(workspace: &Workspace) {
    let mut keywords: Vec<&KeywordSymbol> = Vec::new();
    let mut variables: Vec<String> = Vec::new();
    for file in workspace.get_files() {
        keywords.extend(file.keywords().iter());
        variables.extend(file.variables().iter().map(|v| format!("{}.{}", v.namespace, v.display_name())));
    }
    for library in workspace.libraries() {
        keywords.extend(library.symbols().keywords.iter());
        variables.extend(
            library
                .symbols()
                .variables
                .iter()
                .map(|v| format!("{}.{}", v.namespace, v.display_name())),
        );
    }

    assert_eq!(
        keyword_multiset(workspace.keywords().iter()),
        keyword_multiset(keywords.into_iter()),
        "global keyword container out of sync"
    );

    let mut global: Vec<String> = workspace
        .variables()
        .iter()
        .map(|v| format!("{}.{}", v.namespace, v.display_name()))
        .collect();
    global.sort();
    variables.sort();
    assert_eq!(global, variables, "global variable container out of sync");
}
